use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::retry::{with_retry, RetryPolicy};

/// Default search: paintings with images. The board's daily rotation walks
/// the id list this search returns.
pub const MET_SEARCH_URL: &str =
    "https://collectionapi.metmuseum.org/public/collection/v1/search?hasImages=true&q=painting";
pub const MET_OBJECT_URL: &str =
    "https://collectionapi.metmuseum.org/public/collection/v1/objects";

#[derive(Error, Debug)]
pub enum MetError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Object not found: {0}")]
    NotFound(u64),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetError>;

/// Client for the Met Museum open-access collection API.
///
/// Two endpoints matter: search (one call per resolution, backoff-retried)
/// and object-by-id (one call per stride attempt, not backoff-retried;
/// the caller's stride loop is the retry mechanism for candidates).
pub struct MetClient {
    client: reqwest::Client,
    search_url: String,
    object_url: String,
    retry_policy: RetryPolicy,
}

impl MetClient {
    pub fn new() -> Self {
        Self::with_urls(MET_SEARCH_URL.to_string(), MET_OBJECT_URL.to_string())
    }

    /// For tests, a caching proxy, or a different search query
    pub fn with_urls(search_url: String, object_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("dailyboard/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            search_url,
            object_url,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Fetch the ordered object-id list for the configured search.
    ///
    /// The API reports `objectIDs: null` when nothing matches; that comes
    /// back as an empty list rather than an error.
    pub async fn search_object_ids(&self) -> Result<Vec<u64>> {
        with_retry(&self.retry_policy, || async {
            let response = self.client.get(&self.search_url).send().await?;

            if response.status() == 429 {
                return Err(MetError::RateLimitExceeded);
            }

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(MetError::RequestFailed(format!(
                    "Status {}: {}",
                    status, body
                )));
            }

            let search: SearchResponse = response.json().await?;
            let ids = search.object_ids.unwrap_or_default();
            debug!("search reported {} total, {} ids", search.total, ids.len());
            Ok(ids)
        })
        .await
    }

    /// Fetch a single object record. A 404 (the API serves one for ids
    /// that were withdrawn after indexing) maps to `NotFound`.
    pub async fn get_object(&self, id: u64) -> Result<MetObject> {
        let url = format!("{}/{}", self.object_url.trim_end_matches('/'), id);

        let response = self.client.get(&url).send().await?;

        if response.status() == 404 {
            return Err(MetError::NotFound(id));
        }

        if response.status() == 429 {
            return Err(MetError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MetError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let object: MetObject = response.json().await?;
        Ok(object)
    }
}

impl Default for MetClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total: u64,
    #[serde(default, rename = "objectIDs")]
    object_ids: Option<Vec<u64>>,
}

/// Object record as the collection API serves it. Every descriptive field
/// defaults to empty - the API omits nothing but serves plenty of `""`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetObject {
    #[serde(rename = "objectID")]
    pub object_id: u64,
    pub title: String,
    pub artist_display_name: String,
    pub artist_display_bio: String,
    pub object_date: String,
    pub medium: String,
    pub department: String,
    pub credit_line: String,
    pub accession_year: String,
    pub primary_image: String,
    pub primary_image_small: String,
    pub is_public_domain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response() {
        let json = r#"{"total":3,"objectIDs":[436535,437853,436105]}"#;
        let search: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(search.object_ids, Some(vec![436535, 437853, 436105]));
    }

    #[test]
    fn empty_search_serves_null_ids() {
        let json = r#"{"total":0,"objectIDs":null}"#;
        let search: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(search.object_ids, None);
    }

    #[test]
    fn parses_object_record() {
        let json = r#"{
            "objectID": 436535,
            "isPublicDomain": true,
            "primaryImage": "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
            "primaryImageSmall": "https://images.metmuseum.org/CRDImages/ep/web-large/DT1567.jpg",
            "department": "European Paintings",
            "title": "Wheat Field with Cypresses",
            "artistDisplayName": "Vincent van Gogh",
            "artistDisplayBio": "Dutch, Zundert 1853–1890 Auvers-sur-Oise",
            "objectDate": "1889",
            "medium": "Oil on canvas",
            "creditLine": "Purchase, The Annenberg Foundation Gift, 1993",
            "accessionYear": "1993"
        }"#;
        let object: MetObject = serde_json::from_str(json).unwrap();
        assert_eq!(object.object_id, 436535);
        assert!(object.is_public_domain);
        assert_eq!(object.artist_display_name, "Vincent van Gogh");
        assert_eq!(object.accession_year, "1993");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let object: MetObject = serde_json::from_str(r#"{"objectID": 1}"#).unwrap();
        assert_eq!(object.object_id, 1);
        assert!(object.primary_image.is_empty());
        assert!(!object.is_public_domain);
    }
}
