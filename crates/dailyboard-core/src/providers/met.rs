// Met Museum provider - bridges the API client with the ArtworkSource trait
use async_trait::async_trait;
use dailyboard_api::{ImageProbe, MetClient, MetObject};

use crate::{
    config::MuseumConfig,
    models::ArtworkRecord,
    source::{ArtworkCandidate, ArtworkSource, ImageDims},
    Error, Result,
};

/// Wrapper around MetClient + ImageProbe that implements ArtworkSource
pub struct MetArtworkSource {
    client: MetClient,
    probe: ImageProbe,
}

impl MetArtworkSource {
    pub fn new(config: &MuseumConfig) -> Self {
        Self {
            client: MetClient::with_urls(config.search_url.clone(), config.object_url.clone()),
            probe: ImageProbe::new(),
        }
    }
}

#[async_trait]
impl ArtworkSource for MetArtworkSource {
    async fn object_ids(&self) -> Result<Vec<u64>> {
        self.client
            .search_object_ids()
            .await
            .map_err(|e| Error::Api(e.to_string()))
    }

    async fn fetch_object(&self, id: u64) -> Result<ArtworkCandidate> {
        let object = self
            .client
            .get_object(id)
            .await
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(met_to_candidate(object))
    }

    async fn probe_image(&self, url: &str) -> Result<ImageDims> {
        let dims = self
            .probe
            .probe(url)
            .await
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(ImageDims {
            width: dims.width,
            height: dims.height,
        })
    }
}

/// Convert a wire object to a candidate, mapping the API's empty strings
/// to absent fields.
fn met_to_candidate(object: MetObject) -> ArtworkCandidate {
    ArtworkCandidate {
        public_domain: object.is_public_domain,
        record: ArtworkRecord {
            title: non_empty(object.title),
            artist: non_empty(object.artist_display_name),
            artist_bio: non_empty(object.artist_display_bio),
            object_date: non_empty(object.object_date),
            medium: non_empty(object.medium),
            department: non_empty(object.department),
            credit_line: non_empty(object.credit_line),
            accession_year: non_empty(object.accession_year),
            primary_image: non_empty(object.primary_image),
        },
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_wire_fields_become_absent() {
        let object = MetObject {
            object_id: 1,
            title: "The Gulf Stream".into(),
            is_public_domain: true,
            ..Default::default()
        };

        let candidate = met_to_candidate(object);
        assert!(candidate.public_domain);
        assert_eq!(candidate.record.title.as_deref(), Some("The Gulf Stream"));
        assert_eq!(candidate.record.artist, None);
        assert_eq!(candidate.record.primary_image, None);
    }
}
