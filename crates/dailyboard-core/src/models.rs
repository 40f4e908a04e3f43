use serde::{Deserialize, Serialize};

/// Display-ready artwork record - the star of the landing page.
///
/// Every field is optional; absent fields are simply not rendered, and
/// `skip_serializing_if` keeps them absent through a cache round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image: Option<String>,
}

/// One day's cached resolution. The store holds at most one of these,
/// overwritten daily; a mismatched `date` means the entry is stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCacheEntry {
    pub date: String,
    pub artwork: ArtworkRecord,
}

/// Weather as the board displays it: rounded temperatures, raw WMO code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature: i32,
    pub code: u8,
    pub high: i32,
    pub low: i32,
}

/// A daily love note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoveNote {
    pub note: String,
}

/// A daily photo with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCaption {
    pub image: String,
    pub caption: String,
}

/// A daily embeddable game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_absent_through_json() {
        let record = ArtworkRecord {
            title: Some("Wheat Field with Cypresses".into()),
            primary_image: Some("https://example.org/DT1567.jpg".into()),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("artist_bio"));
        assert!(!json.contains("medium"));

        let back: ArtworkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn cache_entry_round_trips_byte_identically() {
        let entry = DailyCacheEntry {
            date: "2026-08-07".into(),
            artwork: ArtworkRecord {
                title: Some("The Gulf Stream".into()),
                artist: Some("Winslow Homer".into()),
                accession_year: Some("1906".into()),
                primary_image: Some("https://example.org/DT2405.jpg".into()),
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&entry).unwrap();
        let back: DailyCacheEntry = serde_json::from_str(&json).unwrap();
        let json_again = serde_json::to_string(&back).unwrap();
        assert_eq!(json, json_again);
        assert_eq!(back, entry);
    }
}
