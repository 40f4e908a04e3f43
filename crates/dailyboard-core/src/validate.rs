use crate::models::ArtworkRecord;
use crate::source::{ArtworkCandidate, ImageDims};

/// Filename markers the museum API uses for its "no photo available"
/// assets. Best-effort heuristic - the API does not document the naming
/// convention, so this list is configurable and matched loosely.
pub const PLACEHOLDER_MARKERS: [&str; 3] = ["image-number-only", "no-image", "placeholder"];

/// Smallest acceptable image edge, in pixels.
pub const MIN_IMAGE_DIMENSION: u32 = 200;

fn filename_of(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Case-insensitive substring match of the URL's final path segment
/// against the placeholder markers.
pub fn is_placeholder_url(url: &str, markers: &[String]) -> bool {
    let filename = filename_of(url).to_lowercase();
    markers
        .iter()
        .any(|marker| filename.contains(&marker.to_lowercase()))
}

/// The checks that need no network: a primary image URL exists and its
/// filename is not a known placeholder. Run against fresh candidates and
/// again against cached records before a warm hit is trusted.
pub fn displayable_image_url<'a>(record: &'a ArtworkRecord, markers: &[String]) -> Option<&'a str> {
    let url = record.primary_image.as_deref()?;
    if url.is_empty() || is_placeholder_url(url, markers) {
        return None;
    }
    Some(url)
}

/// Offline acceptance for a fresh candidate: public domain with a
/// displayable image URL. The dimension probe runs separately because it
/// costs a network round trip.
pub fn accepts_offline<'a>(candidate: &'a ArtworkCandidate, markers: &[String]) -> Option<&'a str> {
    if !candidate.public_domain {
        return None;
    }
    displayable_image_url(&candidate.record, markers)
}

/// Both edges at or above the minimum.
pub fn meets_min_dimensions(dims: ImageDims, min: u32) -> bool {
    dims.width >= min && dims.height >= min
}

pub fn default_markers() -> Vec<String> {
    PLACEHOLDER_MARKERS.iter().map(|m| m.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArtworkRecord;

    fn record_with_image(url: &str) -> ArtworkRecord {
        ArtworkRecord {
            primary_image: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn placeholder_markers_match_filenames() {
        let markers = default_markers();
        assert!(is_placeholder_url(
            "https://images.metmuseum.org/CRDImages/ep/original/image-number-only.jpg",
            &markers
        ));
        assert!(is_placeholder_url(
            "https://images.metmuseum.org/CRDImages/ep/original/no-image-available.png",
            &markers
        ));
        assert!(is_placeholder_url(
            "https://example.org/assets/PLACEHOLDER.JPG",
            &markers
        ));
    }

    #[test]
    fn real_artwork_urls_pass() {
        let markers = default_markers();
        assert!(!is_placeholder_url(
            "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
            &markers
        ));
    }

    #[test]
    fn marker_must_be_in_filename_not_path() {
        let markers = default_markers();
        assert!(!is_placeholder_url(
            "https://cdn.example.org/no-image/DT1567.jpg",
            &markers
        ));
    }

    #[test]
    fn missing_or_empty_image_is_not_displayable() {
        let markers = default_markers();
        assert_eq!(
            displayable_image_url(&ArtworkRecord::default(), &markers),
            None
        );
        assert_eq!(displayable_image_url(&record_with_image(""), &markers), None);
    }

    #[test]
    fn offline_acceptance_requires_public_domain() {
        let markers = default_markers();
        let candidate = ArtworkCandidate {
            public_domain: false,
            record: record_with_image("https://example.org/DT1567.jpg"),
        };
        assert_eq!(accepts_offline(&candidate, &markers), None);

        let candidate = ArtworkCandidate {
            public_domain: true,
            ..candidate
        };
        assert_eq!(
            accepts_offline(&candidate, &markers),
            Some("https://example.org/DT1567.jpg")
        );
    }

    #[test]
    fn dimension_boundary_is_inclusive() {
        let min = MIN_IMAGE_DIMENSION;
        assert!(meets_min_dimensions(
            ImageDims {
                width: 200,
                height: 200
            },
            min
        ));
        assert!(!meets_min_dimensions(
            ImageDims {
                width: 199,
                height: 400
            },
            min
        ));
        assert!(!meets_min_dimensions(
            ImageDims {
                width: 400,
                height: 199
            },
            min
        ));
    }
}
