use crate::{models::ArtworkRecord, Result};

/// A fetched museum object before validation: the display record plus the
/// flags validation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkCandidate {
    pub public_domain: bool,
    pub record: ArtworkRecord,
}

/// Natural dimensions reported by the image probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDims {
    pub width: u32,
    pub height: u32,
}

/// Where daily artwork comes from - makes testing easier and keeps the
/// resolver ignorant of HTTP.
///
/// One implementation talks to the Met collection API; tests script their
/// own. All three calls suspend without blocking anything else on the
/// board.
#[async_trait::async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Ordered object-id list from the search endpoint. Fetched once per
    /// resolution, never cached.
    async fn object_ids(&self) -> Result<Vec<u64>>;

    /// One object record by id.
    async fn fetch_object(&self, id: u64) -> Result<ArtworkCandidate>;

    /// Load the image out-of-band and report its natural dimensions.
    async fn probe_image(&self, url: &str) -> Result<ImageDims>;
}
