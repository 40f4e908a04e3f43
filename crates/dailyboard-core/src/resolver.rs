// Daily artwork resolution - cache first, then a stride walk over the
// search results until a candidate survives validation.
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    clock::{date_key, day_index, Clock},
    models::{ArtworkRecord, DailyCacheEntry},
    source::ArtworkSource,
    store::DailyStore,
    validate,
};

/// The one key the persisted cache holds.
pub const CACHE_KEY: &str = "daily-artwork";

/// Candidates examined before giving up for the day.
pub const MAX_RETRIES: u32 = 10;

/// Large prime added per attempt. Keeps consecutive days' probe sequences
/// decorrelated from consecutive retries, so a bad patch of adjacent ids
/// does not sink a whole week.
pub const RETRY_STRIDE: i64 = 7919;

/// What a resolution produced. Errors never escape the resolver; the
/// worst outcome is `NotFound` and a quiet landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ArtworkRecord),
    NotFound,
}

impl Resolution {
    pub fn found(&self) -> Option<&ArtworkRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }
}

/// Probe indices for one day: `(day_index + k * stride) mod len` for
/// each attempt `k`. Pure, finite, restartable. `len` must be nonzero.
pub fn candidate_indices(
    day_index: i64,
    len: usize,
    max_retries: u32,
    stride: i64,
) -> impl Iterator<Item = usize> {
    (0..i64::from(max_retries))
        .map(move |attempt| (day_index + attempt * stride).rem_euclid(len as i64) as usize)
}

/// Tuning knobs, loaded from config in real runs.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    pub max_retries: u32,
    pub retry_stride: i64,
    pub min_image_dimension: u32,
    pub placeholder_markers: Vec<String>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            retry_stride: RETRY_STRIDE,
            min_image_dimension: validate::MIN_IMAGE_DIMENSION,
            placeholder_markers: validate::default_markers(),
        }
    }
}

/// Resolves the artwork of the day.
///
/// Runs once per page load: cache probe, then at most `max_retries`
/// sequential candidate fetches. Every failure path - transport, parse,
/// validation, cache corruption - collapses into advancing the stride or
/// returning `NotFound`. The caller never sees an error.
pub struct ArtworkResolver {
    source: Arc<dyn ArtworkSource>,
    store: Arc<dyn DailyStore>,
    clock: Arc<dyn Clock>,
    options: ResolverOptions,
}

impl ArtworkResolver {
    pub fn new(
        source: Arc<dyn ArtworkSource>,
        store: Arc<dyn DailyStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::with_options(source, store, clock, ResolverOptions::default())
    }

    pub fn with_options(
        source: Arc<dyn ArtworkSource>,
        store: Arc<dyn DailyStore>,
        clock: Arc<dyn Clock>,
        options: ResolverOptions,
    ) -> Self {
        Self {
            source,
            store,
            clock,
            options,
        }
    }

    /// Produce today's artwork, or `NotFound` once the attempts run out.
    pub async fn resolve(&self) -> Resolution {
        let today = self.clock.today();
        let key_date = date_key(today);

        if let Some(record) = self.cached_for(&key_date) {
            info!("cache hit for {}", key_date);
            return Resolution::Found(record);
        }

        match self.resolve_fresh(day_index(today), &key_date).await {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!("resolution failed for {}: {}", key_date, e);
                Resolution::NotFound
            }
        }
    }

    /// Warm path: same-day entry whose image still passes the offline
    /// checks. Zero network calls. Corrupt or stale entries read as a
    /// miss.
    fn cached_for(&self, key_date: &str) -> Option<ArtworkRecord> {
        let raw = self.store.get(CACHE_KEY)?;
        let entry: DailyCacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("cache entry corrupt, treating as miss: {}", e);
                return None;
            }
        };

        if entry.date != key_date {
            debug!("cache entry from {} is stale", entry.date);
            return None;
        }

        validate::displayable_image_url(&entry.artwork, &self.options.placeholder_markers)?;
        Some(entry.artwork)
    }

    async fn resolve_fresh(&self, day_index: i64, key_date: &str) -> crate::Result<Resolution> {
        let ids = self.source.object_ids().await?;
        if ids.is_empty() {
            info!("search returned no object ids");
            return Ok(Resolution::NotFound);
        }

        let indices = candidate_indices(
            day_index,
            ids.len(),
            self.options.max_retries,
            self.options.retry_stride,
        );

        for (attempt, idx) in indices.enumerate() {
            let id = ids[idx];
            match self.try_candidate(id).await {
                Ok(Some(record)) => {
                    info!("accepted object {} on attempt {}", id, attempt);
                    self.persist(key_date, &record);
                    return Ok(Resolution::Found(record));
                }
                Ok(None) => {
                    debug!("object {} failed validation (attempt {})", id, attempt);
                }
                Err(e) => {
                    debug!("object {} fetch failed (attempt {}): {}", id, attempt, e);
                }
            }
        }

        info!("no valid artwork after {} attempts", self.options.max_retries);
        Ok(Resolution::NotFound)
    }

    /// One candidate: fetch, offline checks, then the dimension probe.
    /// `Ok(None)` means validation rejected it; `Err` means the fetch or
    /// probe itself fell over. Both advance the stride.
    async fn try_candidate(&self, id: u64) -> crate::Result<Option<ArtworkRecord>> {
        let candidate = self.source.fetch_object(id).await?;

        let Some(url) = validate::accepts_offline(&candidate, &self.options.placeholder_markers)
        else {
            return Ok(None);
        };

        let dims = self.source.probe_image(url).await?;
        if !validate::meets_min_dimensions(dims, self.options.min_image_dimension) {
            debug!(
                "object {} image too small: {}x{}",
                id, dims.width, dims.height
            );
            return Ok(None);
        }

        Ok(Some(candidate.record))
    }

    fn persist(&self, key_date: &str, record: &ArtworkRecord) {
        let entry = DailyCacheEntry {
            date: key_date.to_string(),
            artwork: record.clone(),
        };
        match serde_json::to_string(&entry) {
            Ok(json) => self.store.put(CACHE_KEY, &json),
            Err(e) => debug!("failed to serialize cache entry: {}", e),
        }
    }
}
