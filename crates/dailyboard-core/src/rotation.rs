// Daily rotation over fixed content lists - notes, photos, games
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Today's pick from a fixed list: `day_index mod len`. Same pick all
/// day, next entry tomorrow, wraps around when the list runs out.
pub fn daily_pick<T>(items: &[T], day_index: i64) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    items.get(day_index.rem_euclid(items.len() as i64) as usize)
}

/// Load a JSON content list. A missing path or unreadable file is an
/// empty list - the board just renders without that widget.
pub fn load_list<T: DeserializeOwned>(path: Option<&Path>) -> Vec<T> {
    let Some(path) = path else {
        return Vec::new();
    };

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            debug!("content list {} not readable: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(items) => items,
        Err(e) => {
            warn!("content list {} is not valid JSON: {}", path.display(), e);
            Vec::new()
        }
    }
}
