// SQLite-backed key-value persistence
// The browser original kept this in localStorage; a single kv table is
// the same contract with a real file behind it.

pub mod store;

pub use store::{SqliteStore, StoreError};
