// Bridges between the raw API clients and the core traits
pub mod met;

pub use met::MetArtworkSource;
