// HTTP clients for the external services the board talks to
pub mod images;
pub mod met;
pub mod retry;
pub mod weather;

// Re-export common types
pub use images::{ImageDims, ImageProbe, ImageProbeError};
pub use met::{MetClient, MetError, MetObject, MET_OBJECT_URL, MET_SEARCH_URL};
pub use retry::RetryPolicy;
pub use weather::{ForecastResponse, WeatherClient, WeatherError};
