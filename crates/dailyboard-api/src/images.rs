use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageProbeError {
    #[error("Image request failed: {0}")]
    RequestFailed(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Image decode failed: {0}")]
    DecodeFailed(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ImageProbeError>;

/// Natural dimensions of a fetched image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDims {
    pub width: u32,
    pub height: u32,
}

/// Out-of-band image probe: downloads the bytes and decodes just enough
/// to report the natural dimensions. Any transport or decode failure is
/// reported to the caller, which treats it as a failed candidate.
pub struct ImageProbe {
    client: reqwest::Client,
}

impl ImageProbe {
    pub fn new() -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("dailyboard/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    pub async fn probe(&self, url: &str) -> Result<ImageDims> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ImageProbeError::RequestFailed(format!(
                "Status {} for {}",
                response.status(),
                url
            )));
        }

        let bytes = response.bytes().await?;
        dimensions_of(&bytes)
    }
}

impl Default for ImageProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode image bytes and report their dimensions.
fn dimensions_of(data: &[u8]) -> Result<ImageDims> {
    let img = image::load_from_memory(data)?;
    Ok(ImageDims {
        width: img.width(),
        height: img.height(),
    })
}
