/// Image loading module
///
/// This module handles:
/// - Parsing a user-supplied location into a local path or remote URL
/// - Fetching remote images into the local cache
/// - Decoding images into displayable bitmaps

use thiserror::Error;

pub mod decode;
pub mod fetch;
pub mod resolve;

pub use decode::DecodedImage;
pub use resolve::ImageSource;

/// Everything that can go wrong between a location string and a displayed image
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The location carries a scheme we don't speak (only bare paths,
    /// file:// and http(s):// are accepted)
    #[error("unsupported scheme in \"{0}\"")]
    UnsupportedScheme(String),

    /// Network or HTTP-status failure while fetching a remote image
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The file is missing or not a readable image format
    #[error("could not decode image: {0}")]
    Decode(String),
}

/// Load an image from a user-supplied location.
///
/// Resolves the location to a local path (fetching it first if remote),
/// then decodes it. This is the single entry point the UI dispatches.
pub async fn load(location: String) -> Result<DecodedImage, LoadError> {
    let path = match resolve::resolve(&location)? {
        ImageSource::Local(path) => path,
        ImageSource::Remote(url) => fetch::fetch_remote(&url).await?,
    };

    decode::decode(path).await
}
