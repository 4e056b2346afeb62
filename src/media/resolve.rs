/// Location resolution
///
/// A location typed into the box can be a bare filesystem path, a file://
/// path, or an http(s):// URL. Anything else with an explicit scheme is
/// rejected before we touch the disk or the network.

use std::path::PathBuf;

use super::LoadError;

/// The parsed form of a user-supplied location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A path on the local filesystem
    Local(PathBuf),
    /// An HTTP or HTTPS URL to fetch
    Remote(String),
}

/// Parse a location string into an [`ImageSource`].
///
/// - `file://` prefixes are stripped and the remainder is treated as local
/// - `http://` and `https://` classify as remote
/// - any other `scheme://` is an error
/// - everything else passes through as a local path unchanged
pub fn resolve(location: &str) -> Result<ImageSource, LoadError> {
    let location = location.trim();

    if let Some(path) = location.strip_prefix("file://") {
        return Ok(ImageSource::Local(PathBuf::from(path)));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(ImageSource::Remote(location.to_string()));
    }

    // "ftp://", "gopher://", ... — explicit schemes we don't handle.
    // A bare Windows drive path ("C:\...") has no "//" and stays local.
    if location.contains("://") {
        return Err(LoadError::UnsupportedScheme(location.to_string()));
    }

    Ok(ImageSource::Local(PathBuf::from(location)))
}
