/// Remote image fetching
///
/// Remote images are downloaded into a single well-known file in the user's
/// cache directory, overwritten on each new fetch. Concurrent fetches share
/// that file and the last writer wins; the app only ever displays the most
/// recent submission, so older fetches are abandoned anyway.

use std::path::PathBuf;

use super::LoadError;

/// Get the cache directory for fetched remote images
/// Returns ~/.cache/safeview/remote on Linux
pub fn get_remote_cache_dir() -> PathBuf {
    let mut path = dirs_next::cache_dir()
        .or_else(|| dirs_next::home_dir())
        .expect("Could not determine cache directory");

    path.push("safeview");
    path.push("remote");

    // Ensure the directory exists
    std::fs::create_dir_all(&path).expect("Failed to create remote image cache directory");

    path
}

/// The single on-disk slot remote fetches land in
pub fn remote_cache_path() -> PathBuf {
    get_remote_cache_dir().join("fetched.img")
}

/// Fetch a remote image into the local cache and return its path.
///
/// Fails with [`LoadError::Fetch`] on network errors, non-success HTTP
/// statuses, and write failures.
pub async fn fetch_remote(url: &str) -> Result<PathBuf, LoadError> {
    println!("🌐 Fetching remote image: {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| LoadError::Fetch(format!("request to {} failed: {}", url, e)))?;

    let response = response
        .error_for_status()
        .map_err(|e| LoadError::Fetch(format!("server rejected {}: {}", url, e)))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| LoadError::Fetch(format!("failed reading body of {}: {}", url, e)))?;

    let path = remote_cache_path();
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| LoadError::Fetch(format!("failed writing {}: {}", path.display(), e)))?;

    println!("🌐 Fetched {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_is_stable() {
        // Two calls must name the same slot — that is the overwrite contract
        assert_eq!(remote_cache_path(), remote_cache_path());
        assert!(remote_cache_path().ends_with("safeview/remote/fetched.img"));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_fetch_error() {
        // Port 1 on loopback refuses immediately; no external network needed
        let err = fetch_remote("http://127.0.0.1:1/a.png").await.unwrap_err();
        assert!(matches!(err, LoadError::Fetch(_)));
    }
}
