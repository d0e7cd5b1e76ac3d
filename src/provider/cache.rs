// Pass-through on-disk cache for provider responses

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::PitwallError;

/// Stores raw response bodies, one file per request URL.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    cache_dir: PathBuf,
}

impl ResponseCache {
    /// Creates the cache directory if needed. Calling this on an existing
    /// directory is not an error.
    pub fn enable(cache_dir: impl Into<PathBuf>) -> Result<Self, PitwallError> {
        let cache_dir = cache_dir.into();
        fs::create_dir_all(&cache_dir).map_err(|e| PitwallError::CacheIo { source: e })?;
        debug!("Response cache enabled at {:?}", cache_dir);
        Ok(Self { cache_dir })
    }

    pub fn dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Encode a request URL as a file name. ASCII letters and digits are kept,
    /// every other byte becomes `_` plus two hex digits, so distinct URLs never
    /// share a file.
    fn file_name_for(url: &str) -> String {
        let stripped = url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let mut stem = String::with_capacity(stripped.len());
        for byte in stripped.bytes() {
            if byte.is_ascii_alphanumeric() {
                stem.push(char::from(byte));
            } else {
                stem.push_str(&format!("_{:02x}", byte));
            }
        }
        format!("{}.json", stem)
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        self.cache_dir.join(Self::file_name_for(url))
    }

    pub fn get(&self, url: &str) -> Result<Option<String>, PitwallError> {
        let path = self.path_for(url);
        if !path.exists() {
            debug!("Cache miss for {}", url);
            return Ok(None);
        }
        debug!("Cache hit for {}", url);
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| PitwallError::CacheIo { source: e })
    }

    pub fn put(&self, url: &str, body: &str) -> Result<(), PitwallError> {
        fs::write(self.path_for(url), body).map_err(|e| PitwallError::CacheIo { source: e })
    }
}
