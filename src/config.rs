use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::PitwallError;

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "pitwall";

pub const DEFAULT_API_BASE_URL: &str = "https://api.openf1.org/v1";
pub const DEFAULT_CACHE_DIR: &str = "cache";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Relative paths resolve against the working directory
    pub cache_dir: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
    pub stint_line_width: f32,
    pub label_outline_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            window_width: 1200.,
            window_height: 700.,
            stint_line_width: 6.,
            label_outline_width: 1.,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf, PitwallError> {
        Ok(dirs::config_dir()
            .ok_or(PitwallError::NoConfigDir)?
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Loads the user's config file, `None` when there isn't one.
    pub fn from_local_file() -> Result<Option<Self>, PitwallError> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::from_file(&config_path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn from_file(config_path: &Path) -> Result<Self, PitwallError> {
        let file =
            std::fs::File::open(config_path).map_err(|e| PitwallError::ConfigIO { source: e })?;
        serde_json::from_reader(file).map_err(|e| PitwallError::ConfigSerialize { source: e })
    }
}
