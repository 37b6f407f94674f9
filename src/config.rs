//! Configuration from `admission.toml` plus environment overrides.
//!
//! ```toml
//! data_path = "score.csv"
//! display_limit = 100
//! analysis_top_n = 5
//! knowledge_path = "knowledge.txt"
//!
//! [advisor]
//! base_url = "https://api.siliconflow.cn/v1"
//! model = "deepseek-ai/DeepSeek-R1-0528-Qwen3-8B"
//! api_key_env = "MY_API_KEY"
//! timeout_secs = 120
//! stream = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advisor::AdvisorConfig;
use crate::advisor::prompt::DEFAULT_ANALYSIS_TOP_N;
use crate::selection::DEFAULT_DISPLAY_LIMIT;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "admission.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub display_limit: usize,
    pub analysis_top_n: usize,
    pub knowledge_path: PathBuf,
    pub advisor: AdvisorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("score.csv"),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            analysis_top_n: DEFAULT_ANALYSIS_TOP_N,
            knowledge_path: PathBuf::from("knowledge.txt"),
            advisor: AdvisorConfig::default(),
        }
    }
}

impl AppConfig {
    /// An explicit path must exist. Without one, `admission.toml` is used if
    /// present, else defaults. The API key env var is applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(&self.advisor.api_key_env) {
            if !key.trim().is_empty() {
                self.advisor.api_key = Some(key.trim().to_string());
            }
        }
    }
}
