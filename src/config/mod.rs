use crate::core::RankingLimits;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub default_format: ExportFormat,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_top_overtime")]
    pub top_overtime: usize,
    #[serde(default = "default_top_delay")]
    pub top_delay: usize,
    #[serde(default = "default_top_on_time")]
    pub top_on_time: usize,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_sheet_name() -> String {
    "Total".to_string()
}
fn default_top_overtime() -> usize {
    10
}
fn default_top_delay() -> usize {
    10
}
fn default_top_on_time() -> usize {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: ExportFormat::default(),
            sheet_name: default_sheet_name(),
            top_overtime: default_top_overtime(),
            top_delay: default_top_delay(),
            top_on_time: default_top_on_time(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".attreport")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attreport.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init(path: &Path) -> AppResult<Self> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        let mut file = fs::File::create(path)?;
        file.write_all(config.to_yaml()?.as_bytes())?;
        Ok(config)
    }

    pub fn output_dir(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn ranking_limits(&self) -> RankingLimits {
        RankingLimits {
            overtime: self.top_overtime,
            delay: self.top_delay,
            on_time: self.top_on_time,
        }
    }
}
