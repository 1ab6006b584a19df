use crate::errors::{AppError, AppResult};
use crate::store::DEFAULT_PREFIX;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory the daily record files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// File names are `<file_prefix>_<YYYY-MM-DD>.csv`.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}
fn default_file_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("abq_data_entry")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".abq_data_entry")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("abq_data_entry.conf")
    }

    /// Output directory with `~/` expanded.
    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize the configuration file and the output directory.
    /// In test mode the configuration file is left untouched.
    pub fn init_all(output_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = if is_test {
            Config::default()
        } else {
            Self::load()?
        };
        if let Some(dir) = output_dir {
            config.output_dir = dir;
        }

        if !is_test {
            config.save()?;
        }

        fs::create_dir_all(config.output_path())?;
        Ok(config)
    }
}
