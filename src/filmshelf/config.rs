use crate::error::{FilmshelfError, Result};
use crate::report::DEFAULT_TITLE;
use crate::store::fs::DEFAULT_CATALOG_EXT;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "FILMSHELF_HOME";

/// Configuration for filmshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilmshelfConfig {
    /// Store new passwords as bcrypt hashes instead of plain text
    #[serde(default)]
    pub hash_passwords: bool,

    /// File extension for catalog files (e.g. ".txt", ".csv")
    #[serde(default = "default_catalog_ext")]
    pub catalog_ext: String,

    /// Heading printed at the top of generated reports
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_catalog_ext() -> String {
    DEFAULT_CATALOG_EXT.to_string()
}

fn default_report_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for FilmshelfConfig {
    fn default() -> Self {
        Self {
            hash_passwords: false,
            catalog_ext: default_catalog_ext(),
            report_title: default_report_title(),
        }
    }
}

impl FilmshelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FilmshelfError::Io)?;
        let config: FilmshelfConfig =
            serde_json::from_str(&content).map_err(FilmshelfError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FilmshelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FilmshelfError::Serialization)?;
        fs::write(config_path, content).map_err(FilmshelfError::Io)?;
        Ok(())
    }

    /// Set the catalog extension (normalizes to start with a dot)
    pub fn set_catalog_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.catalog_ext = ext.to_string();
        } else {
            self.catalog_ext = format!(".{}", ext);
        }
    }

    /// Read a setting by its command-line key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "hash-passwords" => Some(self.hash_passwords.to_string()),
            "catalog-ext" => Some(self.catalog_ext.clone()),
            "report-title" => Some(self.report_title.clone()),
            _ => None,
        }
    }

    /// Update a setting by its command-line key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "hash-passwords" => {
                self.hash_passwords = value
                    .parse()
                    .map_err(|_| FilmshelfError::Api(format!("Expected true or false, got '{}'", value)))?;
            }
            "catalog-ext" => self.set_catalog_ext(value),
            "report-title" => self.report_title = value.to_string(),
            other => return Err(FilmshelfError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub const KEYS: &'static [&'static str] = &["hash-passwords", "catalog-ext", "report-title"];
}

/// Default location of all data files: `~/CinemaManagerData/lex`.
///
/// `FILMSHELF_HOME` takes precedence when set.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = BaseDirs::new()
        .ok_or_else(|| FilmshelfError::Store("Could not determine home directory".to_string()))?;
    Ok(base.home_dir().join("CinemaManagerData").join("lex"))
}
