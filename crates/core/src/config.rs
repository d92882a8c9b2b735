//! Settings and path utilities for chta.
//!
//! Settings come from an optional YAML file. Every key is optional, so a
//! missing file and an empty file both give the defaults.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.chta/config.yml";
/// Default directory for user-authored cheat sheets
pub const DEFAULT_SHEETS_DIRECTORY: &str = "~/.chta/sheets";

/// Commands shown per page when paging through a cheat sheet
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Rows drawn at once by the interactive search
pub const DEFAULT_SEARCH_ROWS: usize = 10;
/// Render width used when the terminal size cannot be detected
pub const DEFAULT_WIDTH: usize = 80;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub sheets_directory: String,
    pub page_size: usize,
    pub search_rows: usize,
    pub width: Option<usize>,
    pub dark_mode: bool,
    pub shell: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sheets_directory: DEFAULT_SHEETS_DIRECTORY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_rows: DEFAULT_SEARCH_ROWS,
            width: None,
            dark_mode: true,
            shell: None,
        }
    }
}

impl Settings {
    /// The user sheet directory with `~` expanded.
    #[must_use]
    pub fn sheets_directory(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.sheets_directory).as_ref())
    }

    fn validate(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(Error::InvalidSetting(
                "`page_size` must be greater than zero".to_string(),
            ));
        }

        if self.search_rows == 0 {
            return Err(Error::InvalidSetting(
                "`search_rows` must be greater than zero".to_string(),
            ));
        }

        if self.width == Some(0) {
            return Err(Error::InvalidSetting(
                "`width` must be greater than zero".to_string(),
            ));
        }

        Ok(self)
    }
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use chta_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Loads settings from `config_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML or unknown keys
/// - A numeric setting is zero
pub fn load_settings(config_path: &str) -> Result<Settings> {
    if !Path::new(config_path).exists() {
        debug!("No settings file at `{config_path}`, using defaults");
        return Ok(Settings::default());
    }

    let reader = File::open(config_path)
        .map_err(|e| Error::io_error("settings file".to_string(), config_path.to_string(), e))?;

    // An empty document deserializes as null rather than an empty mapping
    let settings: Option<Settings> = serde_yaml::from_reader(reader)
        .map_err(|e| Error::yaml_error(config_path.to_string(), e))?;

    info!("Loaded settings from `{config_path}`");

    settings.unwrap_or_default().validate()
}
