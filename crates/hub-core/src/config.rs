//! Configuration loading
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file: `$HUB_CONFIG`, or ~/.config/hub/config.toml
//! 3. Environment variables: `HUB_*`
//!
//! # Example Config
//!
//! ```toml
//! base_program = "/usr/local/bin/git"
//! man_program = "man"
//! default_pager = ["less", "-R"]
//! install_prefix = "/opt/hub"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Host, Result};

pub const CONFIG_PATH_VAR: &str = "HUB_CONFIG";
pub const BASE_PROGRAM_VAR: &str = "HUB_BASE_PROGRAM";
pub const MAN_PROGRAM_VAR: &str = "HUB_MAN_PROGRAM";
pub const INSTALL_PREFIX_VAR: &str = "HUB_INSTALL_PREFIX";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Program that requests are forwarded to.
    pub base_program: String,
    /// Manual page viewer looked up on `PATH`.
    pub man_program: String,
    /// Pager used when neither a viewer nor `$PAGER` is available.
    pub default_pager: Vec<String>,
    /// Overrides the prefix derived from the executable location.
    pub install_prefix: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_program: "git".to_string(),
            man_program: "man".to_string(),
            default_pager: vec!["less".to_string(), "-R".to_string()],
            install_prefix: None,
        }
    }
}

impl Settings {
    /// Load settings from all sources.
    ///
    /// A missing config file is not an error.
    pub fn load(host: &impl Host) -> Result<Self> {
        let settings = match config_path(host) {
            Some(path) if path.exists() => load_toml_file(&path)?,
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file");
                Self::default()
            }
            None => Self::default(),
        };

        settings.apply_env_vars(host).validate()
    }

    fn apply_env_vars(self, host: &impl Host) -> Self {
        let non_empty = |key: &str| host.var(key).filter(|value| !value.trim().is_empty());

        Self {
            base_program: non_empty(BASE_PROGRAM_VAR).unwrap_or(self.base_program),
            man_program: non_empty(MAN_PROGRAM_VAR).unwrap_or(self.man_program),
            install_prefix: non_empty(INSTALL_PREFIX_VAR)
                .map(PathBuf::from)
                .or(self.install_prefix),
            ..self
        }
    }

    fn validate(self) -> Result<Self> {
        if self.base_program.trim().is_empty() {
            return Err(Error::invalid_config("base_program must not be empty"));
        }
        if self.man_program.trim().is_empty() {
            return Err(Error::invalid_config("man_program must not be empty"));
        }
        if self.default_pager.first().map_or(true, |p| p.trim().is_empty()) {
            return Err(Error::invalid_config(
                "default_pager must name a program, e.g. [\"less\", \"-R\"]",
            ));
        }
        Ok(self)
    }
}

/// Path of the config file, if one can be determined.
pub fn config_path(host: &impl Host) -> Option<PathBuf> {
    host.var(CONFIG_PATH_VAR)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            directories::ProjectDirs::from("", "", "hub")
                .map(|dirs| dirs.config_dir().join("config.toml"))
        })
}

fn load_toml_file(path: &Path) -> Result<Settings> {
    if path.is_dir() {
        return Err(Error::invalid_config(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::invalid_config(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::invalid_config(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}
