use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::filter::FilterSettings;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "IMAGE_VIEWER_CONFIG";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// User settings read at startup.
///
/// ```json
/// { "filters": { "step": 10, "cutoff": 128 }, "start_dir": "/home/me/Pictures" }
/// ```
/// Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub filters: FilterSettings,
    /// Directory the open / save dialogs start in. Defaults to the current one.
    pub start_dir: Option<PathBuf>,
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing viewer config")
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve the config from [`CONFIG_ENV`]; errors are logged and replaced
    /// by the defaults so a bad file never keeps the viewer from starting.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Ignoring viewer config: {e:#}");
                Self::default()
            }
        }
    }

    /// Starting directory for file dialogs.
    pub fn dialog_dir(&self) -> Option<PathBuf> {
        self.start_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
    }
}
