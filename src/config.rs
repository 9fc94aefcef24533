//! Global planner configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PlannerError, PlannerResult};

static DEFAULT_DATA_DIR: &str = "~/.planner";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Global configuration at ~/.config/planner/config.toml
///
/// The only setting is where event data lives; the slot file inside that
/// directory has a fixed name (see `store`).
#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl PlannerConfig {
    pub fn config_path() -> PlannerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine config directory".into()))?
            .join("planner");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from ~/.config/planner/config.toml, creating a commented-out
    /// default config file on first run.
    pub fn load() -> PlannerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: PlannerConfig =
            toml::from_str(&content).map_err(|e| PlannerError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The data directory with `~` expanded to the home directory.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PlannerResult<()> {
        let contents = format!(
            "\
# planner configuration

# Where your event data lives:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlannerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
