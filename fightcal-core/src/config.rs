//! fightcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FOOTER_TIMEZONE, DEFAULT_PROVIDER};
use crate::context::BuildContext;
use crate::error::{FightCalError, FightCalResult};
use crate::source::{EventSource, Provider};

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_footer_timezone() -> String {
    DEFAULT_FOOTER_TIMEZONE.to_string()
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

/// Configuration at ~/.config/fightcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FightCalConfig {
    /// Directory receiving UFC.ics and UFC-PPV.ics
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// IANA zone for event start times. Falls back to the system zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default = "default_footer_timezone")]
    pub footer_timezone: String,

    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_provider")]
    pub provider: String,

    /// JSON events file. Takes precedence over `provider` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            provider: default_provider(),
            file: None,
        }
    }
}

impl Default for FightCalConfig {
    fn default() -> Self {
        FightCalConfig {
            output_dir: default_output_dir(),
            timezone: None,
            footer_timezone: default_footer_timezone(),
            source: SourceConfig::default(),
        }
    }
}

impl FightCalConfig {
    pub fn config_path() -> FightCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FightCalError::Config("Could not determine config directory".into()))?
            .join("fightcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the default config file, creating it on first use.
    pub fn load() -> FightCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> FightCalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| FightCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FightCalError::Config(e.to_string()))
    }

    /// Create a config file documenting every option with its default,
    /// commented out.
    pub fn create_default_config(path: &Path) -> FightCalResult<()> {
        let defaults = toml::to_string_pretty(&FightCalConfig::default())
            .map_err(|e| FightCalError::Config(e.to_string()))?;

        let commented: String = defaults
            .lines()
            .map(|line| {
                if line.is_empty() || line.starts_with('[') {
                    format!("{line}\n")
                } else {
                    format!("# {line}\n")
                }
            })
            .collect();

        let contents = format!(
            "# fightcal configuration\n\
             #\n\
             # timezone = \"America/Los_Angeles\"   (defaults to the system timezone)\n\
             # [source] file = \"events.json\"      (read events from a file instead of a provider)\n\n\
             {commented}"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FightCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FightCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        expand_path(&self.output_dir)
    }

    pub fn event_source(&self) -> EventSource {
        match &self.source.file {
            Some(file) => EventSource::File(expand_path(file)),
            None => EventSource::Provider(Provider::from_name(&self.source.provider)),
        }
    }

    pub fn build_context(&self) -> FightCalResult<BuildContext> {
        BuildContext::now(self.timezone.as_deref(), Some(&self.footer_timezone))
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
