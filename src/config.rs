use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icstrim_core::WindowConfig;
use serde::{Deserialize, Serialize};

static DEFAULT_SOURCE_URL: &str = "https://img.opencritic.com/calendar/OpenCritic.ics";
static DEFAULT_OUTPUT: &str = "opencritic-calendar-filtered.ics";

/// Google Calendar refuses imports above 1 MB.
const DEFAULT_SIZE_LIMIT_BYTES: u64 = 1024 * 1024;

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_size_limit() -> u64 {
    DEFAULT_SIZE_LIMIT_BYTES
}

/// Configuration at ~/.config/icstrim/config.toml
///
/// Every key is optional. Command line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Feed to download when no local input is given
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Where the trimmed calendar is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(flatten)]
    pub window: WindowConfig,

    /// Output size above which a warning is printed
    #[serde(default = "default_size_limit")]
    pub size_limit_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_url: default_source_url(),
            output: default_output(),
            window: WindowConfig::default(),
            size_limit_bytes: default_size_limit(),
        }
    }
}

/// Get the config directory path (~/.config/icstrim)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("icstrim");
    Ok(config_dir)
}

/// Get the config file path (~/.config/icstrim/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from `path`, falling back to defaults if the file is missing.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config at {}", path.display()))
}

/// Create a default config file with all options commented out.
pub fn create_default_config(path: &Path) -> Result<()> {
    let defaults =
        toml::to_string_pretty(&Config::default()).context("Could not serialize default config")?;

    let mut contents = String::from("# icstrim configuration\n# Uncomment a key to override it.\n\n");
    for line in defaults.lines().filter(|l| !l.trim().is_empty()) {
        contents.push_str("# ");
        contents.push_str(line);
        contents.push('\n');
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Could not create config directory")?;
    }

    std::fs::write(path, contents)
        .with_context(|| format!("Could not write config file {}", path.display()))?;

    Ok(())
}
