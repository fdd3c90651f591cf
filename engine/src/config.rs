use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use flames_types::ui::UiOptions;

/// Delay between "Calculate" and the result card.
pub const DEFAULT_CALCULATION_DELAY: Duration = Duration::from_millis(2000);

/// Upper bound for a configured delay; longer values are clamped.
const MAX_CALCULATION_DELAY: Duration = Duration::from_secs(30);

/// `~/.flames/config.toml`
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
///
/// [calculation]
/// delay_ms = 2000
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct FlamesConfig {
    pub app: Option<AppConfig>,
    pub calculation: Option<CalculationConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable screen effects and spinner motion.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalculationConfig {
    /// Cosmetic "reading the stars" delay in milliseconds.
    pub delay_ms: Option<u64>,
}

impl FlamesConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options from the `[app]` table, with `FLAMES_*` env overrides applied.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options_with(|name| env::var(name).ok())
    }

    /// Like [`Self::ui_options`], reading overrides through `lookup`.
    #[must_use]
    pub fn ui_options_with(&self, lookup: impl Fn(&str) -> Option<String>) -> UiOptions {
        let app = self.app.as_ref();
        let flag = |name: &str, fallback: bool| {
            lookup(name)
                .and_then(|value| {
                    let parsed = parse_flag(&value);
                    if parsed.is_none() {
                        tracing::warn!("Ignoring {name}={value}: expected a boolean");
                    }
                    parsed
                })
                .unwrap_or(fallback)
        };
        UiOptions {
            ascii_only: flag("FLAMES_ASCII", app.is_some_and(|a| a.ascii_only)),
            high_contrast: flag("FLAMES_HIGH_CONTRAST", app.is_some_and(|a| a.high_contrast)),
            reduced_motion: flag("FLAMES_REDUCED_MOTION", app.is_some_and(|a| a.reduced_motion)),
        }
    }

    #[must_use]
    pub fn calculation_delay(&self) -> Duration {
        self.calculation
            .as_ref()
            .and_then(|c| c.delay_ms)
            .map_or(DEFAULT_CALCULATION_DELAY, calculation_delay_from_ms)
    }
}

/// A delay in milliseconds, clamped to 30 seconds.
#[must_use]
pub fn calculation_delay_from_ms(ms: u64) -> Duration {
    Duration::from_millis(ms).min(MAX_CALCULATION_DELAY)
}

/// Boolean env value: `1/true/yes/on` or `0/false/no/off`, any case.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".flames").join("config.toml"))
}
