//! Configuration loading for DayPredictor.
//!
//! The config file lives at `~/.daypredict/config.toml` (or wherever
//! `DAYPREDICT_CONFIG` points). Every section and key is optional; raw values
//! are validated here and resolved into [`PredictorSettings`] and
//! [`UiOptions`], falling back to the built-in defaults with a warning.

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use daypredict_types::{PredictorSettings, SliderMetrics, ui::UiOptions};

const CONFIG_PATH_ENV: &str = "DAYPREDICT_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct DayPredictConfig {
    pub app: Option<AppConfig>,
    pub predictor: Option<PredictorConfig>,
    pub slider: Option<SliderConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
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
    /// Disable slider, spinner, and reveal animations.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictorConfig {
    /// Milliseconds each loading message stays on screen.
    pub step_interval_ms: Option<u64>,
    /// Percentage the slider must pass to commit.
    pub commit_threshold: Option<f32>,
    pub loading_messages: Option<Vec<String>>,
}

/// Slider handle geometry in terminal cells.
#[derive(Debug, Default, Deserialize)]
pub struct SliderConfig {
    pub handle_width: Option<f32>,
    pub handle_padding: Option<f32>,
}

impl DayPredictConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
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

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve predictor settings, replacing invalid values with defaults.
    #[must_use]
    pub fn settings(&self) -> PredictorSettings {
        let defaults = PredictorSettings::default();
        let mut settings = defaults.clone();

        if let Some(predictor) = &self.predictor {
            if let Some(ms) = predictor.step_interval_ms {
                if ms == 0 {
                    tracing::warn!("predictor.step_interval_ms must be positive; using default");
                }
                settings = settings.with_step_interval(Duration::from_millis(ms));
            }
            if let Some(threshold) = predictor.commit_threshold {
                if !(threshold > 0.0 && threshold < 100.0) {
                    tracing::warn!(
                        threshold,
                        "predictor.commit_threshold must be within (0, 100); using default"
                    );
                }
                settings = settings.with_commit_threshold(threshold);
            }
            if let Some(messages) = &predictor.loading_messages {
                let messages: Vec<String> = messages
                    .iter()
                    .map(|m| m.trim())
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .collect();
                if messages.is_empty() {
                    tracing::warn!("predictor.loading_messages is empty; using default script");
                }
                settings = settings.with_loading_messages(messages);
            }
        }

        if let Some(slider) = &self.slider {
            let current = defaults.slider();
            let metrics = SliderMetrics {
                handle_width: slider.handle_width.unwrap_or(current.handle_width),
                handle_padding: slider.handle_padding.unwrap_or(current.handle_padding),
            };
            if !metrics.is_valid() {
                tracing::warn!(
                    handle_width = metrics.handle_width,
                    handle_padding = metrics.handle_padding,
                    "invalid slider geometry; using default"
                );
            }
            settings = settings.with_slider(metrics);
        }

        settings
    }

    /// UI options from the `[app]` section, overridden by environment flags.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options_with_env(|key| env::var(key).ok())
    }

    fn ui_options_with_env<F>(&self, lookup: F) -> UiOptions
    where
        F: Fn(&str) -> Option<String>,
    {
        let app = self.app.as_ref();
        let flag = |key: &str, configured: bool| {
            lookup(key)
                .and_then(|value| parse_flag(&value))
                .unwrap_or(configured)
        };
        UiOptions {
            ascii_only: flag("DAYPREDICT_ASCII", app.is_some_and(|a| a.ascii_only)),
            high_contrast: flag(
                "DAYPREDICT_HIGH_CONTRAST",
                app.is_some_and(|a| a.high_contrast),
            ),
            reduced_motion: flag(
                "DAYPREDICT_REDUCED_MOTION",
                app.is_some_and(|a| a.reduced_motion),
            ),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".daypredict").join("config.toml"))
}
