// SPDX-License-Identifier: MPL-2.0
//! Snackbar configuration: every presentation knob the embedding
//! application can set before calling `present()`.
//!
//! The configuration is a flat serde struct so applications can persist it
//! to a `snackbar.toml` alongside their own settings.
//!
//! # Examples
//!
//! ```
//! use iced_snackbar::snackbar::{AnimationDirection, SnackbarConfig};
//!
//! let config = SnackbarConfig {
//!     message: "Image saved".to_string(),
//!     direction: AnimationDirection::Bottom,
//!     duration_secs: 3.0,
//!     ..SnackbarConfig::default()
//! };
//! assert!(config.auto_dismiss);
//! ```

use crate::error::Result;
use crate::snackbar::animation::{AnimationDirection, AnimationType, EasingCurve};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "snackbar.toml";

/// How long the snackbar stays on screen before auto-dismissing.
pub const DEFAULT_DURATION_SECS: f32 = 2.0;
/// Length of the present/dismiss animation.
pub const DEFAULT_ANIMATION_DURATION_SECS: f32 = 0.6;
/// Spring damping ratio (1.0 = critically damped).
pub const DEFAULT_SPRING_DAMPING: f32 = 0.8;
/// Initial spring velocity, in units of full travel per second.
pub const DEFAULT_SPRING_VELOCITY: f32 = 1.0;
/// Minimum height of the snackbar view.
pub const DEFAULT_MIN_HEIGHT: f32 = 46.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnackbarConfig {
    /// Message shown in the snackbar body.
    pub message: String,
    /// Label of the action button.
    pub action_label: String,
    /// Margins between the snackbar and the host's safe content area.
    pub left_margin: f32,
    pub right_margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    /// Whether the snackbar dismisses itself after `duration_secs`.
    pub auto_dismiss: bool,
    /// Seconds the snackbar stays shown when `auto_dismiss` is set.
    pub duration_secs: f32,
    pub animation: AnimationType,
    pub direction: AnimationDirection,
    pub animation_duration_secs: f32,
    pub animation_delay_secs: f32,
    pub spring_damping: f32,
    pub spring_velocity: f32,
    /// Timing curve for the present transition.
    pub present_easing: EasingCurve,
    /// Timing curve for the dismiss transition.
    pub dismiss_easing: EasingCurve,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            message: "Message".to_string(),
            action_label: "OK".to_string(),
            left_margin: 0.0,
            right_margin: 0.0,
            top_margin: 0.0,
            bottom_margin: 0.0,
            auto_dismiss: true,
            duration_secs: DEFAULT_DURATION_SECS,
            animation: AnimationType::Spring,
            direction: AnimationDirection::Top,
            animation_duration_secs: DEFAULT_ANIMATION_DURATION_SECS,
            animation_delay_secs: 0.0,
            spring_damping: DEFAULT_SPRING_DAMPING,
            spring_velocity: DEFAULT_SPRING_VELOCITY,
            present_easing: EasingCurve::Linear,
            dismiss_easing: EasingCurve::EaseIn,
        }
    }
}

impl SnackbarConfig {
    /// Clamps out-of-range values so persisted configs cannot request
    /// nonsensical timings (negative durations, zero damping).
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.duration_secs = self.duration_secs.max(0.0);
        self.animation_duration_secs = self.animation_duration_secs.max(0.0);
        self.animation_delay_secs = self.animation_delay_secs.max(0.0);
        self.spring_damping = self.spring_damping.clamp(0.05, 1.0);
        self.left_margin = self.left_margin.max(0.0);
        self.right_margin = self.right_margin.max(0.0);
        self.top_margin = self.top_margin.max(0.0);
        self.bottom_margin = self.bottom_margin.max(0.0);
        self
    }

    /// On-screen duration before auto-dismiss.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.duration_secs.max(0.0))
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_secs_f32(self.animation_duration_secs.max(0.0))
    }

    #[must_use]
    pub fn animation_delay(&self) -> Duration {
        Duration::from_secs_f32(self.animation_delay_secs.max(0.0))
    }

    /// Total time from a transition starting until it completes.
    #[must_use]
    pub fn transition_time(&self) -> Duration {
        self.animation_delay() + self.animation_duration()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config.validated())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Default config path under the platform config directory.
fn get_default_config_path(app_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(app_name);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the snackbar config for `app_name`, falling back to defaults when
/// no file exists.
pub fn load(app_name: &str) -> Result<SnackbarConfig> {
    if let Some(path) = get_default_config_path(app_name) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(SnackbarConfig::default())
}

pub fn load_from_path(path: &Path) -> Result<SnackbarConfig> {
    let content = fs::read_to_string(path)?;
    SnackbarConfig::from_toml_str(&content)
}

pub fn save_to_path(config: &SnackbarConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, config.to_toml_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_constants() {
        let config = SnackbarConfig::default();
        assert_eq!(config.duration_secs, DEFAULT_DURATION_SECS);
        assert_eq!(config.animation_duration_secs, DEFAULT_ANIMATION_DURATION_SECS);
        assert_eq!(config.spring_damping, DEFAULT_SPRING_DAMPING);
        assert_eq!(config.animation, AnimationType::Spring);
        assert_eq!(config.direction, AnimationDirection::Top);
        assert_eq!(config.dismiss_easing, EasingCurve::EaseIn);
        assert!(config.auto_dismiss);
    }

    #[test]
    fn validated_clamps_negative_timings() {
        let config = SnackbarConfig {
            duration_secs: -1.0,
            animation_duration_secs: -0.5,
            animation_delay_secs: -2.0,
            spring_damping: 0.0,
            left_margin: -4.0,
            ..SnackbarConfig::default()
        }
        .validated();

        assert_eq!(config.duration_secs, 0.0);
        assert_eq!(config.animation_duration_secs, 0.0);
        assert_eq!(config.animation_delay_secs, 0.0);
        assert_eq!(config.left_margin, 0.0);
        assert!(config.spring_damping >= 0.05);
    }

    #[test]
    fn transition_time_includes_delay() {
        let config = SnackbarConfig {
            animation_duration_secs: 0.6,
            animation_delay_secs: 0.2,
            ..SnackbarConfig::default()
        };
        assert_eq!(config.transition_time(), Duration::from_secs_f32(0.8));
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let config = SnackbarConfig {
            message: "saved".to_string(),
            direction: AnimationDirection::Bottom,
            animation: AnimationType::Fade,
            duration_secs: 3.5,
            ..SnackbarConfig::default()
        };

        let serialized = config.to_toml_string().expect("failed to serialize");
        let loaded = SnackbarConfig::from_toml_str(&serialized).expect("failed to parse");
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_and_load_round_trip_through_file() {
        let config = SnackbarConfig {
            message: "uploaded".to_string(),
            bottom_margin: 12.0,
            ..SnackbarConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("snackbar.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn from_toml_str_applies_validation() {
        let loaded =
            SnackbarConfig::from_toml_str("duration_secs = -5.0").expect("failed to parse");
        assert_eq!(loaded.duration_secs, 0.0);
    }

    #[test]
    fn from_toml_str_rejects_invalid_toml() {
        assert!(SnackbarConfig::from_toml_str("message = ").is_err());
    }

    #[test]
    fn load_falls_back_to_defaults_without_file() {
        let loaded = load("iced_snackbar-test-nonexistent").expect("load failed");
        assert_eq!(loaded, SnackbarConfig::default());
    }
}
