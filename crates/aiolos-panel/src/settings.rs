#![forbid(unsafe_code)]

//! Panel settings loaded from TOML or JSON.
//!
//! ```toml
//! # panel.toml
//! [initial]
//! position = "trailing-bottom"
//! mode = "compact"
//! masked_corners = "TOP_LEFT | TOP_RIGHT"
//!
//! [initial.margins]
//! top = 20.0
//! left = 20.0
//! bottom = 20.0
//! right = 20.0
//!
//! [animation]
//! duration_ms = 300
//! easing = "ease-out"
//! respect_reduced_motion = true
//! reduced_motion = false
//! ```
//!
//! ```rust,ignore
//! let settings = PanelSettings::from_toml_file("panel.toml")?;
//! let panel = PanelController::with_settings(&settings);
//! ```
//!
//! Every field has a default, so an empty document yields
//! `PanelSettings::default()`.

use std::path::Path;
use std::time::Duration;

use aiolos_core::easing::Easing;
use serde::{Deserialize, Serialize};

use crate::configuration::Configuration;
use crate::coordinator::{DEFAULT_TRANSITION_DURATION, TransitionAnimation};

/// Upper bound for `animation.duration_ms`.
pub const MAX_DURATION_MS: u64 = 10_000;

pub type Result<T> = std::result::Result<T, PanelSettingsError>;

/// Errors that can occur when loading panel settings.
#[derive(Debug, thiserror::Error)]
pub enum PanelSettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Everything a host can configure about a panel up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Configuration the panel starts with.
    pub initial: Configuration,
    pub animation: AnimationSettings,
}

/// Timing and motion preferences for host-driven transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub duration_ms: u64,
    pub easing: Easing,
    /// Honour `reduced_motion` when it is set.
    pub respect_reduced_motion: bool,
    /// The user asked for reduced motion; animated transitions become immediate.
    pub reduced_motion: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_DURATION.as_millis() as u64,
            easing: Easing::EaseInOut,
            respect_reduced_motion: true,
            reduced_motion: false,
        }
    }
}

impl AnimationSettings {
    pub fn transition_animation(&self) -> TransitionAnimation {
        TransitionAnimation::new(Duration::from_millis(self.duration_ms)).easing(self.easing)
    }

    /// True if animated transitions should be performed immediately.
    #[inline]
    pub fn motion_reduced(&self) -> bool {
        self.reduced_motion && self.respect_reduced_motion
    }
}

impl PanelSettings {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.checked()
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.checked()
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the settings
    /// are valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors: Vec<String> = self
            .initial
            .validate()
            .into_iter()
            .map(|warning| format!("initial.{warning}"))
            .collect();

        if self.animation.duration_ms > MAX_DURATION_MS {
            errors.push(format!(
                "animation.duration_ms must be <= {MAX_DURATION_MS}, got {}",
                self.animation.duration_ms
            ));
        }
        errors
    }

    /// Serialize to a pretty TOML document.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn checked(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(PanelSettingsError::Validation(errors))
        }
    }
}
