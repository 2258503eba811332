#![forbid(unsafe_code)]

//! Easing curves for panel transitions.
//!
//! # Invariants
//!
//! - `apply(0.0) == 0.0` and `apply(1.0) == 1.0` for every curve.
//! - Input is clamped to [0.0, 1.0] before evaluation.
//! - Only [`Easing::Back`] can produce values outside [0.0, 1.0].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Easing function applied to normalized animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-in (accelerating).
    EaseIn,
    /// Cubic ease-out (decelerating).
    EaseOut,
    /// Cubic S-curve.
    #[default]
    EaseInOut,
    /// Slight overshoot then settle.
    Back,
}

/// Overshoot amount for [`Easing::Back`]; about 10% past the target.
const BACK_OVERSHOOT: f64 = 1.70158;

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_in(t),
            Self::EaseOut => reversed(cubic_in, t),
            Self::EaseInOut => {
                if t < 0.5 {
                    cubic_in(2.0 * t) / 2.0
                } else {
                    0.5 + reversed(cubic_in, 2.0 * t - 1.0) / 2.0
                }
            }
            Self::Back => reversed(back_in, t),
        }
    }

    /// Check if this easing can produce values outside 0.0-1.0.
    pub fn can_overshoot(self) -> bool {
        matches!(self, Self::Back)
    }
}

#[inline]
fn cubic_in(t: f64) -> f64 {
    t * t * t
}

/// Pulls back below zero before accelerating to 1.
#[inline]
fn back_in(t: f64) -> f64 {
    t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT)
}

/// Time-reversed mirror of an ease-in curve.
#[inline]
fn reversed(curve: fn(f64) -> f64, t: f64) -> f64 {
    1.0 - curve(1.0 - t)
}
