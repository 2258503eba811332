#![forbid(unsafe_code)]

//! Panel configuration value and structural diffing.
//!
//! A [`Configuration`] is a plain value: builders return a new value and
//! never touch anything else. The controller compares the value it holds
//! with the one it is handed via [`Configuration::diff`] and lets the
//! resulting [`ConfigurationChange`] decide which side effects fire.
//!
//! # Invariants
//!
//! - `a.diff(&b).is_empty()` iff `a == b`.
//! - [`Position::Bottom`] means the width is host-driven.
//! - [`Mode::FullHeight`] means the height is host-driven.
//!
//! # Failure Modes
//!
//! - Negative or non-finite margins are stored as given. [`Configuration::validate`]
//!   reports them and layout clamps them to zero.

use aiolos_core::geometry::EdgeInsets;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Discrete size state of the panel.
///
/// No ordering is implied; cycling between modes is a host policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Compact,
    Expanded,
    FullHeight,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 3] = [Mode::Compact, Mode::Expanded, Mode::FullHeight];

    /// True if the panel height is taken from the host instead of the size provider.
    #[inline]
    pub const fn fills_height(self) -> bool {
        matches!(self, Self::FullHeight)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Expanded => "expanded",
            Self::FullHeight => "full-height",
        }
    }
}

/// Which host edge(s) the panel is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Bottom edge, pinned to the leading side.
    LeadingBottom,
    /// Bottom edge, pinned to the trailing side.
    TrailingBottom,
    /// Bottom edge, spanning the full available width.
    #[default]
    Bottom,
}

impl Position {
    pub const ALL: [Position; 3] = [
        Position::LeadingBottom,
        Position::TrailingBottom,
        Position::Bottom,
    ];

    /// True if the panel width is taken from the host instead of the size provider.
    #[inline]
    pub const fn fills_width(self) -> bool {
        matches!(self, Self::Bottom)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeadingBottom => "leading-bottom",
            Self::TrailingBottom => "trailing-bottom",
            Self::Bottom => "bottom",
        }
    }
}

bitflags! {
    /// Corners of the panel that render rounded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MaskedCorners: u8 {
        const TOP_LEFT     = 0b0001;
        const TOP_RIGHT    = 0b0010;
        const BOTTOM_LEFT  = 0b0100;
        const BOTTOM_RIGHT = 0b1000;
        /// The two corners facing the content above a bottom-pinned panel.
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
    }
}

impl Default for MaskedCorners {
    fn default() -> Self {
        Self::ALL
    }
}

bitflags! {
    /// Fields that differ between two configurations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConfigurationChange: u8 {
        const POSITION       = 0b0001;
        const MODE           = 0b0010;
        const MARGINS        = 0b0100;
        const MASKED_CORNERS = 0b1000;
        const GEOMETRY = Self::POSITION.bits() | Self::MODE.bits() | Self::MARGINS.bits();
    }
}

impl ConfigurationChange {
    /// True if the change moves or resizes the panel.
    #[inline]
    pub fn is_geometric(self) -> bool {
        self.intersects(Self::GEOMETRY)
    }

    /// True if only the corner mask changed.
    #[inline]
    pub fn is_cosmetic_only(self) -> bool {
        self == Self::MASKED_CORNERS
    }
}

/// Desired presentation of a panel.
///
/// Equality follows [`Configuration::diff`]: a NaN margin equals a NaN margin.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub position: Position,
    pub mode: Mode,
    pub masked_corners: MaskedCorners,
    /// Insets from the host's safe area.
    pub margins: EdgeInsets,
}

impl Configuration {
    /// Baseline configuration: bottom, compact, no margins, all corners rounded.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_masked_corners(mut self, masked_corners: MaskedCorners) -> Self {
        self.masked_corners = masked_corners;
        self
    }

    /// Fields in which `other` differs from `self`.
    pub fn diff(&self, other: &Configuration) -> ConfigurationChange {
        let mut change = ConfigurationChange::empty();
        if self.position != other.position {
            change |= ConfigurationChange::POSITION;
        }
        if self.mode != other.mode {
            change |= ConfigurationChange::MODE;
        }
        if !same_margins(&self.margins, &other.margins) {
            change |= ConfigurationChange::MARGINS;
        }
        if self.masked_corners != other.masked_corners {
            change |= ConfigurationChange::MASKED_CORNERS;
        }
        change
    }

    /// Advisory checks. An empty list means the configuration lays out as written.
    ///
    /// Nothing here is rejected: layout clamps offending margins to zero.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let margins = [
            ("top", self.margins.top),
            ("left", self.margins.left),
            ("bottom", self.margins.bottom),
            ("right", self.margins.right),
        ];
        for (edge, value) in margins {
            if !value.is_finite() {
                warnings.push(format!("margins.{edge} must be finite, got {value}"));
            } else if value < 0.0 {
                warnings.push(format!("margins.{edge} must be >= 0, got {value}"));
            }
        }
        warnings
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.diff(other).is_empty()
    }
}

/// Edge-wise equality where NaN matches NaN, so a stored NaN margin is not a change.
fn same_margins(a: &EdgeInsets, b: &EdgeInsets) -> bool {
    let same = |x: f64, y: f64| x == y || (x.is_nan() && y.is_nan());
    same(a.top, b.top) && same(a.left, b.left) && same(a.bottom, b.bottom) && same(a.right, b.right)
}
