#![forbid(unsafe_code)]

//! Aiolos public facade crate.
//!
//! Re-exports the geometry primitives from `aiolos-core` and the panel
//! controller from `aiolos-panel`, plus a prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use aiolos_core::{Easing, EdgeInsets, LayoutDirection, Point, Rect, Size};

// --- Panel re-exports ------------------------------------------------------

pub use aiolos_panel::{
    AnimationSettings, Configuration, ConfigurationChange, FixedSizes, LayoutContext,
    MaskedCorners, Mode, PanelController, PanelGeometry, PanelHost, PanelSettings,
    PanelSettingsError, Position, PresentationPhase, SizeProvider, TransitionAnimation,
    TransitionCoordinator, TransitionObserver, TransitionOutcome,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Configuration, EdgeInsets, MaskedCorners, Mode, PanelController, PanelHost, Position,
        Rect, Size, SizeProvider, TransitionCoordinator, TransitionObserver,
    };

    pub use crate::{core, panel};
}

pub use aiolos_core as core;
pub use aiolos_panel as panel;
