#![forbid(unsafe_code)]

//! Floating panel controller.
//!
//! # Role in Aiolos
//! `aiolos-panel` manages a movable overlay panel: discrete size [`Mode`]s,
//! bottom-pinned [`Position`]s, per-mode sizing supplied by the host, and
//! observable transitions whenever the configuration changes.
//!
//! # Primary responsibilities
//! - **Configuration**: immutable value with structural diffing.
//! - **PanelController**: attach/detach, diff-driven transitions.
//! - **TransitionCoordinator**: one transaction, animated or immediate,
//!   that observers can attach work to.
//! - **Collaborator contracts**: [`SizeProvider`], [`TransitionObserver`],
//!   [`PanelHost`], all held by weak reference.
//!
//! # Quick start
//!
//! ```ignore
//! let host = Rc::new(MyHost::new());
//! let sizes = Rc::new(FixedSizes::new(
//!     Size::new(270.0, 64.0),
//!     Size::new(270.0, 270.0),
//!     Size::ZERO,
//! ));
//!
//! let mut panel = PanelController::new(Configuration::default());
//! panel.set_size_provider(&sizes);
//! panel.attach(&host);
//!
//! panel.update_configuration(|c| c.with_mode(Mode::Expanded));
//! ```

pub mod animator;
pub mod configuration;
pub mod controller;
pub mod coordinator;
pub mod delegate;
pub mod host;
pub mod layout;
pub mod settings;

pub use animator::PresentationPhase;
pub use configuration::{Configuration, ConfigurationChange, MaskedCorners, Mode, Position};
pub use controller::PanelController;
pub use coordinator::{TransitionAnimation, TransitionCoordinator, TransitionOutcome};
pub use delegate::{FixedSizes, SizeProvider, TransitionObserver};
pub use host::PanelHost;
pub use layout::{LayoutContext, PanelGeometry};
pub use settings::{AnimationSettings, PanelSettings, PanelSettingsError};
