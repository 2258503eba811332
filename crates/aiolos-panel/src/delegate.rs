#![forbid(unsafe_code)]

//! Collaborator contracts supplied by the host.
//!
//! The controller holds both collaborators as [`std::rc::Weak`] references:
//! the host owns them. A collaborator that has been dropped is treated as
//! if it had never been set.

use aiolos_core::geometry::Size;

use crate::configuration::{Configuration, Mode};
use crate::coordinator::TransitionCoordinator;

/// Answers how large the panel wants to be in a given mode.
///
/// Called synchronously, exactly once per transition and once per attach or
/// relayout. Implementations must not block and must not call back into the
/// controller.
///
/// The width is ignored for [`crate::Position::Bottom`] and the height is
/// ignored for [`Mode::FullHeight`]; both are taken from the host instead.
pub trait SizeProvider {
    /// Requested size for `mode`.
    ///
    /// `configuration` is the configuration being applied (its `mode` equals
    /// `mode`), so providers can size by position as well.
    fn size_for(&self, mode: Mode, configuration: &Configuration) -> Size;
}

/// Notified before the panel's geometry changes.
///
/// Called exactly once per transition, after the size provider and before
/// the new geometry is applied. Work registered through
/// [`TransitionCoordinator::run_alongside`] is committed together with the
/// panel's own change.
///
/// Setting the controller's configuration from inside this callback is not
/// supported.
pub trait TransitionObserver {
    fn will_transition(&self, target_size: Size, coordinator: &mut TransitionCoordinator);
}

impl<F> SizeProvider for F
where
    F: Fn(Mode, &Configuration) -> Size,
{
    fn size_for(&self, mode: Mode, configuration: &Configuration) -> Size {
        self(mode, configuration)
    }
}

/// Size provider answering from a fixed per-mode table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSizes {
    pub compact: Size,
    pub expanded: Size,
    pub full_height: Size,
}

impl FixedSizes {
    pub const fn new(compact: Size, expanded: Size, full_height: Size) -> Self {
        Self {
            compact,
            expanded,
            full_height,
        }
    }
}

impl SizeProvider for FixedSizes {
    fn size_for(&self, mode: Mode, _configuration: &Configuration) -> Size {
        match mode {
            Mode::Compact => self.compact,
            Mode::Expanded => self.expanded,
            Mode::FullHeight => self.full_height,
        }
    }
}
