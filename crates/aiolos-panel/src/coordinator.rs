#![forbid(unsafe_code)]

//! Transition coordinator: one transaction, animated or immediate.
//!
//! The controller creates a [`TransitionCoordinator`] for every transition
//! and hands it to the [`crate::TransitionObserver`] before the panel's
//! geometry changes. The observer can then attach its own work:
//!
//! ```ignore
//! fn will_transition(&self, size: Size, coordinator: &mut TransitionCoordinator) {
//!     let marker = self.marker.clone();
//!     let frame = coordinator.target_frame();
//!     coordinator.run_alongside(move || marker.borrow_mut().y = frame.min_y() - 5.0);
//! }
//! ```
//!
//! # Semantics
//!
//! - Immediate (`is_animated() == false`): `run_alongside` executes the work
//!   on the spot.
//! - Animated: work is queued and executed when the transaction commits,
//!   right after the panel's own model geometry is replaced and before
//!   control returns to the caller. Nothing can observe a state where only
//!   part of the transaction was applied.
//!
//! # Invariants
//!
//! 1. Every work item runs exactly once.
//! 2. Every completion handler runs exactly once, with either
//!    [`TransitionOutcome::Finished`] or [`TransitionOutcome::Superseded`].
//! 3. Alongside work runs in registration order.

use std::time::Duration;

use aiolos_core::easing::Easing;
use aiolos_core::geometry::{Rect, Size};

use crate::layout::PanelGeometry;

/// Default duration of a host-driven panel animation.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(250);

/// Timing of an animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionAnimation {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for TransitionAnimation {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TRANSITION_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

impl TransitionAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Zero-duration animations are performed as immediate transitions.
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

/// How a transition's presentation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionOutcome {
    /// The panel reached the target geometry.
    Finished,
    /// A newer transition (or a detach) interrupted this one before it finished.
    Superseded,
}

pub(crate) type AlongsideWork = Box<dyn FnOnce()>;
pub(crate) type CompletionWork = Box<dyn FnOnce(TransitionOutcome)>;

/// Transaction wrapper handed to transition observers.
pub struct TransitionCoordinator {
    animation: Option<TransitionAnimation>,
    target: PanelGeometry,
    alongside: Vec<AlongsideWork>,
    completions: Vec<CompletionWork>,
}

impl std::fmt::Debug for TransitionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionCoordinator")
            .field("animation", &self.animation)
            .field("target", &self.target)
            .field("alongside", &self.alongside.len())
            .field("completions", &self.completions.len())
            .finish()
    }
}

impl TransitionCoordinator {
    /// Coordinator for a programmatic change applied in one step.
    pub(crate) fn immediate(target: PanelGeometry) -> Self {
        Self {
            animation: None,
            target,
            alongside: Vec::new(),
            completions: Vec::new(),
        }
    }

    /// Coordinator for a change animated with `animation`.
    pub(crate) fn animated(target: PanelGeometry, animation: TransitionAnimation) -> Self {
        Self {
            animation: Some(animation),
            ..Self::immediate(target)
        }
    }

    /// True if the panel's change plays out over time.
    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }

    /// Timing of the transition, if animated.
    ///
    /// Work that interpolates its own values should use the same duration and
    /// curve so it stays in step with the panel.
    #[inline]
    pub fn animation(&self) -> Option<TransitionAnimation> {
        self.animation
    }

    /// Frame the panel will have once the transition is applied.
    #[inline]
    pub fn target_frame(&self) -> Rect {
        self.target.frame
    }

    #[inline]
    pub fn target_size(&self) -> Size {
        self.target.frame.size()
    }

    /// Run `work` together with the panel's geometry change.
    ///
    /// Immediate transitions run it now; animated ones queue it for commit.
    pub fn run_alongside(&mut self, work: impl FnOnce() + 'static) {
        if self.is_animated() {
            self.alongside.push(Box::new(work));
        } else {
            work();
        }
    }

    /// Run `work` once the panel's presentation has settled or been superseded.
    pub fn on_completion(&mut self, work: impl FnOnce(TransitionOutcome) + 'static) {
        self.completions.push(Box::new(work));
    }

    /// Number of alongside work items waiting for commit.
    pub fn pending_alongside(&self) -> usize {
        self.alongside.len()
    }

    /// Apply the panel's own change, then every queued work item.
    ///
    /// Returns the completion handlers so the caller can fire them when the
    /// presentation settles.
    pub(crate) fn commit(self, apply: impl FnOnce(PanelGeometry)) -> Vec<CompletionWork> {
        let Self {
            target,
            alongside,
            completions,
            ..
        } = self;
        apply(target);
        let count = alongside.len();
        for work in alongside {
            work();
        }
        tracing::trace!(alongside = count, "transition committed");
        completions
    }
}

/// Invoke every completion handler with `outcome`.
pub(crate) fn complete_all(completions: Vec<CompletionWork>, outcome: TransitionOutcome) {
    for work in completions {
        work(outcome);
    }
}
