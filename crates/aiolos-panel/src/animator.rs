#![forbid(unsafe_code)]

//! Presentation animation for panel frame changes.
//!
//! The controller replaces its model geometry the moment a transition
//! commits. [`PresentationAnimator`] tracks what is on screen while the
//! panel travels from the old frame to the new one.
//!
//! # Example
//!
//! ```ignore
//! let mut animator = PresentationAnimator::new();
//! animator.start(old_frame, new_frame, TransitionAnimation::default(), Vec::new());
//!
//! // Each frame:
//! if let Some(done) = animator.tick(delta) { /* fire completions */ }
//! let frame = animator.presented(new_frame);
//! ```
//!
//! # Invariants
//!
//! - Progress is always in [0.0, 1.0].
//! - Presented width and height are never negative, even under an
//!   overshooting easing.
//! - `presented(model)` equals `model` whenever no animation is active.
//! - Starting while active supersedes the running animation: the new one
//!   begins at the frame currently presented, so nothing jumps.
//!
//! # Failure Modes
//!
//! - Zero-duration animations complete on the next tick.

use std::time::Duration;

use aiolos_core::geometry::Rect;

use crate::coordinator::{CompletionWork, TransitionAnimation};

/// Current phase of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationPhase {
    /// Presented frame equals the model frame.
    #[default]
    Settled,
    /// Presented frame is interpolating toward the model frame.
    Animating,
}

struct ActiveAnimation {
    from: Rect,
    to: Rect,
    animation: TransitionAnimation,
    elapsed: Duration,
    completions: Vec<CompletionWork>,
}

impl ActiveAnimation {
    fn progress(&self) -> f64 {
        let total = self.animation.duration.as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / total).clamp(0.0, 1.0)
    }

    /// Interpolated frame. Position may overshoot; size never goes below zero.
    fn frame(&self) -> Rect {
        let mut frame = self
            .from
            .lerp(&self.to, self.animation.easing.apply(self.progress()));
        frame.width = frame.width.max(0.0);
        frame.height = frame.height.max(0.0);
        frame
    }
}

/// Drives the on-screen frame of a panel between two model frames.
#[derive(Default)]
pub struct PresentationAnimator {
    active: Option<ActiveAnimation>,
}

impl std::fmt::Debug for PresentationAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut d = f.debug_struct("PresentationAnimator");
        d.field("phase", &self.phase());
        if let Some(active) = &self.active {
            d.field("from", &active.from)
                .field("to", &active.to)
                .field("progress", &active.progress())
                .field("completions", &active.completions.len());
        }
        d.finish()
    }
}

impl PresentationAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PresentationPhase {
        if self.active.is_some() {
            PresentationPhase::Animating
        } else {
            PresentationPhase::Settled
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Raw progress of the running animation (1.0 when settled).
    pub fn progress(&self) -> f64 {
        self.active.as_ref().map_or(1.0, ActiveAnimation::progress)
    }

    /// Frame currently on screen given the controller's `model` frame.
    pub fn presented(&self, model: Rect) -> Rect {
        self.active.as_ref().map_or(model, ActiveAnimation::frame)
    }

    /// Start animating from `from` to `to`.
    ///
    /// Returns the completion handlers of a superseded animation, if any.
    #[must_use]
    pub(crate) fn start(
        &mut self,
        from: Rect,
        to: Rect,
        animation: TransitionAnimation,
        completions: Vec<CompletionWork>,
    ) -> Vec<CompletionWork> {
        let superseded = self.stop();
        self.active = Some(ActiveAnimation {
            from,
            to,
            animation,
            elapsed: Duration::ZERO,
            completions,
        });
        superseded
    }

    /// Stop without finishing. Returns the handlers still owed an outcome.
    #[must_use]
    pub(crate) fn stop(&mut self) -> Vec<CompletionWork> {
        self.active
            .take()
            .map(|active| active.completions)
            .unwrap_or_default()
    }

    /// Advance by `delta`.
    ///
    /// Returns the completion handlers when the animation finishes on this tick.
    pub(crate) fn tick(&mut self, delta: Duration) -> Option<Vec<CompletionWork>> {
        let active = self.active.as_mut()?;
        active.elapsed = active.elapsed.saturating_add(delta);
        if active.progress() < 1.0 {
            return None;
        }
        self.active.take().map(|active| active.completions)
    }
}
