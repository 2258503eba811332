#![forbid(unsafe_code)]

//! Panel controller: containment, configuration diffing, transitions.
//!
//! State machine: `Detached → Attached(host) → Detached`, where `attach`
//! to a different host passes through `Detached` on the way.
//!
//! Assigning a configuration never changes that state. While attached, a
//! change to position, mode or margins runs the transition protocol:
//!
//! 1. [`SizeProvider::size_for`] with the new mode.
//! 2. A [`TransitionCoordinator`] is built for the resolved target geometry.
//! 3. [`TransitionObserver::will_transition`] with the target size.
//! 4. The coordinator commits: model geometry is replaced, then queued
//!    alongside work runs.
//!
//! A change to the corner mask alone is applied directly. Any assignment
//! while detached only stores the value; geometry is computed on `attach`.
//!
//! # Invariants
//!
//! - `geometry()` is `Some` iff `is_visible()`.
//! - Assigning an equal configuration has no side effects.
//! - At most one presentation animation is active; a newer transition
//!   supersedes it, starting from the frame currently presented.
//!
//! # Failure Modes
//!
//! - Dropped size provider: the requested size is [`Size::ZERO`].
//! - Dropped observer: the transition runs without notification.
//! - Dropped host: the panel reads as detached and the next mutating call
//!   clears the stale reference.

use std::rc::{Rc, Weak};
use std::time::Duration;

use aiolos_core::geometry::{Rect, Size};
use tracing::{debug, debug_span, trace, warn};

use crate::animator::{PresentationAnimator, PresentationPhase};
use crate::configuration::{Configuration, ConfigurationChange};
use crate::coordinator::{TransitionAnimation, TransitionCoordinator, TransitionOutcome, complete_all};
use crate::delegate::{SizeProvider, TransitionObserver};
use crate::host::{HostRef, PanelHost};
use crate::layout::{LayoutContext, PanelGeometry};
use crate::settings::{AnimationSettings, PanelSettings};

/// Controller for one floating panel.
pub struct PanelController {
    configuration: Configuration,
    /// Model geometry, present while attached.
    geometry: Option<PanelGeometry>,
    host: Option<HostRef>,
    size_provider: Option<Weak<dyn SizeProvider>>,
    transition_observer: Option<Weak<dyn TransitionObserver>>,
    animator: PresentationAnimator,
    animation: AnimationSettings,
    transitions: u64,
}

impl std::fmt::Debug for PanelController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelController")
            .field("configuration", &self.configuration)
            .field("geometry", &self.geometry)
            .field("host", &self.host)
            .field("animator", &self.animator)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl PanelController {
    /// Create a detached panel with `configuration`.
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            geometry: None,
            host: None,
            size_provider: None,
            transition_observer: None,
            animator: PresentationAnimator::new(),
            animation: AnimationSettings::default(),
            transitions: 0,
        }
    }

    /// Create a detached panel from loaded settings.
    pub fn with_settings(settings: &PanelSettings) -> Self {
        Self {
            animation: settings.animation.clone(),
            ..Self::new(settings.initial)
        }
    }

    // ------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------

    /// Use `provider` for sizing. Only a weak reference is kept.
    pub fn set_size_provider<P: SizeProvider + 'static>(&mut self, provider: &Rc<P>) {
        let weak: Weak<dyn SizeProvider> = Rc::downgrade(provider) as Weak<dyn SizeProvider>;
        self.size_provider = Some(weak);
    }

    pub fn clear_size_provider(&mut self) {
        self.size_provider = None;
    }

    /// Notify `observer` before transitions. Only a weak reference is kept.
    pub fn set_transition_observer<O: TransitionObserver + 'static>(&mut self, observer: &Rc<O>) {
        let weak: Weak<dyn TransitionObserver> =
            Rc::downgrade(observer) as Weak<dyn TransitionObserver>;
        self.transition_observer = Some(weak);
    }

    pub fn clear_transition_observer(&mut self) {
        self.transition_observer = None;
    }

    // ------------------------------------------------------------------
    // Containment
    // ------------------------------------------------------------------

    /// Show the panel in `host`.
    ///
    /// Geometry is computed from the current configuration without animation
    /// and without notifying the transition observer. Attaching to the host
    /// the panel is already in does nothing; attaching to another host
    /// detaches from the current one first.
    pub fn attach<H: PanelHost + 'static>(&mut self, host: &Rc<H>) {
        self.prune_dead_host();
        if self.host.as_ref().is_some_and(|current| current.same_host(host)) {
            trace!("panel already attached to this host");
            return;
        }
        if self.host.is_some() {
            self.detach();
        }

        let geometry = LayoutContext::from_host(&**host)
            .resolve(&self.configuration, self.requested_size(&self.configuration));
        self.host = Some(HostRef::new(host));
        self.geometry = Some(geometry);
        debug!(
            frame = ?geometry.frame,
            mode = self.configuration.mode.as_str(),
            position = self.configuration.position.as_str(),
            "panel attached"
        );
        host.panel_did_attach(&geometry);
    }

    /// Remove the panel from its host. Does nothing when detached.
    pub fn detach(&mut self) {
        let Some(host) = self.host.take() else {
            return;
        };
        self.geometry = None;
        complete_all(self.animator.stop(), TransitionOutcome::Superseded);
        if let Some(host) = host.upgrade() {
            host.panel_did_detach();
        }
        debug!("panel detached");
    }

    /// True while the panel is attached to a live host.
    pub fn is_visible(&self) -> bool {
        self.live_host().is_some()
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    #[inline]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Replace the configuration, applying any geometry change immediately.
    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.apply_configuration(configuration, None);
    }

    /// Replace the configuration as part of an animated host transition.
    ///
    /// With reduced motion in effect, or a zero duration, this behaves like
    /// [`set_configuration`](Self::set_configuration).
    pub fn set_configuration_animated(
        &mut self,
        configuration: Configuration,
        animation: TransitionAnimation,
    ) {
        let animation = (!animation.is_instant() && !self.animation.motion_reduced())
            .then_some(animation);
        self.apply_configuration(configuration, animation);
    }

    /// Animated replacement using the configured default timing.
    pub fn animate_configuration(&mut self, configuration: Configuration) {
        let animation = self.default_animation();
        self.set_configuration_animated(configuration, animation);
    }

    /// Derive a new configuration from the current one and apply it immediately.
    pub fn update_configuration(&mut self, update: impl FnOnce(Configuration) -> Configuration) {
        let next = update(self.configuration);
        self.set_configuration(next);
    }

    /// Timing used by [`animate_configuration`](Self::animate_configuration).
    pub fn default_animation(&self) -> TransitionAnimation {
        self.animation.transition_animation()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.animation.reduced_motion = reduced;
    }

    /// Recompute geometry after the host's bounds or safe area changed.
    ///
    /// Applied immediately; the observer is not notified.
    pub fn relayout(&mut self) {
        self.prune_dead_host();
        let Some(host) = self.live_host() else {
            return;
        };
        let geometry = LayoutContext::from_host(&*host)
            .resolve(&self.configuration, self.requested_size(&self.configuration));
        complete_all(self.animator.stop(), TransitionOutcome::Superseded);
        self.geometry = Some(geometry);
        trace!(frame = ?geometry.frame, "panel relayout");
    }

    // ------------------------------------------------------------------
    // Geometry and animation
    // ------------------------------------------------------------------

    /// Model geometry, `None` while detached.
    pub fn geometry(&self) -> Option<PanelGeometry> {
        self.geometry.filter(|_| self.is_visible())
    }

    /// Model frame, `None` while detached.
    pub fn frame(&self) -> Option<Rect> {
        self.geometry().map(|g| g.frame)
    }

    /// Model size, `None` while detached.
    pub fn size(&self) -> Option<Size> {
        self.frame().map(|frame| frame.size())
    }

    /// Frame currently on screen (interpolated while animating).
    pub fn presented_frame(&self) -> Option<Rect> {
        self.frame().map(|model| self.animator.presented(model))
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn presentation_phase(&self) -> PresentationPhase {
        self.animator.phase()
    }

    /// Advance the presentation animation.
    ///
    /// Returns `true` if an animation finished on this tick. An animation
    /// whose host has been dropped is superseded instead.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.prune_dead_host();
        match self.animator.tick(delta) {
            Some(completions) => {
                complete_all(completions, TransitionOutcome::Finished);
                trace!("panel animation finished");
                true
            }
            None => false,
        }
    }

    /// Number of transitions run since creation.
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn apply_configuration(
        &mut self,
        configuration: Configuration,
        animation: Option<TransitionAnimation>,
    ) {
        self.prune_dead_host();
        let change = self.configuration.diff(&configuration);
        if change.is_empty() {
            trace!("configuration unchanged");
            return;
        }

        let warnings = configuration.validate();
        if !warnings.is_empty() {
            warn!(warnings = ?warnings, "configuration will be clamped at layout");
        }
        self.configuration = configuration;

        let Some(host) = self.live_host() else {
            debug!(changes = ?change, "configuration stored while detached");
            return;
        };

        if change.is_geometric() {
            self.transition(&*host, change, animation);
        } else if let Some(geometry) = self.geometry.as_mut() {
            geometry.masked_corners = configuration.masked_corners;
            trace!(corners = ?configuration.masked_corners, "masked corners applied");
        }
    }

    fn transition(
        &mut self,
        host: &dyn PanelHost,
        change: ConfigurationChange,
        animation: Option<TransitionAnimation>,
    ) {
        let configuration = self.configuration;
        let _span = debug_span!(
            "panel.transition",
            animated = animation.is_some(),
            changes = ?change,
            mode = configuration.mode.as_str(),
            position = configuration.position.as_str()
        )
        .entered();

        let requested = self.requested_size(&configuration);
        let target = LayoutContext::from_host(host).resolve(&configuration, requested);

        let mut coordinator = match animation {
            Some(animation) => TransitionCoordinator::animated(target, animation),
            None => TransitionCoordinator::immediate(target),
        };
        if let Some(observer) = self.observer() {
            observer.will_transition(target.size(), &mut coordinator);
        }

        let presented = self.presented_frame().unwrap_or(target.frame);
        let superseded = self.animator.stop();
        let geometry = &mut self.geometry;
        let completions = coordinator.commit(|applied| *geometry = Some(applied));
        if !superseded.is_empty() {
            debug!(count = superseded.len(), "superseding in-flight animation");
        }
        complete_all(superseded, TransitionOutcome::Superseded);

        match animation {
            Some(animation) => {
                let stale = self
                    .animator
                    .start(presented, target.frame, animation, completions);
                complete_all(stale, TransitionOutcome::Superseded);
            }
            None => complete_all(completions, TransitionOutcome::Finished),
        }

        self.transitions += 1;
        debug!(frame = ?target.frame, "panel transition applied");
    }

    fn requested_size(&self, configuration: &Configuration) -> Size {
        match self.size_provider.as_ref().and_then(Weak::upgrade) {
            Some(provider) => provider.size_for(configuration.mode, configuration),
            None => {
                warn!("no size provider; using zero size");
                Size::ZERO
            }
        }
    }

    fn observer(&self) -> Option<Rc<dyn TransitionObserver>> {
        self.transition_observer.as_ref().and_then(Weak::upgrade)
    }

    fn live_host(&self) -> Option<Rc<dyn PanelHost>> {
        self.host.as_ref().and_then(HostRef::upgrade)
    }

    /// Forget a host that has been dropped while the panel was attached.
    fn prune_dead_host(&mut self) {
        if self.host.is_some() && self.live_host().is_none() {
            warn!("host dropped while panel attached; treating panel as detached");
            self.host = None;
            self.geometry = None;
            complete_all(self.animator.stop(), TransitionOutcome::Superseded);
        }
    }
}
