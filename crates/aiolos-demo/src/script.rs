//! Scripted walkthrough of the demo host's interactions.
//!
//! Each user action the interactive demo offers (toggle mode, toggle
//! visibility, rotate the device) is replayed against a [`PanelController`]
//! and the resulting geometry is recorded as a [`Step`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use aiolos_core::geometry::{LayoutDirection, Point};
use aiolos_panel::{Mode, PanelController, PanelGeometry, PanelSettings};
use tracing::{debug, info_span, warn};

use crate::host::DemoHost;
use crate::policy::{
    DemoSizes, MarkerObserver, Traits, adapt_to_traits, initial_configuration, next_mode,
};

/// Simulated display refresh interval.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Upper bound on frames spent settling one animation.
const MAX_SETTLE_FRAMES: u32 = 1_000;

#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub traits: Traits,
    pub direction: LayoutDirection,
    pub animated: bool,
    pub settings: PanelSettings,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            traits: Traits::default(),
            direction: LayoutDirection::LeftToRight,
            animated: false,
            settings: PanelSettings::default(),
        }
    }
}

/// What the host did before a [`Step`] was recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Attach,
    SetMode(Mode),
    Hide,
    Show,
    Rotate(Traits),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attach => f.write_str("attach"),
            Self::SetMode(mode) => write!(f, "mode {}", mode.as_str()),
            Self::Hide => f.write_str("hide"),
            Self::Show => f.write_str("show"),
            Self::Rotate(traits) => write!(f, "rotate {:?}/{:?}", traits.idiom, traits.vertical),
        }
    }
}

/// Panel state after one scripted action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub action: Action,
    pub geometry: Option<PanelGeometry>,
    pub marker: Point,
    /// Frames ticked until the presentation settled.
    pub frames: u32,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<28}", self.action.to_string())?;
        match self.geometry {
            Some(geometry) => {
                let frame = geometry.frame;
                write!(
                    f,
                    "frame=({}, {}, {}x{}) corners={:?}",
                    frame.x, frame.y, frame.width, frame.height, geometry.masked_corners
                )?;
            }
            None => f.write_str("hidden")?,
        }
        write!(f, " marker=({}, {})", self.marker.x, self.marker.y)?;
        if self.frames > 0 {
            write!(f, " frames={}", self.frames)?;
        }
        Ok(())
    }
}

/// The demo screen: a host, its collaborators and the panel they drive.
pub struct Demo {
    panel: PanelController,
    host: Rc<DemoHost>,
    sizes: Rc<DemoSizes>,
    // Held so the panel's weak reference stays alive.
    _observer: Rc<MarkerObserver>,
    marker: Rc<Cell<Point>>,
    animated: bool,
}

impl Demo {
    pub fn new(options: &DemoOptions) -> Self {
        let host = Rc::new(DemoHost::new(options.traits, options.direction));
        let sizes = Rc::new(DemoSizes::new(options.traits));
        let marker = Rc::new(Cell::new(Point::ZERO));
        let observer = Rc::new(MarkerObserver::new(Rc::clone(&marker)));

        let mut panel = PanelController::with_settings(&options.settings);
        panel.set_configuration(initial_configuration(
            options.settings.initial,
            options.traits,
        ));
        panel.set_size_provider(&sizes);
        panel.set_transition_observer(&observer);

        Self {
            panel,
            host,
            sizes,
            _observer: observer,
            marker,
            animated: options.animated,
        }
    }

    pub fn panel(&self) -> &PanelController {
        &self.panel
    }

    pub fn attach(&mut self) {
        self.panel.attach(&self.host);
    }

    /// Detach when visible, attach when hidden.
    pub fn toggle_visibility(&mut self) -> Action {
        if self.panel.is_visible() {
            self.panel.detach();
            Action::Hide
        } else {
            self.panel.attach(&self.host);
            Action::Show
        }
    }

    /// Advance along the compact → expanded → full-height cycle.
    pub fn toggle_mode(&mut self) -> Action {
        let mode = next_mode(self.panel.configuration().mode);
        let next = self.panel.configuration().with_mode(mode);
        if self.animated {
            self.panel.animate_configuration(next);
        } else {
            self.panel.set_configuration(next);
        }
        Action::SetMode(mode)
    }

    /// Rotate the device, re-deriving position and margins as an animated change.
    pub fn rotate(&mut self) -> Action {
        let traits = self.host.traits().rotated();
        self.host.set_traits(traits);
        self.sizes.set_traits(traits);

        let next = adapt_to_traits(*self.panel.configuration(), traits);
        if next == *self.panel.configuration() {
            self.panel.relayout();
        } else {
            self.panel.animate_configuration(next);
        }
        Action::Rotate(traits)
    }

    /// Tick until the presentation settles. Returns the frame count.
    pub fn settle(&mut self) -> u32 {
        let mut frames = 0;
        while self.panel.is_animating() {
            if frames == MAX_SETTLE_FRAMES {
                warn!(frames, "animation did not settle");
                break;
            }
            self.panel.tick(FRAME_INTERVAL);
            frames += 1;
        }
        frames
    }

    fn record(&mut self, action: Action) -> Step {
        let frames = self.settle();
        let step = Step {
            action,
            geometry: self.panel.geometry(),
            marker: self.marker.get(),
            frames,
        };
        debug!(%action, frames, "step recorded");
        step
    }

    /// Attach, cycle modes `cycles` times, toggle visibility, rotate twice.
    pub fn run(&mut self, cycles: u32) -> Vec<Step> {
        let _span = info_span!("demo.run", cycles, animated = self.animated).entered();
        let mut steps = Vec::new();

        self.attach();
        steps.push(self.record(Action::Attach));

        for _ in 0..cycles {
            for _ in 0..Mode::ALL.len() {
                let action = self.toggle_mode();
                steps.push(self.record(action));
            }
        }

        for _ in 0..2 {
            let action = self.toggle_visibility();
            steps.push(self.record(action));
        }
        for _ in 0..2 {
            let action = self.rotate();
            steps.push(self.record(action));
        }
        steps
    }
}
