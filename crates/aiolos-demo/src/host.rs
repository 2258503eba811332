//! Simulated screen the demo panel lives in.

use std::cell::Cell;

use aiolos_core::geometry::{EdgeInsets, LayoutDirection, Rect};
use aiolos_panel::{PanelGeometry, PanelHost};
use tracing::info;

use crate::policy::{Idiom, Traits, VerticalSizeClass};

/// Bounds and safe area of the simulated device for `traits`.
pub fn screen_for(traits: Traits) -> (Rect, EdgeInsets) {
    match (traits.idiom, traits.vertical) {
        (Idiom::Phone, VerticalSizeClass::Regular) => (
            Rect::from_size(375.0, 667.0),
            EdgeInsets::new(20.0, 0.0, 0.0, 0.0),
        ),
        (Idiom::Phone, VerticalSizeClass::Compact) => {
            (Rect::from_size(667.0, 375.0), EdgeInsets::ZERO)
        }
        (Idiom::Pad, VerticalSizeClass::Regular) => (
            Rect::from_size(1024.0, 768.0),
            EdgeInsets::new(20.0, 0.0, 0.0, 0.0),
        ),
        (Idiom::Pad, VerticalSizeClass::Compact) => (
            Rect::from_size(768.0, 1024.0),
            EdgeInsets::new(20.0, 0.0, 0.0, 0.0),
        ),
    }
}

#[derive(Debug)]
pub struct DemoHost {
    traits: Cell<Traits>,
    bounds: Cell<Rect>,
    safe_area: Cell<EdgeInsets>,
    direction: LayoutDirection,
}

impl DemoHost {
    pub fn new(traits: Traits, direction: LayoutDirection) -> Self {
        let (bounds, safe_area) = screen_for(traits);
        Self {
            traits: Cell::new(traits),
            bounds: Cell::new(bounds),
            safe_area: Cell::new(safe_area),
            direction,
        }
    }

    pub fn traits(&self) -> Traits {
        self.traits.get()
    }

    /// Switch to `traits`, resizing the screen to match.
    pub fn set_traits(&self, traits: Traits) {
        let (bounds, safe_area) = screen_for(traits);
        self.traits.set(traits);
        self.bounds.set(bounds);
        self.safe_area.set(safe_area);
    }
}

impl PanelHost for DemoHost {
    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn safe_area(&self) -> EdgeInsets {
        self.safe_area.get()
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn panel_did_attach(&self, geometry: &PanelGeometry) {
        info!(frame = ?geometry.frame, "panel added to screen");
    }

    fn panel_did_detach(&self) {
        info!("panel removed from screen");
    }
}
