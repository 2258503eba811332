#![forbid(unsafe_code)]

//! Panel frame resolution.
//!
//! Turns a [`Configuration`], the size the provider asked for and the host's
//! bounds into the frame the panel occupies.
//!
//! ```text
//!  host bounds
//!  ┌────────────────────────────────┐
//!  │ safe area                      │
//!  │  ┌──────────────────────────┐  │
//!  │  │ margins                  │  │
//!  │  │  ┌────────────────────┐  │  │
//!  │  │  │ available          │  │  │
//!  │  │  │                    │  │  │
//!  │  │  │┌──────┐            │  │  │
//!  │  │  ││panel │ (leading)  │  │  │
//!  │  │  └┴──────┴────────────┘  │  │
//! ```
//!
//! # Invariants
//!
//! 1. The panel's bottom edge sits on the available rect's bottom edge.
//! 2. `Position::Bottom` => frame width == available width.
//! 3. `Mode::FullHeight` => frame height == available height.
//! 4. Frame width and height are never negative.
//!
//! # Failure Modes
//!
//! - Negative or non-finite margins and requested sizes are clamped to zero.
//! - A requested size larger than the available rect is applied as-is; the
//!   panel then extends past the leading/top edge of the available rect.

use aiolos_core::geometry::{EdgeInsets, LayoutDirection, Rect, Size};

use crate::configuration::{Configuration, MaskedCorners, Position};
use crate::host::PanelHost;

/// Geometry applied to the panel: where it is and how its corners look.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelGeometry {
    pub frame: Rect,
    pub masked_corners: MaskedCorners,
}

impl PanelGeometry {
    #[inline]
    pub fn size(&self) -> Size {
        self.frame.size()
    }
}

/// Snapshot of the host properties layout depends on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutContext {
    pub bounds: Rect,
    pub safe_area: EdgeInsets,
    pub direction: LayoutDirection,
}

impl LayoutContext {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_safe_area(mut self, safe_area: EdgeInsets) -> Self {
        self.safe_area = safe_area;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn from_host(host: &dyn PanelHost) -> Self {
        Self {
            bounds: host.bounds(),
            safe_area: host.safe_area(),
            direction: host.layout_direction(),
        }
    }

    /// Region the panel is laid out in: bounds minus safe area minus margins.
    pub fn available(&self, margins: EdgeInsets) -> Rect {
        self.bounds
            .inset_by(self.safe_area.clamped())
            .inset_by(margins.clamped())
    }

    /// Full geometry for `configuration` given the provider's `requested` size.
    pub fn resolve(&self, configuration: &Configuration, requested: Size) -> PanelGeometry {
        let available = self.available(configuration.margins);
        let size = resolve_size(configuration, requested, available);
        PanelGeometry {
            frame: panel_frame(configuration.position, size, available, self.direction),
            masked_corners: configuration.masked_corners,
        }
    }
}

/// Final panel size: host-driven axes replaced by the available extent.
pub fn resolve_size(configuration: &Configuration, requested: Size, available: Rect) -> Size {
    let requested = requested.clamped();
    let width = if configuration.position.fills_width() {
        available.width
    } else {
        requested.width
    };
    let height = if configuration.mode.fills_height() {
        available.height
    } else {
        requested.height
    };
    Size::new(width, height)
}

/// Frame of a panel of `size` pinned according to `position` inside `available`.
pub fn panel_frame(
    position: Position,
    size: Size,
    available: Rect,
    direction: LayoutDirection,
) -> Rect {
    let leading_is_left = direction.leading_is_left();
    let pin_left = match position {
        Position::Bottom => true,
        Position::LeadingBottom => leading_is_left,
        Position::TrailingBottom => !leading_is_left,
    };
    let x = if pin_left {
        available.min_x()
    } else {
        available.max_x() - size.width
    };
    let y = available.max_y() - size.height;
    Rect::new(x, y, size.width, size.height)
}
