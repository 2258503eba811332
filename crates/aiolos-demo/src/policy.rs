//! Host-side policies: how the demo picks a panel configuration for the
//! device it runs on, and how it sizes and decorates the panel.

use std::cell::Cell;
use std::rc::Rc;

use aiolos_core::geometry::{EdgeInsets, Point, Size};
use aiolos_panel::{
    Configuration, MaskedCorners, Mode, Position, SizeProvider, TransitionCoordinator,
    TransitionObserver,
};
use clap::ValueEnum;
use tracing::debug;

/// Device family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Idiom {
    #[default]
    Phone,
    Pad,
}

/// Vertical size class; `Compact` is a phone in landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalSizeClass {
    #[default]
    Regular,
    Compact,
}

/// The environment traits panel policies depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Traits {
    pub idiom: Idiom,
    pub vertical: VerticalSizeClass,
}

impl Traits {
    pub const fn new(idiom: Idiom, vertical: VerticalSizeClass) -> Self {
        Self { idiom, vertical }
    }

    #[inline]
    pub fn is_vertically_compact(self) -> bool {
        self.vertical == VerticalSizeClass::Compact
    }

    /// Same idiom with the vertical size class flipped (a device rotation).
    #[must_use]
    pub fn rotated(self) -> Self {
        let vertical = match self.vertical {
            VerticalSizeClass::Regular => VerticalSizeClass::Compact,
            VerticalSizeClass::Compact => VerticalSizeClass::Regular,
        };
        Self { vertical, ..self }
    }
}

pub fn panel_position(traits: Traits) -> Position {
    match traits.idiom {
        Idiom::Pad => Position::TrailingBottom,
        Idiom::Phone if traits.is_vertically_compact() => Position::LeadingBottom,
        Idiom::Phone => Position::Bottom,
    }
}

pub fn panel_margins(traits: Traits) -> EdgeInsets {
    match traits.idiom {
        Idiom::Pad => EdgeInsets::all(20.0),
        Idiom::Phone => {
            let horizontal = if traits.is_vertically_compact() {
                20.0
            } else {
                0.0
            };
            EdgeInsets::new(20.0, horizontal, 0.0, horizontal)
        }
    }
}

/// Panel width the demo asks for. Ignored for [`Position::Bottom`].
pub fn panel_width(traits: Traits, position: Position) -> f64 {
    if position == Position::Bottom {
        return 0.0;
    }
    match traits.idiom {
        Idiom::Pad => 320.0,
        Idiom::Phone => 270.0,
    }
}

/// Panel height the demo asks for. Ignored for [`Mode::FullHeight`].
pub fn panel_height(mode: Mode) -> f64 {
    match mode {
        Mode::Compact => 64.0,
        Mode::Expanded => 270.0,
        Mode::FullHeight => 0.0,
    }
}

pub fn masked_corners(idiom: Idiom) -> MaskedCorners {
    match idiom {
        Idiom::Pad => MaskedCorners::ALL,
        Idiom::Phone => MaskedCorners::TOP,
    }
}

/// compact → expanded → full-height → compact.
pub fn next_mode(mode: Mode) -> Mode {
    match mode {
        Mode::Compact => Mode::Expanded,
        Mode::Expanded => Mode::FullHeight,
        Mode::FullHeight => Mode::Compact,
    }
}

/// Configuration the demo starts with on a device with `traits`.
pub fn initial_configuration(base: Configuration, traits: Traits) -> Configuration {
    base.with_position(panel_position(traits))
        .with_margins(panel_margins(traits))
        .with_masked_corners(masked_corners(traits.idiom))
}

/// `configuration` with position and margins re-derived for `traits`.
pub fn adapt_to_traits(configuration: Configuration, traits: Traits) -> Configuration {
    configuration
        .with_position(panel_position(traits))
        .with_margins(panel_margins(traits))
}

/// Size provider backed by the policies above.
#[derive(Debug, Default)]
pub struct DemoSizes {
    traits: Cell<Traits>,
}

impl DemoSizes {
    pub fn new(traits: Traits) -> Self {
        Self {
            traits: Cell::new(traits),
        }
    }

    pub fn set_traits(&self, traits: Traits) {
        self.traits.set(traits);
    }
}

impl SizeProvider for DemoSizes {
    fn size_for(&self, mode: Mode, configuration: &Configuration) -> Size {
        Size::new(
            panel_width(self.traits.get(), configuration.position),
            panel_height(mode),
        )
    }
}

/// Gap between the marker line and the panel's top edge.
pub const MARKER_GAP: f64 = 5.0;

/// Keeps a marker line centred just above the panel, moving it as part of
/// each transition.
#[derive(Debug, Default)]
pub struct MarkerObserver {
    marker: Rc<Cell<Point>>,
    notifications: Cell<usize>,
}

impl MarkerObserver {
    pub fn new(marker: Rc<Cell<Point>>) -> Self {
        Self {
            marker,
            notifications: Cell::new(0),
        }
    }

    pub fn notifications(&self) -> usize {
        self.notifications.get()
    }
}

impl TransitionObserver for MarkerObserver {
    fn will_transition(&self, target_size: Size, coordinator: &mut TransitionCoordinator) {
        self.notifications.set(self.notifications.get() + 1);
        debug!(
            width = target_size.width,
            height = target_size.height,
            animated = coordinator.is_animated(),
            "panel will transition"
        );
        let marker = Rc::clone(&self.marker);
        let target = coordinator.target_frame();
        let position = Point::new(target.center().x, target.min_y() - MARKER_GAP);
        coordinator.run_alongside(move || marker.set(position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: Traits = Traits::new(Idiom::Phone, VerticalSizeClass::Regular);
    const PHONE_LANDSCAPE: Traits = Traits::new(Idiom::Phone, VerticalSizeClass::Compact);
    const PAD: Traits = Traits::new(Idiom::Pad, VerticalSizeClass::Regular);

    #[test]
    fn position_policy() {
        assert_eq!(panel_position(PHONE), Position::Bottom);
        assert_eq!(panel_position(PHONE_LANDSCAPE), Position::LeadingBottom);
        assert_eq!(panel_position(PAD), Position::TrailingBottom);
        assert_eq!(panel_position(PAD.rotated()), Position::TrailingBottom);
    }

    #[test]
    fn margin_policy() {
        assert_eq!(panel_margins(PAD), EdgeInsets::all(20.0));
        assert_eq!(panel_margins(PHONE), EdgeInsets::new(20.0, 0.0, 0.0, 0.0));
        assert_eq!(
            panel_margins(PHONE_LANDSCAPE),
            EdgeInsets::new(20.0, 20.0, 0.0, 20.0)
        );
    }

    #[test]
    fn width_policy_ignores_bottom() {
        assert_eq!(panel_width(PAD, Position::TrailingBottom), 320.0);
        assert_eq!(panel_width(PHONE, Position::LeadingBottom), 270.0);
        assert_eq!(panel_width(PAD, Position::Bottom), 0.0);
    }

    #[test]
    fn corner_policy() {
        assert_eq!(masked_corners(Idiom::Pad), MaskedCorners::ALL);
        assert_eq!(masked_corners(Idiom::Phone), MaskedCorners::TOP);
    }

    #[test]
    fn mode_cycle_returns_to_start() {
        let mut mode = Mode::Compact;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = next_mode(mode);
            seen.push(mode);
        }
        assert_eq!(seen, vec![Mode::Expanded, Mode::FullHeight, Mode::Compact]);
    }

    #[test]
    fn rotation_flips_vertical_class_only() {
        assert_eq!(PHONE.rotated(), PHONE_LANDSCAPE);
        assert_eq!(PHONE.rotated().rotated(), PHONE);
    }

    #[test]
    fn sizes_follow_traits_and_position() {
        let sizes = DemoSizes::new(PHONE);
        let leading = Configuration::default().with_position(Position::LeadingBottom);
        assert_eq!(
            sizes.size_for(Mode::Expanded, &leading.with_mode(Mode::Expanded)),
            Size::new(270.0, 270.0)
        );
        sizes.set_traits(PAD);
        assert_eq!(
            sizes.size_for(Mode::Compact, &leading),
            Size::new(320.0, 64.0)
        );
    }

    #[test]
    fn initial_configuration_applies_all_policies() {
        let config = initial_configuration(Configuration::default(), PAD);
        assert_eq!(config.position, Position::TrailingBottom);
        assert_eq!(config.margins, EdgeInsets::all(20.0));
        assert_eq!(config.masked_corners, MaskedCorners::ALL);
        assert_eq!(config.mode, Mode::Compact);

        let rotated = adapt_to_traits(config.with_mode(Mode::Expanded), PHONE_LANDSCAPE);
        assert_eq!(rotated.mode, Mode::Expanded);
        assert_eq!(rotated.masked_corners, MaskedCorners::ALL);
        assert_eq!(rotated.position, Position::LeadingBottom);
    }
}
