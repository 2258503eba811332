//! Property-based invariant tests for geometry primitives and easing curves.
//!
//! 1. `Rect::inset_by` never yields a negative (or NaN) width or height,
//!    whatever the insets, including negative and non-finite ones
//! 2. `Rect::lerp` reproduces its endpoints at t = 0 and t = 1
//! 3. `Size::clamped` and `EdgeInsets::clamped` are non-negative and idempotent
//! 4. Every easing curve is pinned at 0 and 1; curves that cannot overshoot
//!    stay within [0, 1] for any input

use aiolos_core::easing::Easing;
use aiolos_core::geometry::{EdgeInsets, Rect, Size};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

// ── Strategies ──────────────────────────────────────────────────────────

/// Any value a host or a settings file could hand us, non-finite included.
fn wild_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1e6..1e6f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn wild_insets() -> impl Strategy<Value = EdgeInsets> {
    (wild_f64(), wild_f64(), wild_f64(), wild_f64())
        .prop_map(|(top, left, bottom, right)| EdgeInsets::new(top, left, bottom, right))
}

fn finite_rect() -> impl Strategy<Value = Rect> {
    (-1e4..1e4f64, -1e4..1e4f64, 0.0..1e4f64, 0.0..1e4f64)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

fn easing_strategy() -> impl Strategy<Value = Easing> {
    prop::sample::select(vec![
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Back,
    ])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * b.abs().max(1.0)
}

// ── 1. inset_by ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn inset_by_never_negative(rect in finite_rect(), insets in wild_insets()) {
        let inner = rect.inset_by(insets);
        prop_assert!(inner.width >= 0.0, "width {} for {:?}", inner.width, insets);
        prop_assert!(inner.height >= 0.0, "height {} for {:?}", inner.height, insets);
    }

    #[test]
    fn inset_by_clamped_insets_never_grows(rect in finite_rect(), insets in wild_insets()) {
        let inner = rect.inset_by(insets.clamped());
        prop_assert!(inner.width <= rect.width + EPS);
        prop_assert!(inner.height <= rect.height + EPS);
        prop_assert!(inner.x >= rect.x - EPS);
        prop_assert!(inner.y >= rect.y - EPS);
    }
}

// ── 2. lerp endpoints ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn lerp_hits_endpoints(from in finite_rect(), to in finite_rect()) {
        prop_assert_eq!(from.lerp(&to, 0.0), from);

        let end = from.lerp(&to, 1.0);
        prop_assert!(close(end.x, to.x), "x {} vs {}", end.x, to.x);
        prop_assert!(close(end.y, to.y), "y {} vs {}", end.y, to.y);
        prop_assert!(close(end.width, to.width));
        prop_assert!(close(end.height, to.height));
    }

    #[test]
    fn lerp_midpoint_stays_between(from in finite_rect(), to in finite_rect(), t in 0.0..=1.0f64) {
        let mid = from.lerp(&to, t);
        let lo = from.height.min(to.height);
        let hi = from.height.max(to.height);
        prop_assert!(mid.height >= lo - EPS && mid.height <= hi + EPS);
    }
}

// ── 3. clamping ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn size_clamped_is_idempotent(width in wild_f64(), height in wild_f64()) {
        let once = Size::new(width, height).clamped();
        prop_assert!(once.width >= 0.0 && once.height >= 0.0);
        prop_assert_eq!(once.clamped(), once);
    }

    #[test]
    fn insets_clamped_is_idempotent(insets in wild_insets()) {
        let once = insets.clamped();
        for v in [once.top, once.left, once.bottom, once.right] {
            prop_assert!(v.is_finite() && v >= 0.0);
        }
        prop_assert_eq!(once.clamped(), once);
    }
}

// ── 4. easing ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn easing_is_pinned_and_bounded(easing in easing_strategy(), t in -10.0..10.0f64) {
        prop_assert!(easing.apply(0.0).abs() < EPS);
        prop_assert!((easing.apply(1.0) - 1.0).abs() < EPS);

        let v = easing.apply(t);
        if easing.can_overshoot() {
            prop_assert!((-0.5..=1.5).contains(&v), "{:?}({}) = {}", easing, t, v);
        } else {
            prop_assert!((0.0..=1.0).contains(&v), "{:?}({}) = {}", easing, t, v);
        }
    }
}
