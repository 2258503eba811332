#![forbid(unsafe_code)]

//! Core: geometry primitives and easing curves shared by the Aiolos crates.
//!
//! # Role in Aiolos
//! `aiolos-core` has no knowledge of panels. It provides the value types the
//! panel controller computes with ([`geometry::Rect`], [`geometry::Size`],
//! [`geometry::EdgeInsets`]) and the curves used to interpolate between two
//! frames ([`easing::Easing`]).

pub mod easing;
pub mod geometry;

pub use easing::Easing;
pub use geometry::{EdgeInsets, LayoutDirection, Point, Rect, Size};
