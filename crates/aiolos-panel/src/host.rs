#![forbid(unsafe_code)]

//! Host surface contract.
//!
//! A host is the parent container a panel attaches to. The controller only
//! keeps a [`Weak`] reference, so a host that is dropped while the panel is
//! attached simply reads as "detached" from then on.

use std::rc::{Rc, Weak};

use aiolos_core::geometry::{EdgeInsets, LayoutDirection, Rect};

use crate::layout::PanelGeometry;

/// Parent container that can show a panel.
pub trait PanelHost {
    /// Bounds of the host surface in its own coordinates.
    fn bounds(&self) -> Rect;

    /// Insets of the region that is safe to draw into (notches, bars).
    fn safe_area(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::LeftToRight
    }

    /// The panel became a child of this host with the given geometry.
    fn panel_did_attach(&self, _geometry: &PanelGeometry) {}

    /// The panel was removed from this host.
    fn panel_did_detach(&self) {}
}

/// Non-owning handle to a host with identity comparison.
#[derive(Clone)]
pub(crate) struct HostRef {
    inner: Weak<dyn PanelHost>,
}

impl HostRef {
    pub(crate) fn new<H: PanelHost + 'static>(host: &Rc<H>) -> Self {
        let inner: Weak<dyn PanelHost> = Rc::downgrade(host) as Weak<dyn PanelHost>;
        Self { inner }
    }

    pub(crate) fn upgrade(&self) -> Option<Rc<dyn PanelHost>> {
        self.inner.upgrade()
    }

    /// True if both handles point at the same host allocation.
    pub(crate) fn same_host<H: PanelHost + 'static>(&self, host: &Rc<H>) -> bool {
        std::ptr::addr_eq(self.inner.as_ptr(), Rc::as_ptr(host))
    }
}

impl std::fmt::Debug for HostRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostRef")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Surface(Rect);

    impl PanelHost for Surface {
        fn bounds(&self) -> Rect {
            self.0
        }
    }

    #[test]
    fn identity_is_by_allocation() {
        let a = Rc::new(Surface(Rect::from_size(10.0, 10.0)));
        let b = Rc::new(Surface(Rect::from_size(10.0, 10.0)));
        let handle = HostRef::new(&a);
        assert!(handle.same_host(&a));
        assert!(!handle.same_host(&b));
    }

    #[test]
    fn dropped_host_does_not_upgrade() {
        let host = Rc::new(Surface(Rect::from_size(10.0, 10.0)));
        let handle = HostRef::new(&host);
        assert!(handle.upgrade().is_some());
        drop(host);
        assert!(handle.upgrade().is_none());
    }

    #[test]
    fn default_safe_area_and_direction() {
        let host = Surface(Rect::from_size(1.0, 1.0));
        assert_eq!(host.safe_area(), EdgeInsets::ZERO);
        assert_eq!(host.layout_direction(), LayoutDirection::LeftToRight);
    }
}
