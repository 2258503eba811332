#![allow(dead_code)]

//! Recording collaborators shared by the integration tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use aiolos_core::geometry::{EdgeInsets, LayoutDirection, Rect, Size};
use aiolos_panel::{
    Configuration, Mode, PanelGeometry, PanelHost, Position, SizeProvider, TransitionCoordinator,
    TransitionObserver,
};

/// Ordered log of collaborator calls.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct TestHost {
    pub bounds: Cell<Rect>,
    pub safe_area: Cell<EdgeInsets>,
    pub direction: Cell<LayoutDirection>,
    pub attached: Cell<usize>,
    pub detached: Cell<usize>,
    pub last_geometry: Cell<Option<PanelGeometry>>,
}

impl TestHost {
    pub fn new(width: f64, height: f64) -> Rc<Self> {
        Rc::new(Self {
            bounds: Cell::new(Rect::from_size(width, height)),
            safe_area: Cell::new(EdgeInsets::ZERO),
            direction: Cell::new(LayoutDirection::LeftToRight),
            attached: Cell::new(0),
            detached: Cell::new(0),
            last_geometry: Cell::new(None),
        })
    }

    /// 375×667 portrait phone without safe-area insets.
    pub fn phone() -> Rc<Self> {
        Self::new(375.0, 667.0)
    }
}

impl PanelHost for TestHost {
    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn safe_area(&self) -> EdgeInsets {
        self.safe_area.get()
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction.get()
    }

    fn panel_did_attach(&self, geometry: &PanelGeometry) {
        self.attached.set(self.attached.get() + 1);
        self.last_geometry.set(Some(*geometry));
    }

    fn panel_did_detach(&self) {
        self.detached.set(self.detached.get() + 1);
    }
}

/// Size provider answering 270 wide, 64/270/0 tall, recording every query.
pub struct RecordingSizes {
    pub log: CallLog,
    pub queries: RefCell<Vec<Mode>>,
}

impl RecordingSizes {
    pub fn new(log: &CallLog) -> Rc<Self> {
        Rc::new(Self {
            log: log.clone(),
            queries: RefCell::new(Vec::new()),
        })
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

pub fn demo_size(mode: Mode) -> Size {
    match mode {
        Mode::Compact => Size::new(270.0, 64.0),
        Mode::Expanded => Size::new(270.0, 270.0),
        Mode::FullHeight => Size::new(270.0, 0.0),
    }
}

impl SizeProvider for RecordingSizes {
    fn size_for(&self, mode: Mode, configuration: &Configuration) -> Size {
        assert_eq!(configuration.mode, mode);
        self.queries.borrow_mut().push(mode);
        self.log
            .borrow_mut()
            .push(format!("size_for:{}", mode.as_str()));
        demo_size(mode)
    }
}

/// Observer recording every notification; optionally schedules alongside work.
pub struct RecordingObserver {
    pub log: CallLog,
    pub notifications: RefCell<Vec<(Size, bool)>>,
    pub schedule_alongside: Cell<bool>,
}

impl RecordingObserver {
    pub fn new(log: &CallLog) -> Rc<Self> {
        Rc::new(Self {
            log: log.clone(),
            notifications: RefCell::new(Vec::new()),
            schedule_alongside: Cell::new(false),
        })
    }

    pub fn count(&self) -> usize {
        self.notifications.borrow().len()
    }
}

impl TransitionObserver for RecordingObserver {
    fn will_transition(&self, target_size: Size, coordinator: &mut TransitionCoordinator) {
        let animated = coordinator.is_animated();
        self.notifications
            .borrow_mut()
            .push((target_size, animated));
        self.log.borrow_mut().push(format!(
            "will_transition:{}x{}",
            target_size.width, target_size.height
        ));
        if self.schedule_alongside.get() {
            let log = self.log.clone();
            coordinator.run_alongside(move || log.borrow_mut().push("alongside".to_string()));
        }
    }
}

pub fn leading(config: Configuration) -> Configuration {
    config.with_position(Position::LeadingBottom)
}
