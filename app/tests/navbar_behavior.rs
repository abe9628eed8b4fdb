//! Event-sequence tests for the navbar, driven through the public model and a
//! fake viewport instead of a browser.

use std::cell::RefCell;
use std::collections::HashMap;

use app::{
    dom::{DomError, ScrollLock, Viewport, scroll_to_anchor, sync_scroll_lock},
    nav::{NavConfig, NavState, anchor_id, nav_items},
};

#[derive(Default)]
struct FakeViewport {
    scroll_y: f64,
    width: f64,
    sections: HashMap<&'static str, f64>,
    scrolled_to: RefCell<Vec<f64>>,
    lock_calls: RefCell<Vec<bool>>,
}

impl FakeViewport {
    fn landing_page(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            width: 390.0,
            sections: HashMap::from([
                ("home", -scroll_y),
                ("about", 900.0 - scroll_y),
                ("properties", 1800.0 - scroll_y),
                ("contact", 2700.0 - scroll_y),
            ]),
            ..Self::default()
        }
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> Result<f64, DomError> {
        Ok(self.scroll_y)
    }

    fn inner_width(&self) -> Result<f64, DomError> {
        Ok(self.width)
    }

    fn element_top(&self, id: &str) -> Result<Option<f64>, DomError> {
        Ok(self.sections.get(id).copied())
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), DomError> {
        self.scrolled_to.borrow_mut().push(top);
        Ok(())
    }

    fn set_scroll_locked(&self, locked: bool) -> Result<(), DomError> {
        self.lock_calls.borrow_mut().push(locked);
        Ok(())
    }
}

#[test]
fn every_link_lands_below_the_header() {
    let config = NavConfig::default();
    let viewport = FakeViewport::landing_page(300.0);

    for item in nav_items() {
        scroll_to_anchor(&viewport, item.anchor_id(), &config).unwrap();
    }

    assert_eq!(
        *viewport.scrolled_to.borrow(),
        vec![-80.0, 820.0, 1720.0, 2620.0]
    );
}

#[test]
fn link_without_fragment_does_not_scroll() {
    let viewport = FakeViewport::landing_page(0.0);

    let target = scroll_to_anchor(&viewport, anchor_id("/listings"), &NavConfig::default());

    assert_eq!(target, Ok(None));
    assert!(viewport.scrolled_to.borrow().is_empty());
}

#[test]
fn mobile_session_opens_and_dismisses_menu() {
    let config = NavConfig::default();
    let mut state = NavState::default();

    state = state.on_scroll(120.0, &config).unwrap_or(state);
    assert!(state.scrolled);

    state = state.toggled();
    assert!(state.menu_open);

    // Tapping inside the panel keeps it open.
    state = state.on_pointer_down(true).unwrap_or(state);
    assert!(state.menu_open);

    // Rotating a phone stays below the breakpoint.
    state = state.on_resize(700.0, &config).unwrap_or(state);
    assert!(state.menu_open);

    state = state.on_link_click().unwrap_or(state);
    assert_eq!(
        state,
        NavState {
            menu_open: false,
            scrolled: true
        }
    );

    state = state.toggled();
    state = state.on_pointer_down(false).unwrap_or(state);
    assert!(!state.menu_open);

    state = state.toggled();
    state = state.on_resize(1024.0, &config).unwrap_or(state);
    assert!(!state.menu_open);
    assert!(state.scrolled);
}

#[test]
fn scroll_lock_follows_menu() {
    let viewport = FakeViewport::landing_page(0.0);
    let mut state = NavState::default();

    state = state.toggled();
    let mut lock = sync_scroll_lock(state.menu_open, None, &viewport);
    assert!(lock.is_some());

    // A re-run while still open keeps the lock it already holds.
    lock = sync_scroll_lock(state.menu_open, lock, &viewport);
    assert_eq!(*viewport.lock_calls.borrow(), vec![true]);

    state = state.toggled();
    lock = sync_scroll_lock(state.menu_open, lock, &viewport);
    assert!(lock.is_none());
    assert_eq!(*viewport.lock_calls.borrow(), vec![true, false]);
}

#[test]
fn scroll_lock_released_when_owner_goes_away() {
    let viewport = FakeViewport::landing_page(0.0);
    {
        let _lock = ScrollLock::acquire(&viewport).unwrap();
        assert_eq!(*viewport.lock_calls.borrow(), vec![true]);
    }
    assert_eq!(*viewport.lock_calls.borrow(), vec![true, false]);
}
