use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyModifiers};
use span_wm::input::{DispatchOutcome, InputDispatcher, KeyCaseMode, KeyPress, canonical_combo};
use span_wm::surface::{Surface, SurfaceRegistry};
use span_wm::window::{WindowCoordinator, WindowFrame};

#[test]
fn canonicalization_is_press_order_independent() {
    // However the host reports the modifiers, the output order is fixed:
    // shift, alt, ctrl, key.
    let a = KeyPress::new(
        KeyCode::Char('k'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    );
    let b = KeyPress::new(
        KeyCode::Char('k'),
        KeyModifiers::SHIFT | KeyModifiers::CONTROL,
    );
    assert_eq!(
        canonical_combo(&a, KeyCaseMode::Insensitive),
        canonical_combo(&b, KeyCaseMode::Insensitive)
    );
    assert_eq!(canonical_combo(&a, KeyCaseMode::Insensitive), "shift+ctrl+k");
}

#[test]
fn key_events_route_to_the_active_window() {
    let mut registry = SurfaceRegistry::new();
    let s1 = registry.open(Surface::new(0, 0, 800, 600));
    let mut wm: WindowCoordinator<&str> = WindowCoordinator::new();
    wm.open_window("editor", WindowFrame::new(0, 0, 400, 300), s1);
    wm.open_window("log", WindowFrame::new(100, 100, 300, 200), s1);

    let mut dispatcher: InputDispatcher<&str> = InputDispatcher::new();
    let seen: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let editor_seen = Rc::clone(&seen);
    dispatcher.register("editor", "ctrl+s", move |_| {
        editor_seen.borrow_mut().push("editor-save");
    });
    let log_seen = Rc::clone(&seen);
    dispatcher.register("log", "ctrl+s", move |_| {
        log_seen.borrow_mut().push("log-save");
    });

    let save = KeyPress::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

    wm.activate_window("editor");
    assert_eq!(
        dispatcher.dispatch(wm.active_window(), &save),
        DispatchOutcome::Handled
    );
    wm.activate_window("log");
    assert_eq!(
        dispatcher.dispatch(wm.active_window(), &save),
        DispatchOutcome::Handled
    );
    assert_eq!(seen.borrow().as_slice(), &["editor-save", "log-save"]);
}

#[test]
fn events_without_focus_are_dropped() {
    let wm: WindowCoordinator<&str> = WindowCoordinator::new();
    let mut dispatcher: InputDispatcher<&str> = InputDispatcher::new();
    dispatcher.register("editor", "ctrl+s", |_| panic!("must not run"));
    let save = KeyPress::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(
        dispatcher.dispatch(wm.active_window(), &save),
        DispatchOutcome::Dropped
    );
}

#[test]
fn unbound_combo_falls_through_to_noop() {
    let mut dispatcher: InputDispatcher<&str> = InputDispatcher::new();
    dispatcher.register("editor", "ctrl+s", |_| {});
    let other = KeyPress::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
    assert_eq!(
        dispatcher.dispatch(Some("editor"), &other),
        DispatchOutcome::Unhandled
    );
}

#[test]
fn unregistering_last_handler_releases_the_scope() {
    let mut dispatcher: InputDispatcher<&str> = InputDispatcher::new();
    dispatcher.register("editor", "ctrl+s", |_| {});
    dispatcher.register("editor", "ctrl+q", |_| {});
    dispatcher.unregister("editor", "ctrl+s");
    assert_eq!(dispatcher.handler_count(), 1);
    dispatcher.unregister("editor", "ctrl+q");
    assert_eq!(dispatcher.handler_count(), 0);

    // re-registering after teardown works from a clean slate
    dispatcher.register("editor", "ctrl+s", |_| {});
    let save = KeyPress::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(
        dispatcher.dispatch(Some("editor"), &save),
        DispatchOutcome::Handled
    );
}

#[test]
fn case_sensitive_mode_distinguishes_shifted_characters() {
    let mut dispatcher: InputDispatcher<&str> = InputDispatcher::with_mode(KeyCaseMode::Sensitive);
    let hits = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&hits);
    dispatcher.register("pane", "shift+K", move |_| {
        *counter.borrow_mut() += 1;
    });
    let upper = KeyPress::new(KeyCode::Char('K'), KeyModifiers::SHIFT);
    let lower = KeyPress::new(KeyCode::Char('k'), KeyModifiers::SHIFT);
    assert_eq!(dispatcher.dispatch(Some("pane"), &upper), DispatchOutcome::Handled);
    assert_eq!(dispatcher.dispatch(Some("pane"), &lower), DispatchOutcome::Unhandled);
    assert_eq!(*hits.borrow(), 1);
}
