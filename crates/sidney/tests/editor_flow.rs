//! Editor-level flows combining widgets, history and configuration.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use sidney::prelude::*;
use sidney::{ConfigError, Publisher};

fn press_and_release(gui: &mut Gui) {
    gui.handle_event(&InputEvent::ButtonDown(MouseButton::Left));
    gui.handle_event(&InputEvent::ButtonUp(MouseButton::Left));
}

#[test]
fn config_file_drives_gui_and_history() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[gui]\ntool_tip_delay_ms = 100\n\n[history]\nmax_size = 2").unwrap();
    let config = SidneyConfig::from_toml_file(file.path()).unwrap();

    let mut gui = Gui::new(config.gui.clone(), MonospaceMetrics::new(0.5));
    gui.button(
        gui.content(),
        "Undo",
        ElementOptions::new().with_size(50.0, 20.0).with_tip("Undo last edit"),
    )
    .unwrap();
    gui.update(&InputState::at(10.0, 10.0, 0));
    gui.update(&InputState::at(10.0, 10.0, 101));
    assert_eq!(gui.tool_tip_text().as_deref(), Some("Undo last edit"));

    let mut history = History::new(config.history);
    for _ in 0..3 {
        history.execute(Box::new(FnAction::new("Nop", || {}, || {})));
    }
    assert_eq!(history.len(), 2);
}

#[test]
fn missing_config_file_is_config_error() {
    let err: sidney::Error = SidneyConfig::from_json_file("/no/such/sidney.json")
        .unwrap_err()
        .into();
    assert_eq!(err.error_type(), "config");
    assert!(matches!(err, Error::Config(ConfigError::Io(_))));
}

/// A slider drag amends one history entry instead of adding one per frame.
#[test]
fn slider_gesture_is_one_undo_step() {
    let mut gui = Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5));
    let slider = gui
        .slider(
            gui.content(),
            ElementOptions::new(),
            SliderOptions::new(0.0, 10.0),
        )
        .unwrap();

    let zoom = Rc::new(RefCell::new(0.0f64));
    let history = Rc::new(RefCell::new(History::default()));
    let gesture_start = Rc::new(RefCell::new(None::<f64>));
    {
        let (zoom, history, start) = (zoom.clone(), history.clone(), gesture_start.clone());
        gui.subscribe(slider, names::CHANGED, move |_, _, args| {
            let Some(to) = args.value().and_then(Value::as_float) else {
                return;
            };
            let from = *start.borrow_mut().get_or_insert(*zoom.borrow());
            let (a, b) = (zoom.clone(), zoom.clone());
            let action = Box::new(FnAction::new(
                "Zoom",
                move || *a.borrow_mut() = to,
                move || *b.borrow_mut() = from,
            ));
            let mut history = history.borrow_mut();
            if history.next_undo_description() == Some("Zoom") {
                let _ = history.replace_last(action);
            } else {
                history.execute(action);
            }
        })
        .unwrap();
    }

    gui.update(&InputState::at(20.0, 10.0, 0));
    gui.handle_event(&InputEvent::ButtonDown(MouseButton::Left));
    for (i, x) in [30.0, 40.0, 50.0].into_iter().enumerate() {
        gui.update(&InputState::at(x, 10.0, 16 * (i as u64 + 1)).with_left_held(true));
    }
    gui.handle_event(&InputEvent::ButtonUp(MouseButton::Left));

    assert_eq!(*zoom.borrow(), 5.0);
    assert_eq!(history.borrow().len(), 1);

    history.borrow_mut().undo().unwrap();
    assert_eq!(*zoom.borrow(), 0.0);
    history.borrow_mut().redo().unwrap();
    assert_eq!(*zoom.borrow(), 5.0);
}

#[test]
fn history_changes_refresh_menu_state() {
    let mut gui = Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5));
    let undo = gui
        .toggle_button(gui.content(), "Undo", ElementOptions::new(), ToggleOptions::new())
        .unwrap();
    let mut history = History::default();
    let can_undo = Rc::new(RefCell::new(false));
    let seen = can_undo.clone();
    history.subscribe(names::CHANGED, move |h: &mut History, _: &()| {
        *seen.borrow_mut() = h.can_undo();
    });

    gui.update(&InputState::at(5.0, 5.0, 0));
    press_and_release(&mut gui);
    history.execute(Box::new(FnAction::new("Toggle", || {}, || {})));
    assert!(*can_undo.borrow());
    assert!(gui.is_toggle_on(undo));

    history.undo().unwrap();
    assert!(!*can_undo.borrow());
}
