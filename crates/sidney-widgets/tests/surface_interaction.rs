//! End-to-end interaction through the surface controller.

use std::cell::RefCell;
use std::rc::Rc;

use sidney_core::event::{EventArgs, InputEvent, KeyCode, KeyEvent, MouseButton, names};
use sidney_core::input::InputState;
use sidney_core::render::{DrawList, MonospaceMetrics};
use sidney_core::value::Value;
use sidney_widgets::{
    ElementId, ElementOptions, Gui, GuiConfig, MenuItemOptions, SliderOptions, TextAreaOptions,
};

type Log = Rc<RefCell<Vec<String>>>;

fn gui() -> Gui {
    Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5))
}

fn record(gui: &mut Gui, id: ElementId, event: &'static str, tag: &'static str, log: &Log) {
    let log = log.clone();
    gui.subscribe(id, event, move |_, _, _| {
        log.borrow_mut().push(format!("{event}:{tag}"));
    })
    .unwrap();
}

fn press(gui: &mut Gui) {
    gui.handle_event(&InputEvent::ButtonDown(MouseButton::Left));
}

fn release(gui: &mut Gui) {
    gui.handle_event(&InputEvent::ButtonUp(MouseButton::Left));
}

fn two_buttons(gui: &mut Gui) -> (ElementId, ElementId) {
    let a = gui
        .button(
            gui.content(),
            "A",
            ElementOptions::new().with_size(50.0, 20.0),
        )
        .unwrap();
    let b = gui
        .button(
            gui.content(),
            "B",
            ElementOptions::new()
                .with_position(100.0, 0.0)
                .with_size(50.0, 20.0),
        )
        .unwrap();
    (a, b)
}

#[test]
fn press_and_release_on_same_element_clicks_once() {
    let mut gui = gui();
    let (a, _) = two_buttons(&mut gui);
    let log = Log::default();
    record(&mut gui, a, names::CLICKED_LEFT_MOUSE_BUTTON, "a", &log);

    gui.update(&InputState::at(10.0, 10.0, 0));
    press(&mut gui);
    assert_eq!(gui.armed(), Some(a));
    release(&mut gui);

    assert_eq!(*log.borrow(), vec!["clicked_left_mouse_button:a"]);
    assert_eq!(gui.armed(), None);
}

#[test]
fn dragging_off_an_element_does_not_click() {
    let mut gui = gui();
    let (a, b) = two_buttons(&mut gui);
    let log = Log::default();
    record(&mut gui, a, names::CLICKED_LEFT_MOUSE_BUTTON, "a", &log);
    record(&mut gui, b, names::CLICKED_LEFT_MOUSE_BUTTON, "b", &log);
    record(&mut gui, b, names::RELEASED_LEFT_MOUSE_BUTTON, "b", &log);

    gui.update(&InputState::at(10.0, 10.0, 0));
    press(&mut gui);
    gui.update(&InputState::at(110.0, 10.0, 16).with_left_held(true));
    release(&mut gui);

    assert_eq!(*log.borrow(), vec!["released_left_mouse_button:b"]);
}

#[test]
fn hover_transition_leaves_before_entering() {
    let mut gui = gui();
    let (a, b) = two_buttons(&mut gui);
    let log = Log::default();
    for (id, tag) in [(a, "a"), (b, "b")] {
        record(&mut gui, id, names::ENTER, tag, &log);
        record(&mut gui, id, names::LEAVE, tag, &log);
    }

    gui.update(&InputState::at(10.0, 10.0, 0));
    gui.update(&InputState::at(110.0, 10.0, 16));
    gui.update(&InputState::at(300.0, 10.0, 32));

    assert_eq!(
        *log.borrow(),
        vec!["enter:a", "leave:a", "enter:b", "leave:b"]
    );
    assert_eq!(gui.hovered(), None);
    assert!(!gui.is_hovered(b));
}

#[test]
fn tool_tip_appears_after_delay_and_clears_on_move() {
    let mut gui = gui();
    gui.button(
        gui.content(),
        "Save",
        ElementOptions::new().with_size(50.0, 20.0).with_tip("Save file"),
    )
    .unwrap();

    gui.update(&InputState::at(10.0, 10.0, 0));
    gui.update(&InputState::at(10.0, 10.0, 400));
    assert_eq!(gui.tool_tip_text(), None);

    gui.update(&InputState::at(10.0, 10.0, 501));
    assert_eq!(gui.tool_tip_text().as_deref(), Some("Save file"));

    let mut list = DrawList::new();
    gui.draw(&mut list);
    assert!(list.texts().any(|t| t == "Save file"));

    gui.update(&InputState::at(11.0, 10.0, 520));
    assert_eq!(gui.tool_tip_text(), None);
    gui.update(&InputState::at(11.0, 10.0, 1000));
    assert_eq!(gui.tool_tip_text(), None);
    gui.update(&InputState::at(11.0, 10.0, 1021));
    assert_eq!(gui.tool_tip_text().as_deref(), Some("Save file"));
}

#[test]
fn empty_tips_never_show() {
    let mut gui = gui();
    two_buttons(&mut gui);
    gui.update(&InputState::at(10.0, 10.0, 0));
    gui.update(&InputState::at(10.0, 10.0, 5_000));
    assert_eq!(gui.tool_tip_text(), None);
}

#[test]
fn combo_box_opens_menu_and_takes_selection() {
    let mut gui = gui();
    let combo = gui
        .combo_box(gui.content(), "red", ElementOptions::new())
        .unwrap();
    for (value, text) in [("red", "Red"), ("green", "Green"), ("blue", "Blue")] {
        gui.combo_add_item(combo, value, MenuItemOptions::new(text))
            .unwrap();
    }
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    gui.subscribe(combo, names::CHANGED, move |_, _, args| {
        sink.borrow_mut().push(args.value().cloned());
    })
    .unwrap();

    gui.update(&InputState::at(5.0, 5.0, 0));
    press(&mut gui);
    release(&mut gui);
    let menu = gui.combo_menu(combo).unwrap();
    assert_eq!(gui.active_menu(), Some(menu));
    // Rows are 23 px tall and the menu opens one pixel below the box.
    assert_eq!(gui.rect(menu).unwrap().y, 24.0);

    gui.update(&InputState::at(5.0, 75.0, 16));
    press(&mut gui);
    release(&mut gui);

    assert_eq!(gui.active_menu(), None);
    assert_eq!(gui.combo_value(combo).unwrap(), &Value::from("blue"));
    assert_eq!(gui.text(combo).as_deref(), Some("Blue"));
    assert_eq!(*changes.borrow(), vec![Some(Value::from("blue"))]);
}

#[test]
fn right_click_selects_menu_items_too() {
    let mut gui = gui();
    let menu = gui.menu_pane(ElementOptions::new()).unwrap();
    gui.menu_add_item(menu, 7, MenuItemOptions::new("Seven"))
        .unwrap();
    let picked = Rc::new(RefCell::new(None));
    let sink = picked.clone();
    gui.subscribe(menu, names::SELECTED, move |_, _, args| {
        *sink.borrow_mut() = args.value().cloned();
    })
    .unwrap();

    gui.show_menu(menu);
    gui.update(&InputState::at(5.0, 5.0, 0));
    gui.handle_event(&InputEvent::ButtonDown(MouseButton::Right));

    assert_eq!(*picked.borrow(), Some(Value::Int(7)));
    assert_eq!(gui.active_menu(), None);
}

#[test]
fn typing_past_max_height_is_rolled_back() {
    let mut gui = gui();
    // Room for five characters per line and exactly two lines.
    let area = gui
        .text_area(
            gui.content(),
            ElementOptions::new().with_width(53.0),
            TextAreaOptions::new("aaaaa bbbbb")
                .with_editable(true)
                .with_max_height(38.0),
        )
        .unwrap();

    gui.update(&InputState::at(5.0, 5.0, 0));
    press(&mut gui);
    release(&mut gui);
    assert_eq!(gui.focused(), Some(area));
    assert_eq!(gui.text_input_owner(), Some(area));

    gui.handle_event(&InputEvent::Key(KeyEvent::new(KeyCode::End)));
    gui.handle_event(&InputEvent::Text(" ".into()));
    assert_eq!(gui.text_area_text(area).unwrap(), "aaaaa bbbbb ");
    let caret = gui.caret_position(area).unwrap();
    let lines = gui.text_area_lines(area).unwrap().to_vec();

    gui.handle_event(&InputEvent::Text("c".into()));

    assert_eq!(gui.text_area_text(area).unwrap(), "aaaaa bbbbb ");
    assert_eq!(gui.caret_position(area).unwrap(), caret);
    assert_eq!(gui.text_area_lines(area).unwrap(), lines.as_slice());
    assert_eq!(gui.rect(area).unwrap().height, 38.0);
}

#[test]
fn pressing_elsewhere_blurs_the_text_area() {
    let mut gui = gui();
    let area = gui
        .text_area(
            gui.content(),
            ElementOptions::new().with_width(100.0),
            TextAreaOptions::new("hi").with_editable(true),
        )
        .unwrap();
    let log = Log::default();
    record(&mut gui, area, names::FOCUS, "area", &log);
    record(&mut gui, area, names::BLUR, "area", &log);

    gui.update(&InputState::at(5.0, 5.0, 0));
    press(&mut gui);
    release(&mut gui);
    gui.update(&InputState::at(300.0, 300.0, 16));
    press(&mut gui);

    assert_eq!(*log.borrow(), vec!["focus:area", "blur:area"]);
    assert_eq!(gui.focused(), None);
    assert_eq!(gui.text_input_owner(), None);

    gui.handle_event(&InputEvent::Text("x".into()));
    assert_eq!(gui.text_area_text(area).unwrap(), "hi");
}

#[test]
fn slider_follows_drag_until_release() {
    let mut gui = gui();
    let slider = gui
        .slider(
            gui.content(),
            ElementOptions::new(),
            SliderOptions::new(0.0, 10.0),
        )
        .unwrap();

    gui.update(&InputState::at(50.0, 10.0, 0));
    press(&mut gui);
    assert_eq!(gui.slider_value(slider).unwrap(), 5.0);

    gui.update(&InputState::at(200.0, 10.0, 16).with_left_held(true));
    assert_eq!(gui.slider_value(slider).unwrap(), 10.0);

    release(&mut gui);
    assert!(!gui.is_slider_dragging(slider));
    gui.update(&InputState::at(0.0, 10.0, 32).with_left_held(true));
    assert_eq!(gui.slider_value(slider).unwrap(), 10.0);
}

#[test]
fn wheel_goes_to_hovered_element() {
    let mut gui = gui();
    let (a, _) = two_buttons(&mut gui);
    let log = Log::default();
    record(&mut gui, a, names::MOUSE_WHEEL_DOWN, "a", &log);

    gui.handle_event(&InputEvent::WheelDown);
    gui.update(&InputState::at(10.0, 10.0, 0));
    gui.handle_event(&InputEvent::WheelDown);

    assert_eq!(*log.borrow(), vec!["mouse_wheel_down:a"]);
}

#[test]
fn hover_events_carry_the_pointer() {
    let mut gui = gui();
    let (a, _) = two_buttons(&mut gui);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    gui.subscribe(a, names::HOVER, move |_, _, args: &EventArgs| {
        sink.borrow_mut().push(args.pointer());
    })
    .unwrap();

    gui.update(&InputState::at(10.0, 12.0, 0));
    gui.update(&InputState::at(10.0, 12.0, 16));
    assert_eq!(*seen.borrow(), vec![Some((10.0, 12.0)), Some((10.0, 12.0))]);
}
