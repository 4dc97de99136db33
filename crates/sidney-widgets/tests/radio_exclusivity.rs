//! Property tests for radio group exclusivity.

use proptest::prelude::*;
use sidney_core::render::MonospaceMetrics;
use sidney_core::value::Value;
use sidney_widgets::{ElementId, ElementOptions, Gui, GuiConfig, Packing, RadioOptions};

fn group_of(size: usize) -> (Gui, ElementId, Vec<ElementId>) {
    let mut gui = Gui::new(GuiConfig::default(), MonospaceMetrics::new(0.5));
    let group = gui
        .radio_group(gui.content(), Packing::vertical(2.0), ElementOptions::new())
        .unwrap();
    let buttons = (0..size)
        .map(|i| {
            gui.radio_button(
                group,
                i,
                format!("option {i}"),
                ElementOptions::new(),
                RadioOptions::new(),
            )
            .unwrap()
        })
        .collect();
    (gui, group, buttons)
}

proptest! {
    #[test]
    fn exactly_the_last_checked_button_is_checked(
        size in 1usize..6,
        picks in prop::collection::vec(0usize..6, 1..20),
    ) {
        let (mut gui, group, buttons) = group_of(size);
        for pick in picks {
            let target = buttons[pick % size];
            gui.check(target).unwrap();

            let checked: Vec<_> = buttons.iter().copied().filter(|&b| gui.is_checked(b)).collect();
            prop_assert_eq!(checked, vec![target]);
            prop_assert_eq!(gui.radio_group_selected(group).unwrap(), Some(target));
            prop_assert_eq!(gui.radio_group_value(group).unwrap(), Value::from(pick % size));
        }
    }

    #[test]
    fn setting_group_value_matches_checking_its_button(
        size in 1usize..6,
        pick in 0usize..6,
    ) {
        let (mut gui, group, buttons) = group_of(size);
        gui.set_radio_group_value(group, pick % size).unwrap();
        prop_assert!(gui.is_checked(buttons[pick % size]));
        prop_assert_eq!(
            buttons.iter().filter(|&&b| gui.is_checked(b)).count(),
            1
        );
    }
}
