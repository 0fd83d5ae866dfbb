use crate::app::{scroll_indicator_visible, section_in_view};
use crate::sections::Section;

fn tops() -> Vec<(Section, f32)> {
    vec![
        (Section::Home, 0.0),
        (Section::About, 800.0),
        (Section::Skills, 1600.0),
        (Section::Projects, 2400.0),
    ]
}

#[test]
fn empty_tops_default_to_home() {
    assert_eq!(section_in_view(&[], 500.0), Section::Home);
}

#[test]
fn probe_above_everything_is_home() {
    assert_eq!(section_in_view(&tops(), -50.0), Section::Home);
}

#[test]
fn picks_the_last_section_above_the_probe() {
    assert_eq!(section_in_view(&tops(), 10.0), Section::Home);
    assert_eq!(section_in_view(&tops(), 900.0), Section::About);
    assert_eq!(section_in_view(&tops(), 1600.0), Section::Skills);
    assert_eq!(section_in_view(&tops(), 99_999.0), Section::Projects);
}

#[test]
fn scroll_hint_shows_only_near_the_top() {
    assert!(scroll_indicator_visible(0.0, 800.0));
    assert!(scroll_indicator_visible(399.0, 800.0));
    assert!(!scroll_indicator_visible(400.0, 800.0));
    assert!(!scroll_indicator_visible(5000.0, 800.0));
}
