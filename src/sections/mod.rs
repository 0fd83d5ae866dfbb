//! Page sections.
//!
//! Each section is a free render function over a small state struct; the
//! app owns the state and stacks the sections inside one scroll area.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use egui::{Sense, Ui};

use crate::theme;
use crate::viewport::VisibilityObserver;

/// Height of a not-yet-activated section's placeholder.
const PLACEHOLDER_HEIGHT: f32 = 520.0;

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

/// Skeleton stand-in for a section whose gate has not fired yet. Observes
/// its own rect; once the gate activates, the caller renders the real
/// content on the next pass. Activation is one-way.
pub fn section_placeholder(ui: &mut Ui, gate: &mut VisibilityObserver) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), PLACEHOLDER_HEIGHT),
        Sense::hover(),
    );
    if gate.observe(rect, ui.clip_rect()) {
        ui.ctx().request_repaint();
    }
    if ui.is_rect_visible(rect) {
        theme::skeleton_section(ui, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_in_page_order() {
        assert_eq!(Section::ALL[0], Section::Home);
        assert_eq!(Section::ALL[Section::ALL.len() - 1], Section::Contact);
    }

    #[test]
    fn labels_are_unique() {
        let labels: std::collections::HashSet<_> =
            Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels.len(), Section::ALL.len());
    }
}
