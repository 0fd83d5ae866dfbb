//! Experience section: career and education timelines behind a tab toggle.

use egui::{Frame, RichText, Ui};

use crate::content::{EducationEntry, ExperienceEntry};
use crate::theme;
use crate::viewport::VisibilityObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceTab {
    Experience,
    Education,
}

impl ExperienceTab {
    pub const ALL: [ExperienceTab; 2] = [ExperienceTab::Experience, ExperienceTab::Education];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceTab::Experience => "💼 Experience",
            ExperienceTab::Education => "🎓 Education",
        }
    }
}

pub struct ExperienceState {
    pub gate: VisibilityObserver,
    tab: ExperienceTab,
}

impl ExperienceState {
    pub fn new() -> Self {
        Self {
            gate: VisibilityObserver::default(),
            tab: ExperienceTab::Experience,
        }
    }
}

impl Default for ExperienceState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_experience(
    ui: &mut Ui,
    experience: &[ExperienceEntry],
    education: &[EducationEntry],
    state: &mut ExperienceState,
) {
    ui.add_space(48.0);
    theme::section_heading(ui, "My ", "Journey");
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("A timeline of my professional experience and educational background")
                .color(theme::text::MUTED),
        );
    });
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() / 2.0 - 130.0).max(0.0));
        for tab in ExperienceTab::ALL {
            if ui.selectable_label(state.tab == tab, tab.label()).clicked() {
                state.tab = tab;
            }
        }
    });
    ui.add_space(20.0);

    match state.tab {
        ExperienceTab::Experience => {
            for entry in experience {
                timeline_card(
                    ui,
                    entry.title,
                    entry.company,
                    entry.duration,
                    entry.location,
                    entry.achievements,
                );
            }
        }
        ExperienceTab::Education => {
            for entry in education {
                timeline_card(
                    ui,
                    entry.degree,
                    entry.school,
                    entry.duration,
                    entry.location,
                    entry.details,
                );
            }
        }
    }

    ui.add_space(48.0);
}

fn timeline_card(
    ui: &mut Ui,
    title: &str,
    organization: &str,
    duration: &str,
    location: &str,
    bullets: &[&str],
) {
    Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16.0, 12.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(title).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(duration)
                            .small()
                            .color(theme::text::MUTED),
                    );
                });
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new(organization).color(theme::accent::BLUE));
                ui.label(
                    RichText::new(format!("· {}", location))
                        .small()
                        .color(theme::text::MUTED),
                );
            });
            ui.add_space(6.0);
            for bullet in bullets {
                ui.label(RichText::new(format!("• {}", bullet)).size(13.0));
            }
        });
    ui.add_space(10.0);
}
