//! Skills section: category tabs and proficiency bars.

use egui::{Color32, ProgressBar, RichText, Ui};

use crate::content::SkillCategory;
use crate::theme;
use crate::viewport::VisibilityObserver;

pub struct SkillsState {
    pub gate: VisibilityObserver,
    active_category: usize,
}

impl SkillsState {
    pub fn new() -> Self {
        Self {
            gate: VisibilityObserver::default(),
            active_category: 0,
        }
    }
}

impl Default for SkillsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Bar color by proficiency band.
pub(crate) fn level_color(level: u8) -> Color32 {
    if level >= 90 {
        theme::accent::GREEN
    } else if level >= 80 {
        theme::accent::BLUE
    } else {
        theme::accent::PURPLE
    }
}

pub fn render_skills(
    ui: &mut Ui,
    categories: &[SkillCategory],
    state: &mut SkillsState,
    animate: bool,
) {
    ui.add_space(48.0);
    theme::section_heading(ui, "Technical ", "Skills");
    ui.add_space(24.0);

    if categories.is_empty() {
        return;
    }
    state.active_category = state.active_category.min(categories.len() - 1);

    // Category tabs
    ui.horizontal_wrapped(|ui| {
        for (i, category) in categories.iter().enumerate() {
            let label = format!("{} {}", category.icon, category.label);
            if ui
                .selectable_label(state.active_category == i, label)
                .clicked()
            {
                state.active_category = i;
            }
        }
    });
    ui.add_space(16.0);

    let category = &categories[state.active_category];
    let half = (category.skills.len() + 1) / 2;

    ui.columns(2, |columns| {
        for (i, skill) in category.skills.iter().enumerate() {
            let column = &mut columns[if i < half { 0 } else { 1 }];

            column.horizontal(|ui| {
                ui.label(format!("{} {}", skill.icon, skill.name));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{}%", skill.level))
                            .small()
                            .color(theme::text::MUTED),
                    );
                });
            });

            let target = skill.level as f32 / 100.0;
            let fraction = if animate {
                // Bars sweep up to their level when the section appears.
                column.ctx().animate_value_with_time(
                    egui::Id::new(("skill_bar", state.active_category, i)),
                    target,
                    0.6,
                )
            } else {
                target
            };
            column.add(
                ProgressBar::new(fraction)
                    .desired_width(column.available_width())
                    .fill(level_color(skill.level)),
            );
            column.add_space(10.0);
        }
    });

    ui.add_space(48.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_bands_map_to_distinct_colors() {
        assert_eq!(level_color(95), theme::accent::GREEN);
        assert_eq!(level_color(90), theme::accent::GREEN);
        assert_eq!(level_color(85), theme::accent::BLUE);
        assert_eq!(level_color(80), theme::accent::BLUE);
        assert_eq!(level_color(79), theme::accent::PURPLE);
        assert_eq!(level_color(0), theme::accent::PURPLE);
    }
}
