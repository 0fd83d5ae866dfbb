//! Projects section: filterable card grid with lazily loaded artwork.

use egui::{Button, Frame, OpenUrl, RichText, Ui};

use crate::content::{Project, PLACEHOLDER_IMAGE};
use crate::media::LazyImage;
use crate::theme;
use crate::viewport::VisibilityObserver;

const GRID_COLUMNS: usize = 3;

/// Technology chips shown per card before collapsing into "+N more".
const MAX_CHIPS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Featured,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 2] = [ProjectFilter::All, ProjectFilter::Featured];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Featured => "Featured",
        }
    }
}

/// Indices of the projects passing `filter`, in dataset order.
pub(crate) fn filtered_indices(projects: &[Project], filter: ProjectFilter) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| match filter {
            ProjectFilter::All => true,
            ProjectFilter::Featured => p.featured,
        })
        .map(|(i, _)| i)
        .collect()
}

pub struct ProjectsState {
    pub gate: VisibilityObserver,
    filter: ProjectFilter,
    /// One image per project, keyed by dataset index.
    images: Vec<LazyImage>,
}

impl ProjectsState {
    pub fn new(projects: &[Project]) -> Self {
        let images = projects
            .iter()
            .map(|p| LazyImage::new(p.title, p.image).with_fallback(PLACEHOLDER_IMAGE))
            .collect();
        Self {
            gate: VisibilityObserver::default(),
            filter: ProjectFilter::All,
            images,
        }
    }
}

pub fn render_projects(
    ui: &mut Ui,
    projects: &[Project],
    github_profile: &str,
    state: &mut ProjectsState,
    animate: bool,
) {
    ui.add_space(48.0);
    theme::section_heading(ui, "My ", "Projects");
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Recent work across AI, e-commerce and embedded platforms")
                .color(theme::text::MUTED),
        );
    });
    ui.add_space(16.0);

    // Filter toggle
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() / 2.0 - 110.0).max(0.0));
        for filter in ProjectFilter::ALL {
            if ui
                .selectable_label(state.filter == filter, filter.label())
                .clicked()
            {
                state.filter = filter;
            }
        }
    });
    ui.add_space(20.0);

    let visible = filtered_indices(projects, state.filter);
    ui.columns(GRID_COLUMNS, |columns| {
        for (slot, index) in visible.iter().enumerate() {
            let project = &projects[*index];
            let column = &mut columns[slot % GRID_COLUMNS];
            render_card(column, project, &mut state.images[*index], animate);
            column.add_space(12.0);
        }
    });

    // GitHub call to action
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(24.0, 16.0))
            .show(ui, |ui| {
                ui.label(RichText::new("More Projects").strong().size(20.0));
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Check out my GitHub profile for more projects and code samples.")
                        .color(theme::text::MUTED),
                );
                ui.add_space(10.0);
                if ui.button("Visit GitHub Profile").clicked() {
                    ui.ctx().open_url(OpenUrl::new_tab(github_profile));
                }
            });
    });

    ui.add_space(48.0);
}

fn render_card(ui: &mut Ui, project: &Project, image: &mut LazyImage, animate: bool) {
    Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            image.show(ui, egui::vec2(ui.available_width(), 130.0), animate);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if project.featured {
                    ui.label(
                        RichText::new("⭐ Featured")
                            .small()
                            .color(theme::accent::YELLOW),
                    );
                }
                if project.ai_powered {
                    ui.label(RichText::new("🤖 AI").small().color(theme::accent::CYAN));
                }
            });

            ui.label(RichText::new(project.title).strong().size(15.0));
            ui.add_space(4.0);
            ui.label(
                RichText::new(project.description)
                    .small()
                    .color(theme::text::SECONDARY),
            );
            ui.add_space(8.0);

            // Technology chips
            ui.horizontal_wrapped(|ui| {
                for tech in project.technologies.iter().take(MAX_CHIPS) {
                    ui.label(
                        RichText::new(*tech)
                            .small()
                            .background_color(ui.visuals().faint_bg_color),
                    );
                }
                if project.technologies.len() > MAX_CHIPS {
                    ui.label(
                        RichText::new(format!("+{} more", project.technologies.len() - MAX_CHIPS))
                            .small()
                            .color(theme::text::MUTED),
                    );
                }
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if let Some(url) = project.github_url {
                    if ui.add(Button::new("Code").small()).clicked() {
                        ui.ctx().open_url(OpenUrl::new_tab(url));
                    }
                }
                if let Some(url) = project.live_url {
                    if ui
                        .add(Button::new("Demo").small().fill(theme::accent::BLUE))
                        .clicked()
                    {
                        ui.ctx().open_url(OpenUrl::new_tab(url));
                    }
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    #[test]
    fn all_filter_keeps_every_project() {
        let indices = filtered_indices(PORTFOLIO.projects, ProjectFilter::All);
        assert_eq!(indices.len(), PORTFOLIO.projects.len());
    }

    #[test]
    fn featured_filter_keeps_exactly_the_featured_flag() {
        let indices = filtered_indices(PORTFOLIO.projects, ProjectFilter::Featured);
        assert!(!indices.is_empty());
        for index in &indices {
            assert!(PORTFOLIO.projects[*index].featured);
        }
        let expected = PORTFOLIO.projects.iter().filter(|p| p.featured).count();
        assert_eq!(indices.len(), expected);
    }

    #[test]
    fn filtered_indices_point_into_the_dataset() {
        for filter in ProjectFilter::ALL {
            for index in filtered_indices(PORTFOLIO.projects, filter) {
                assert!(index < PORTFOLIO.projects.len());
            }
        }
    }
}
