//! Main application state and UI.

use std::time::Instant;

use eframe::egui::{self, Key, OpenUrl, RichText};

use crate::content::PORTFOLIO;
use crate::perf::{FrameMetrics, FrameSample};
use crate::sections::{
    self, about::AboutState, contact::ContactState, experience::ExperienceState, hero::HeroState,
    projects::ProjectsState, skills::SkillsState, Section,
};
use crate::settings::Settings;
use crate::theme;
use crate::viewport::{windowed_list, WindowState};

/// Row height of the performance panel's frame log.
const SAMPLE_ROW_HEIGHT: f32 = 18.0;

/// The nav highlight probes this far below the viewport top.
const NAV_PROBE_FRACTION: f32 = 0.35;

/// Main portfolio application
pub struct PortfolioApp {
    // UI state
    active_section: Section,
    pending_scroll: Option<Section>,
    scroll_offset: f32,
    viewport_height: f32,
    /// Section tops in page coordinates, captured last frame.
    section_tops: Vec<(Section, f32)>,

    // Section state
    hero: HeroState,
    about: AboutState,
    skills: SkillsState,
    projects: ProjectsState,
    experience: ExperienceState,
    contact: ContactState,

    // Performance tracking
    metrics: FrameMetrics,
    perf_window: WindowState,

    // Settings persistence
    settings: Settings,
    settings_dirty: bool,
    last_settings_save: Instant,
}

impl PortfolioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Load saved settings
        let settings = Settings::load();
        tracing::info!("portfolio app starting");

        Self {
            active_section: Section::Home,
            pending_scroll: None,
            scroll_offset: 0.0,
            viewport_height: 0.0,
            section_tops: Vec::new(),

            hero: HeroState::new(),
            about: AboutState::new(&PORTFOLIO.personal),
            skills: SkillsState::new(),
            projects: ProjectsState::new(PORTFOLIO.projects),
            experience: ExperienceState::new(),
            contact: ContactState::new(),

            metrics: FrameMetrics::new(),
            perf_window: WindowState::default(),

            settings,
            settings_dirty: false,
            last_settings_save: Instant::now(),
        }
    }

    /// Mark settings as needing to be saved
    fn mark_settings_dirty(&mut self) {
        self.settings_dirty = true;
    }

    /// Save settings if dirty and enough time has passed (debounce)
    fn maybe_save_settings(&mut self) {
        if self.settings_dirty && self.last_settings_save.elapsed().as_secs() >= 2 {
            self.settings.save();
            self.settings_dirty = false;
            self.last_settings_save = Instant::now();
        }
    }

    fn render_navbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::none()
                    .fill(ctx.style().visuals.panel_fill)
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let logo = RichText::new("RR")
                        .strong()
                        .size(20.0)
                        .color(theme::accent::BLUE);
                    if ui.add(egui::Button::new(logo).frame(false)).clicked() {
                        self.pending_scroll = Some(Section::Home);
                    }
                    ui.separator();

                    for section in Section::ALL {
                        if ui
                            .selectable_label(self.active_section == section, section.label())
                            .clicked()
                        {
                            self.pending_scroll = Some(section);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_icon = if self.settings.dark_mode { "☀" } else { "🌙" };
                        if ui
                            .add(egui::Button::new(theme_icon).frame(false))
                            .on_hover_text("Toggle theme")
                            .clicked()
                        {
                            self.settings.dark_mode = !self.settings.dark_mode;
                            self.mark_settings_dirty();
                        }

                        let motion_icon = if self.settings.reduced_motion { "🐢" } else { "✨" };
                        if ui
                            .add(egui::Button::new(motion_icon).frame(false))
                            .on_hover_text("Toggle animations")
                            .clicked()
                        {
                            self.settings.reduced_motion = !self.settings.reduced_motion;
                            self.mark_settings_dirty();
                        }

                        if ui.button("Resume").clicked() {
                            ui.ctx()
                                .open_url(OpenUrl::new_tab(PORTFOLIO.personal.resume_url));
                        }
                    });
                });
            });
    }

    fn render_page(&mut self, ui: &mut egui::Ui) {
        let animate = !self.settings.reduced_motion;
        let show_hint = scroll_indicator_visible(self.scroll_offset, self.viewport_height);

        let output = egui::ScrollArea::vertical()
            .id_salt("page")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let origin_y = ui.next_widget_position().y;
                let mut tops: Vec<(Section, f32)> = Vec::with_capacity(Section::ALL.len());

                // Hero renders eagerly; everything below the fold is gated.
                let rect = ui
                    .scope(|ui| {
                        if let Some(target) = sections::hero::render_hero(
                            ui,
                            &PORTFOLIO.personal,
                            PORTFOLIO.typing_phrases,
                            &mut self.hero,
                            animate,
                            show_hint,
                        ) {
                            self.pending_scroll = Some(target);
                        }
                    })
                    .response
                    .rect;
                self.after_section(ui, Section::Home, rect, origin_y, &mut tops);

                let rect = ui
                    .scope(|ui| {
                        if self.about.gate.is_active() {
                            sections::about::render_about(
                                ui,
                                &PORTFOLIO.about,
                                &mut self.about,
                                animate,
                            );
                        } else {
                            sections::section_placeholder(ui, &mut self.about.gate);
                        }
                    })
                    .response
                    .rect;
                self.after_section(ui, Section::About, rect, origin_y, &mut tops);

                let rect = ui
                    .scope(|ui| {
                        if self.skills.gate.is_active() {
                            sections::skills::render_skills(
                                ui,
                                PORTFOLIO.skill_categories,
                                &mut self.skills,
                                animate,
                            );
                        } else {
                            sections::section_placeholder(ui, &mut self.skills.gate);
                        }
                    })
                    .response
                    .rect;
                self.after_section(ui, Section::Skills, rect, origin_y, &mut tops);

                let rect = ui
                    .scope(|ui| {
                        if self.projects.gate.is_active() {
                            sections::projects::render_projects(
                                ui,
                                PORTFOLIO.projects,
                                PORTFOLIO.personal.github,
                                &mut self.projects,
                                animate,
                            );
                        } else {
                            sections::section_placeholder(ui, &mut self.projects.gate);
                        }
                    })
                    .response
                    .rect;
                self.after_section(ui, Section::Projects, rect, origin_y, &mut tops);

                let rect = ui
                    .scope(|ui| {
                        if self.experience.gate.is_active() {
                            sections::experience::render_experience(
                                ui,
                                PORTFOLIO.experience,
                                PORTFOLIO.education,
                                &mut self.experience,
                            );
                        } else {
                            sections::section_placeholder(ui, &mut self.experience.gate);
                        }
                    })
                    .response
                    .rect;
                self.after_section(ui, Section::Experience, rect, origin_y, &mut tops);

                let rect = ui
                    .scope(|ui| {
                        if self.contact.gate.is_active() {
                            sections::contact::render_contact(
                                ui,
                                &PORTFOLIO.personal,
                                &mut self.contact,
                            );
                        } else {
                            sections::section_placeholder(ui, &mut self.contact.gate);
                        }
                    })
                    .response
                    .rect;
                self.after_section(ui, Section::Contact, rect, origin_y, &mut tops);

                sections::footer::render_footer(ui, &PORTFOLIO.personal);

                self.section_tops = tops;
            });

        self.scroll_offset = output.state.offset.y;
        self.viewport_height = output.inner_rect.height();
    }

    /// Record a section's page position and honor a pending scroll request.
    fn after_section(
        &mut self,
        ui: &mut egui::Ui,
        section: Section,
        rect: egui::Rect,
        origin_y: f32,
        tops: &mut Vec<(Section, f32)>,
    ) {
        tops.push((section, rect.top() - origin_y));
        if self.pending_scroll == Some(section) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
            self.pending_scroll = None;
        }
    }

    fn render_perf_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Performance");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new("P to toggle")
                        .small()
                        .color(theme::text::MUTED),
                );
            });
        });
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(format!("FPS: {:.1}", self.metrics.fps()));
            ui.separator();
            ui.label(format!("avg {:.2} ms", self.metrics.average_ms()));
            ui.separator();
            let long = self.metrics.long_frame_count();
            let color = if long > 0 {
                theme::accent::RED
            } else {
                theme::text::MUTED
            };
            ui.colored_label(color, format!("{} long frames", long));
            ui.separator();

            let mut overscan = self.settings.overscan;
            ui.add(egui::Slider::new(&mut overscan, 0..=20).text("Overscan"));
            if overscan != self.settings.overscan {
                self.settings.overscan = overscan;
                self.mark_settings_dirty();
            }
        });
        ui.separator();

        let overscan = self.settings.overscan;
        ui.columns(2, |columns| {
            render_summary_table(&mut columns[0], &self.metrics);

            // Frame log: only rows near the scroll position are laid out.
            windowed_list(
                &mut columns[1],
                "perf_samples",
                self.metrics.samples(),
                SAMPLE_ROW_HEIGHT,
                overscan,
                &mut self.perf_window,
                render_sample_row,
            );
        });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.metrics.on_frame();
        self.maybe_save_settings();
        theme::apply(ctx, self.settings.dark_mode);

        if ctx.input(|i| i.key_pressed(Key::P)) {
            self.settings.show_perf_panel = !self.settings.show_perf_panel;
            self.mark_settings_dirty();
        }

        let probe = self.scroll_offset + self.viewport_height * NAV_PROBE_FRACTION;
        self.active_section = section_in_view(&self.section_tops, probe);

        self.render_navbar(ctx);

        if self.settings.show_perf_panel {
            egui::TopBottomPanel::bottom("perf_panel")
                .resizable(true)
                .default_height(200.0)
                .show(ctx, |ui| {
                    self.render_perf_panel(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Force save settings on exit
        if self.settings_dirty {
            self.settings.save();
        }
    }
}

fn render_summary_table(ui: &mut egui::Ui, metrics: &FrameMetrics) {
    use egui_extras::{Column, TableBuilder};

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::remainder())
        .header(18.0, |mut header| {
            header.col(|ui| {
                ui.strong("Metric");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
        })
        .body(|mut body| {
            let rows: [(&str, String); 5] = [
                ("FPS", format!("{:.1}", metrics.fps())),
                ("Average", format!("{:.2} ms", metrics.average_ms())),
                ("Worst", format!("{:.2} ms", metrics.worst_ms())),
                ("Latest", format!("{:.2} ms", metrics.latest_ms())),
                ("Long frames", metrics.long_frame_count().to_string()),
            ];
            for (name, value) in rows {
                body.row(16.0, |mut row| {
                    row.col(|ui| {
                        ui.label(name);
                    });
                    row.col(|ui| {
                        ui.label(value);
                    });
                });
            }
        });
}

fn render_sample_row(ui: &mut egui::Ui, index: usize, sample: &FrameSample) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), SAMPLE_ROW_HEIGHT),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);
    let font = egui::FontId::monospace(11.0);
    let color = if sample.is_long() {
        theme::accent::RED
    } else {
        theme::text::MUTED
    };
    painter.text(
        rect.left_center(),
        egui::Align2::LEFT_CENTER,
        format!("#{}", index),
        font.clone(),
        theme::text::SECONDARY,
    );
    painter.text(
        rect.left_center() + egui::vec2(70.0, 0.0),
        egui::Align2::LEFT_CENTER,
        format!("{:7.2} ms", sample.ms),
        font.clone(),
        color,
    );
    painter.text(
        rect.left_center() + egui::vec2(170.0, 0.0),
        egui::Align2::LEFT_CENTER,
        format!("t+{:.1}s", sample.at),
        font,
        theme::text::MUTED,
    );
}

/// Last section whose recorded top sits above the probe line.
pub(crate) fn section_in_view(tops: &[(Section, f32)], probe: f32) -> Section {
    let mut current = Section::Home;
    for &(section, top) in tops {
        if top <= probe {
            current = section;
        } else {
            break;
        }
    }
    current
}

/// The hero's scroll hint stays while the page is within half a viewport
/// of the top.
pub(crate) fn scroll_indicator_visible(scroll_offset: f32, viewport_height: f32) -> bool {
    scroll_offset < viewport_height * 0.5
}
