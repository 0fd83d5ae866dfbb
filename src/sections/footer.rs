//! Footer: copyright line and social links.

use chrono::Datelike;
use egui::{OpenUrl, RichText, Ui};

use crate::content::Personal;
use crate::theme;

pub fn render_footer(ui: &mut Ui, personal: &Personal) {
    ui.separator();
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let year = chrono::Local::now().year();
        ui.label(
            RichText::new(format!("© {} {}. All rights reserved.", year, personal.name))
                .small()
                .color(theme::text::MUTED),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.link(RichText::new("GitHub").small()).clicked() {
                ui.ctx().open_url(OpenUrl::new_tab(personal.github));
            }
            if ui.link(RichText::new("LinkedIn").small()).clicked() {
                ui.ctx().open_url(OpenUrl::new_tab(personal.linkedin));
            }
            if ui.link(RichText::new("Email").small()).clicked() {
                ui.ctx()
                    .open_url(OpenUrl::new_tab(format!("mailto:{}", personal.email)));
            }
        });
    });

    ui.add_space(16.0);
}
