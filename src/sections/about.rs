//! About section: portrait, bio, highlights.

use egui::{Frame, RichText, Ui};

use crate::content::{AboutContent, Personal};
use crate::media::LazyImage;
use crate::theme;
use crate::viewport::VisibilityObserver;

pub struct AboutState {
    pub gate: VisibilityObserver,
    portrait: LazyImage,
}

impl AboutState {
    pub fn new(personal: &Personal) -> Self {
        Self {
            gate: VisibilityObserver::default(),
            portrait: LazyImage::new("Portrait", personal.avatar)
                .with_fallback(personal.avatar_fallback),
        }
    }
}

pub fn render_about(ui: &mut Ui, about: &AboutContent, state: &mut AboutState, animate: bool) {
    ui.add_space(48.0);
    theme::section_heading(ui, "About ", "Me");
    ui.add_space(32.0);

    ui.columns(2, |columns| {
        columns[0].vertical_centered(|ui| {
            state.portrait.show(ui, egui::vec2(300.0, 360.0), animate);
        });

        let right = &mut columns[1];
        right.label(RichText::new(about.description).size(15.0));
        right.add_space(20.0);

        for highlight in about.highlights {
            Frame::group(right.style())
                .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                .show(right, |ui| {
                    ui.label(RichText::new(*highlight).size(13.0));
                });
            right.add_space(6.0);
        }
    });

    ui.add_space(48.0);
}
