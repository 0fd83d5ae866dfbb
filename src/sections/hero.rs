//! Hero section: animated gradient backdrop, typed subtitle, calls to
//! action.

use egui::{Align2, Button, Color32, FontId, Rect, RichText, Sense, Ui};
use rand::Rng;

use crate::content::Personal;
use crate::sections::Section;
use crate::theme;

/// Characters revealed per second by the typed subtitle.
const TYPE_CPS: f64 = 18.0;

/// Seconds a fully typed phrase stays on screen before the next one.
const TYPE_HOLD_SECS: f64 = 2.0;

const BLOB_COUNT: usize = 3;

/// A soft drifting highlight in the backdrop.
struct Blob {
    /// Anchor position as a fraction of the hero rect.
    anchor: egui::Vec2,
    radius: f32,
    phase: f32,
}

pub struct HeroState {
    blobs: Vec<Blob>,
}

impl HeroState {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let blobs = (0..BLOB_COUNT)
            .map(|_| Blob {
                anchor: egui::vec2(rng.gen_range(0.12..0.88), rng.gen_range(0.15..0.85)),
                radius: rng.gen_range(60.0..130.0),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
            })
            .collect();
        Self { blobs }
    }
}

impl Default for HeroState {
    fn default() -> Self {
        Self::new()
    }
}

/// Which frame of the typing cycle to show: (phrase index, chars shown).
pub(crate) fn type_frame(phrases: &[&str], t: f64, cps: f64, hold: f64) -> (usize, usize) {
    if phrases.is_empty() || cps <= 0.0 {
        return (0, 0);
    }
    let durations: Vec<(usize, f64)> = phrases
        .iter()
        .map(|p| {
            let chars = p.chars().count();
            (chars, chars as f64 / cps + hold)
        })
        .collect();
    let cycle: f64 = durations.iter().map(|(_, d)| d).sum();
    if cycle <= 0.0 {
        return (0, 0);
    }

    let mut t = t.rem_euclid(cycle);
    for (i, (chars, duration)) in durations.iter().enumerate() {
        if t < *duration {
            let shown = ((t * cps).floor() as usize).min(*chars);
            return (i, shown);
        }
        t -= duration;
    }
    (phrases.len() - 1, durations.last().map(|(c, _)| *c).unwrap_or(0))
}

/// Render the hero. Returns a section to scroll to when a CTA is clicked.
pub fn render_hero(
    ui: &mut Ui,
    personal: &Personal,
    phrases: &[&str],
    state: &mut HeroState,
    animate: bool,
    show_scroll_hint: bool,
) -> Option<Section> {
    let mut goto = None;

    let height = (ui.ctx().screen_rect().height() - 120.0).max(560.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return None;
    }
    let painter = ui.painter_at(rect);
    let time = ui.ctx().input(|i| i.time);
    let t = if animate { time } else { 0.0 };

    // Slowly breathing two-stop gradient backdrop
    let wave = ((t * 0.3).sin() * 0.5 + 0.5) as f32;
    let top = theme::lerp_color(theme::accent::BLUE, theme::accent::PURPLE, wave);
    let bottom = theme::lerp_color(theme::accent::PURPLE, theme::accent::CYAN, 1.0 - wave);
    theme::paint_v_gradient(&painter, rect, top, bottom);

    // Drifting highlights
    for blob in &state.blobs {
        let drift = if animate {
            egui::vec2(
                ((time as f32) * 0.4 + blob.phase).sin() * 18.0,
                ((time as f32) * 0.3 + blob.phase).cos() * 14.0,
            )
        } else {
            egui::Vec2::ZERO
        };
        let center = rect.min
            + egui::vec2(blob.anchor.x * rect.width(), blob.anchor.y * rect.height())
            + drift;
        painter.circle_filled(center, blob.radius, Color32::from_rgba_unmultiplied(255, 255, 255, 16));
    }

    // Name
    let center_x = rect.center().x;
    painter.text(
        egui::pos2(center_x, rect.top() + height * 0.32),
        Align2::CENTER_CENTER,
        personal.name,
        FontId::proportional(46.0),
        Color32::WHITE,
    );

    // Typed subtitle with a trailing cursor while mid-phrase
    let subtitle = if animate {
        let (phrase_idx, shown) = type_frame(phrases, time, TYPE_CPS, TYPE_HOLD_SECS);
        let phrase = phrases.get(phrase_idx).copied().unwrap_or_default();
        let typed: String = phrase.chars().take(shown).collect();
        if shown < phrase.chars().count() {
            format!("{}▌", typed)
        } else {
            typed
        }
    } else {
        phrases.first().copied().unwrap_or(personal.title).to_string()
    };
    painter.text(
        egui::pos2(center_x, rect.top() + height * 0.42),
        Align2::CENTER_CENTER,
        subtitle,
        FontId::proportional(22.0),
        Color32::from_rgba_unmultiplied(255, 255, 255, 230),
    );

    // Tagline and location
    painter.text(
        egui::pos2(center_x, rect.top() + height * 0.50),
        Align2::CENTER_CENTER,
        personal.tagline,
        FontId::proportional(16.0),
        Color32::from_rgba_unmultiplied(255, 255, 255, 200),
    );
    painter.text(
        egui::pos2(center_x, rect.top() + height * 0.56),
        Align2::CENTER_CENTER,
        format!("📍 {}   ✉ {}", personal.location, personal.email),
        FontId::proportional(13.0),
        Color32::from_rgba_unmultiplied(255, 255, 255, 170),
    );

    // Calls to action
    let button_size = egui::vec2(170.0, 40.0);
    let button_y = rect.top() + height * 0.66;
    let gap = 14.0;
    let work_rect = Rect::from_center_size(
        egui::pos2(center_x - button_size.x / 2.0 - gap / 2.0, button_y),
        button_size,
    );
    let contact_rect = Rect::from_center_size(
        egui::pos2(center_x + button_size.x / 2.0 + gap / 2.0, button_y),
        button_size,
    );

    let work = ui.put(
        work_rect,
        Button::new(RichText::new("View My Work").strong().color(Color32::WHITE))
            .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 40)),
    );
    if work.clicked() {
        goto = Some(Section::Projects);
    }
    let contact = ui.put(
        contact_rect,
        Button::new(RichText::new("Get In Touch").strong().color(Color32::WHITE))
            .fill(Color32::from_rgba_unmultiplied(0, 0, 0, 60)),
    );
    if contact.clicked() {
        goto = Some(Section::Contact);
    }

    // Scroll hint, bobbing until the page moves
    if show_scroll_hint {
        let bob = if animate { ((time * 2.0).sin() * 5.0) as f32 } else { 0.0 };
        painter.text(
            egui::pos2(center_x, rect.bottom() - 28.0 + bob),
            Align2::CENTER_CENTER,
            "⌄  scroll",
            FontId::proportional(14.0),
            Color32::from_rgba_unmultiplied(255, 255, 255, 180),
        );
    }

    if animate {
        ui.ctx().request_repaint();
    }

    goto
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["abcde", "xyz"];

    #[test]
    fn typing_starts_empty() {
        assert_eq!(type_frame(PHRASES, 0.0, 10.0, 1.0), (0, 0));
    }

    #[test]
    fn typing_reveals_monotonically_within_a_phrase() {
        let mut last = 0;
        for step in 0..5 {
            let (idx, shown) = type_frame(PHRASES, step as f64 * 0.1, 10.0, 1.0);
            assert_eq!(idx, 0);
            assert!(shown >= last);
            last = shown;
        }
    }

    #[test]
    fn holds_the_full_phrase_before_advancing() {
        // "abcde" at 10 cps types in 0.5s and holds until 1.5s.
        let (idx, shown) = type_frame(PHRASES, 1.0, 10.0, 1.0);
        assert_eq!((idx, shown), (0, 5));
    }

    #[test]
    fn advances_to_the_next_phrase() {
        // Past the first phrase's 1.5s slot.
        let (idx, _) = type_frame(PHRASES, 1.6, 10.0, 1.0);
        assert_eq!(idx, 1);
    }

    #[test]
    fn wraps_around_the_cycle() {
        // Cycle = 1.5 + 1.3 = 2.8 seconds.
        let a = type_frame(PHRASES, 0.2, 10.0, 1.0);
        let b = type_frame(PHRASES, 0.2 + 2.8, 10.0, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_input_is_harmless() {
        assert_eq!(type_frame(&[], 3.0, 10.0, 1.0), (0, 0));
        assert_eq!(type_frame(&[""], 3.0, 10.0, 0.0), (0, 0));
    }
}
