//! Color palette and shared chrome for the portfolio.
//!
//! Accent colors mirror the web palette the content was designed around.
//! All colors should be sourced from here to keep the sections consistent.

use egui::epaint::{Mesh, Vertex, WHITE_UV};
use egui::{Color32, Context, Painter, Rect, Sense, Shape, Ui, Visuals};

/// Accent colors shared across sections
pub mod accent {
    use super::*;

    /// Primary blue
    pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);

    /// Purple, paired with blue in gradients
    pub const PURPLE: Color32 = Color32::from_rgb(147, 51, 234);

    /// Green for success states and expert-level skills
    pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);

    /// Yellow for the featured badge
    pub const YELLOW: Color32 = Color32::from_rgb(251, 191, 36);

    /// Red for errors
    pub const RED: Color32 = Color32::from_rgb(239, 68, 68);

    /// Cyan for links and secondary highlights
    pub const CYAN: Color32 = Color32::from_rgb(6, 182, 212);
}

/// Text colors at different emphasis levels
pub mod text {
    use super::*;

    /// Primary text - high contrast
    pub const PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);

    /// Secondary text - medium contrast
    pub const SECONDARY: Color32 = Color32::from_rgb(180, 180, 190);

    /// Muted text - low contrast for less important info
    pub const MUTED: Color32 = Color32::from_rgb(120, 125, 135);
}

/// Skeleton loading placeholder colors
pub mod skeleton {
    use super::*;

    /// Base skeleton background (dark theme)
    pub const BASE: Color32 = Color32::from_rgb(35, 38, 48);

    /// Animated shimmer highlight (dark theme)
    pub const SHIMMER: Color32 = Color32::from_rgb(50, 53, 63);

    /// Base skeleton background (light theme)
    pub const BASE_LIGHT: Color32 = Color32::from_rgb(229, 231, 235);

    /// Animated shimmer highlight (light theme)
    pub const SHIMMER_LIGHT: Color32 = Color32::from_rgb(209, 213, 219);
}

/// Apply the light or dark theme for this frame.
pub fn apply(ctx: &Context, dark: bool) {
    let mut visuals = if dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    visuals.hyperlink_color = accent::BLUE;
    visuals.selection.bg_fill = accent::BLUE.gamma_multiply(0.4);
    ctx.set_visuals(visuals);
}

/// Shimmer fill for a loading placeholder. Keeps repainting while shown.
pub fn skeleton_paint(ui: &Ui, rect: Rect) {
    let time = ui.ctx().input(|i| i.time);
    let phase = ((time * 2.0).sin() * 0.5 + 0.5) as f32; // 0 to 1 oscillation
    let (base, shimmer) = if ui.visuals().dark_mode {
        (skeleton::BASE, skeleton::SHIMMER)
    } else {
        (skeleton::BASE_LIGHT, skeleton::SHIMMER_LIGHT)
    };
    ui.painter_at(rect)
        .rect_filled(rect, 4.0, lerp_color(base, shimmer, phase));
    ui.ctx().request_repaint(); // Keep animating
}

/// Create a skeleton rectangle for loading placeholders.
pub fn skeleton_rect(ui: &mut Ui, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::Vec2::new(width, height), Sense::hover());
    skeleton_paint(ui, rect);
}

/// Create a skeleton text line.
pub fn skeleton_text(ui: &mut Ui, width: f32) {
    skeleton_rect(ui, width, 14.0);
}

/// Create multiple skeleton lines (for paragraph placeholders).
pub fn skeleton_lines(ui: &mut Ui, count: usize, base_width: f32) {
    for i in 0..count {
        // Vary widths for visual interest
        let width_factor = match i % 3 {
            0 => 1.0,
            1 => 0.85,
            _ => 0.7,
        };
        skeleton_text(ui, base_width * width_factor);
        if i < count - 1 {
            ui.add_space(4.0);
        }
    }
}

/// Paint a whole-section placeholder into `rect`: a centered heading bar
/// plus a few paragraph lines.
pub fn skeleton_section(ui: &Ui, rect: Rect) {
    let heading = Rect::from_center_size(
        egui::pos2(rect.center().x, rect.top() + 64.0),
        egui::vec2(240.0, 28.0),
    );
    skeleton_paint(ui, heading);

    let mut y = rect.top() + 132.0;
    let mut i = 0usize;
    while y + 14.0 < rect.bottom() - 48.0 && i < 8 {
        let width_factor = match i % 3 {
            0 => 0.9,
            1 => 0.75,
            _ => 0.6,
        };
        let width = rect.width() * 0.6 * width_factor;
        let line = Rect::from_center_size(egui::pos2(rect.center().x, y), egui::vec2(width, 14.0));
        skeleton_paint(ui, line);
        y += 30.0;
        i += 1;
    }
}

/// Horizontal two-stop gradient fill.
pub fn paint_h_gradient(painter: &Painter, rect: Rect, left: Color32, right: Color32) {
    let mut mesh = Mesh::default();
    mesh.vertices.push(Vertex {
        pos: rect.left_top(),
        uv: WHITE_UV,
        color: left,
    });
    mesh.vertices.push(Vertex {
        pos: rect.right_top(),
        uv: WHITE_UV,
        color: right,
    });
    mesh.vertices.push(Vertex {
        pos: rect.left_bottom(),
        uv: WHITE_UV,
        color: left,
    });
    mesh.vertices.push(Vertex {
        pos: rect.right_bottom(),
        uv: WHITE_UV,
        color: right,
    });
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(Shape::mesh(mesh));
}

/// Vertical two-stop gradient fill.
pub fn paint_v_gradient(painter: &Painter, rect: Rect, top: Color32, bottom: Color32) {
    let mut mesh = Mesh::default();
    mesh.vertices.push(Vertex {
        pos: rect.left_top(),
        uv: WHITE_UV,
        color: top,
    });
    mesh.vertices.push(Vertex {
        pos: rect.right_top(),
        uv: WHITE_UV,
        color: top,
    });
    mesh.vertices.push(Vertex {
        pos: rect.left_bottom(),
        uv: WHITE_UV,
        color: bottom,
    });
    mesh.vertices.push(Vertex {
        pos: rect.right_bottom(),
        uv: WHITE_UV,
        color: bottom,
    });
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(Shape::mesh(mesh));
}

/// The blue-to-purple underline bar used below section headings.
pub fn gradient_bar(ui: &mut Ui, width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    paint_h_gradient(ui.painter(), rect, accent::BLUE, accent::PURPLE);
}

/// Centered section heading with an accented second word and underline bar.
pub fn section_heading(ui: &mut Ui, plain: &str, accented: &str) {
    use egui::text::{LayoutJob, TextFormat};
    use egui::FontId;

    let mut job = LayoutJob::default();
    job.append(
        plain,
        0.0,
        TextFormat {
            font_id: FontId::proportional(32.0),
            color: ui.visuals().strong_text_color(),
            ..Default::default()
        },
    );
    job.append(
        accented,
        0.0,
        TextFormat {
            font_id: FontId::proportional(32.0),
            color: accent::PURPLE,
            ..Default::default()
        },
    );

    ui.vertical_centered(|ui| {
        ui.label(job);
        ui.add_space(10.0);
        gradient_bar(ui, 96.0, 4.0);
    });
}

/// Linear interpolation between two colors.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    Color32::from_rgb(
        lerp_u8(a.r(), b.r(), t),
        lerp_u8(a.g(), b.g(), t),
        lerp_u8(a.b(), b.b(), t),
    )
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let result = a as f32 + (b as f32 - a as f32) * t;
    result.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_color_hits_endpoints() {
        assert_eq!(lerp_color(accent::BLUE, accent::PURPLE, 0.0), accent::BLUE);
        assert_eq!(lerp_color(accent::BLUE, accent::PURPLE, 1.0), accent::PURPLE);
    }

    #[test]
    fn lerp_color_midpoint_is_between() {
        let mid = lerp_color(Color32::BLACK, Color32::WHITE, 0.5);
        assert!(mid.r() > 0 && mid.r() < 255);
        assert_eq!(mid.r(), mid.g());
        assert_eq!(mid.g(), mid.b());
    }
}
