//! Visibility-gated image loading with fallback.
//!
//! Decoding starts only once the image's rect nears the viewport. The file
//! is read and decoded on a worker thread; until the pixels arrive a
//! shimmer placeholder is shown. A failed decode switches to the fallback
//! source once, then settles on an "unavailable" placeholder. Nothing in
//! here panics or propagates an error to the caller.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use egui::{Color32, ColorImage, Rect, Response, Sense, TextureHandle, TextureOptions, Ui, Vec2};
use tracing::warn;

use crate::theme;
use crate::viewport::VisibilityObserver;

/// Seconds of fade-in once the texture is ready.
const FADE_SECS: f64 = 0.3;

/// Decoded RGBA pixels, produced off the UI thread.
struct DecodedImage {
    size: [usize; 2],
    rgba: Vec<u8>,
}

enum Stage {
    /// Waiting for the region to near the viewport.
    Pending,
    /// A worker thread is decoding; the result arrives over the channel.
    Decoding(Receiver<Result<DecodedImage, String>>),
    /// Uploaded and ready to paint. `since` drives the fade-in.
    Ready {
        texture: TextureHandle,
        since: Option<f64>,
    },
    /// Primary and fallback both failed; paint a placeholder.
    Unavailable,
}

pub struct LazyImage {
    /// Texture debug name, also shown in the unavailable placeholder.
    label: String,
    source: PathBuf,
    fallback: Option<PathBuf>,
    using_fallback: bool,
    observer: VisibilityObserver,
    stage: Stage,
}

impl LazyImage {
    pub fn new(label: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            fallback: None,
            using_fallback: false,
            observer: VisibilityObserver::default(),
            stage: Stage::Pending,
        }
    }

    /// Alternate source, tried once if the primary fails to decode.
    pub fn with_fallback(mut self, fallback: impl Into<PathBuf>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Skip visibility gating and start loading on the first render.
    pub fn priority(mut self) -> Self {
        self.observer = VisibilityObserver::already_active();
        self
    }

    /// Allocate `size` and paint the image, a shimmer placeholder, or the
    /// unavailable notice. Decoding starts the first frame the allocated
    /// rect nears the viewport.
    pub fn show(&mut self, ui: &mut Ui, size: Vec2, animate: bool) -> Response {
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if self.observer.observe(rect, ui.clip_rect()) {
            self.advance(ui);
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, animate);
        }
        response
    }

    /// Drive the load state machine for one frame.
    fn advance(&mut self, ui: &Ui) {
        match &self.stage {
            Stage::Pending => {
                self.stage = Stage::Decoding(spawn_decode(self.current_source().to_owned()));
                ui.ctx().request_repaint();
            }
            Stage::Decoding(rx) => match rx.try_recv() {
                Ok(Ok(decoded)) => {
                    let texture = ui.ctx().load_texture(
                        self.label.clone(),
                        ColorImage::from_rgba_unmultiplied(decoded.size, &decoded.rgba),
                        TextureOptions::LINEAR,
                    );
                    let since = Some(ui.ctx().input(|i| i.time));
                    self.stage = Stage::Ready { texture, since };
                }
                Ok(Err(err)) => {
                    warn!(source = %self.current_source().display(), %err, "image decode failed");
                    self.try_fallback();
                }
                Err(mpsc::TryRecvError::Empty) => {
                    // Still decoding, check again next frame.
                    ui.ctx().request_repaint();
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    warn!(source = %self.current_source().display(), "image decode worker vanished");
                    self.try_fallback();
                }
            },
            Stage::Ready { .. } | Stage::Unavailable => {}
        }
    }

    fn try_fallback(&mut self) {
        match (&self.fallback, self.using_fallback) {
            (Some(fallback), false) => {
                self.using_fallback = true;
                self.stage = Stage::Decoding(spawn_decode(fallback.clone()));
            }
            _ => self.stage = Stage::Unavailable,
        }
    }

    fn current_source(&self) -> &Path {
        if self.using_fallback {
            self.fallback.as_deref().unwrap_or(&self.source)
        } else {
            &self.source
        }
    }

    fn paint(&mut self, ui: &Ui, rect: Rect, animate: bool) {
        match &mut self.stage {
            Stage::Ready { texture, since } => {
                let alpha = match (*since, animate) {
                    (Some(start), true) => {
                        let t = ((ui.ctx().input(|i| i.time) - start) / FADE_SECS).clamp(0.0, 1.0);
                        if t < 1.0 {
                            ui.ctx().request_repaint();
                        } else {
                            *since = None;
                        }
                        t as f32
                    }
                    _ => 1.0,
                };
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter_at(rect)
                    .image(texture.id(), rect, uv, Color32::WHITE.gamma_multiply(alpha));
            }
            Stage::Pending | Stage::Decoding(_) => {
                theme::skeleton_paint(ui, rect);
            }
            Stage::Unavailable => {
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    format!("{} unavailable", self.label),
                    egui::FontId::proportional(12.0),
                    theme::text::MUTED,
                );
            }
        }
    }
}

fn spawn_decode(path: PathBuf) -> Receiver<Result<DecodedImage, String>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        // A dropped receiver means the widget lost interest; ignore the error.
        let _ = tx.send(decode_rgba(&path));
    });
    rx
}

/// Read and decode a file into straight RGBA. Runs off the UI thread.
fn decode_rgba(path: &Path) -> Result<DecodedImage, String> {
    let reader =
        image::ImageReader::open(path).map_err(|e| format!("open {}: {}", path.display(), e))?;
    let decoded = reader
        .decode()
        .map_err(|e| format!("decode {}: {}", path.display(), e))?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(DecodedImage {
        size,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_missing_file_is_an_error_not_a_panic() {
        let result = decode_rgba(Path::new("definitely/not/a/real/file.png"));
        assert!(result.is_err());
    }

    #[test]
    fn fallback_is_tried_once_then_unavailable() {
        let mut img = LazyImage::new("Portrait", "missing.jpg").with_fallback("placeholder.png");

        img.try_fallback();
        assert!(img.using_fallback);
        assert!(matches!(img.stage, Stage::Decoding(_)));
        assert_eq!(img.current_source(), Path::new("placeholder.png"));

        img.try_fallback();
        assert!(matches!(img.stage, Stage::Unavailable));
    }

    #[test]
    fn no_fallback_goes_straight_to_unavailable() {
        let mut img = LazyImage::new("Portrait", "missing.jpg");
        img.try_fallback();
        assert!(matches!(img.stage, Stage::Unavailable));
    }

    #[test]
    fn priority_skips_the_gate() {
        let img = LazyImage::new("Avatar", "avatar.jpg").priority();
        assert!(img.observer.is_active());
    }

    #[test]
    fn gated_image_starts_inactive() {
        let img = LazyImage::new("Card", "card.png");
        assert!(!img.observer.is_active());
        assert!(matches!(img.stage, Stage::Pending));
    }
}
