//! Windowed rendering for long fixed-extent lists.
//!
//! Only the rows intersecting the scroll window (plus overscan) are laid
//! out; spacers stand in for everything else so scrollbar proportions and
//! absolute row positions are preserved.

use egui::{Rect, ScrollArea, Ui};

/// Extra rows rendered on each side of the strictly visible range.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Layout inputs for the visible-range computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowParams {
    /// Uniform row height in points. Must be positive.
    pub item_extent: f32,
    /// Height of the visible scroll window in points.
    pub viewport_extent: f32,
    /// Extra rows on each side to hide pop-in during fast scrolling.
    pub overscan: usize,
}

/// Inclusive range of row indices to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    pub start: usize,
    pub end: usize,
}

impl WindowRange {
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Height of the rows hidden above the range. Rendering shifts the
    /// visible rows down by exactly this much so absolute positions hold.
    pub fn leading_offset(&self, item_extent: f32) -> f32 {
        self.start as f32 * item_extent
    }
}

/// Total virtual height of the list, independent of scroll position.
pub fn total_extent(len: usize, item_extent: f32) -> f32 {
    len as f32 * item_extent
}

/// Row range intersecting the scroll window, padded by overscan.
/// Returns `None` for an empty sequence.
pub fn visible_range(scroll_offset: f32, len: usize, params: WindowParams) -> Option<WindowRange> {
    if len == 0 {
        return None;
    }
    let item = params.item_extent.max(f32::EPSILON);
    let first = (scroll_offset / item).floor().max(0.0) as usize;
    let start = first.saturating_sub(params.overscan);
    let visible = ((params.viewport_extent / item).ceil() as usize).max(1);
    let end = (start + visible + 2 * params.overscan).min(len - 1);
    Some(WindowRange { start, end })
}

/// Caches the last computed range so unchanged scroll positions skip the
/// math. egui already bounds recomputation to once per painted frame; this
/// skips repeated frames at the same offset.
#[derive(Debug, Default)]
pub struct WindowState {
    key: Option<(f32, usize, WindowParams)>,
    range: Option<WindowRange>,
}

impl WindowState {
    pub fn range_for(
        &mut self,
        scroll_offset: f32,
        len: usize,
        params: WindowParams,
    ) -> Option<WindowRange> {
        let key = Some((scroll_offset, len, params));
        if self.key != key {
            self.key = key;
            self.range = visible_range(scroll_offset, len, params);
        }
        self.range
    }
}

/// Render `items` windowed inside a vertical scroll area.
///
/// Each row must paint itself at exactly `item_extent` tall (allocate the
/// rect up front, as the callers here do); `render_row` receives the
/// absolute index into `items`.
pub fn windowed_list<T>(
    ui: &mut Ui,
    id_salt: &str,
    items: &[T],
    item_extent: f32,
    overscan: usize,
    state: &mut WindowState,
    mut render_row: impl FnMut(&mut Ui, usize, &T),
) {
    let total_height = total_extent(items.len(), item_extent);

    ScrollArea::vertical()
        .id_salt(id_salt)
        .auto_shrink([false, false])
        .show_viewport(ui, |ui, viewport: Rect| {
            // Spacer arithmetic assumes rows sit flush against each other.
            ui.spacing_mut().item_spacing.y = 0.0;
            ui.set_min_height(total_height);

            let params = WindowParams {
                item_extent,
                viewport_extent: viewport.height(),
                overscan,
            };
            let Some(range) = state.range_for(viewport.min.y, items.len(), params) else {
                return;
            };

            if range.start > 0 {
                ui.add_space(range.leading_offset(item_extent));
            }
            for index in range.start..=range.end {
                render_row(ui, index, &items[index]);
            }
            let trailing = items.len() - 1 - range.end;
            if trailing > 0 {
                ui.add_space(trailing as f32 * item_extent);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(item: f32, viewport: f32, overscan: usize) -> WindowParams {
        WindowParams {
            item_extent: item,
            viewport_extent: viewport,
            overscan,
        }
    }

    #[test]
    fn empty_sequence_renders_nothing() {
        assert_eq!(visible_range(0.0, 0, params(50.0, 400.0, 5)), None);
        assert_eq!(total_extent(0, 50.0), 0.0);
    }

    #[test]
    fn mid_scroll_window() {
        // 1000 rows of 50 in a 400 viewport, scrolled to 2500.
        let range = visible_range(2500.0, 1000, params(50.0, 400.0, 5)).unwrap();
        assert_eq!(range, WindowRange { start: 45, end: 63 });
        assert_eq!(range.count(), 19);
        assert_eq!(range.leading_offset(50.0), 2250.0);
    }

    #[test]
    fn range_stays_in_bounds_at_any_offset() {
        let p = params(50.0, 400.0, 5);
        for offset in [-500.0, 0.0, 13.0, 2500.0, 49_950.0, 1.0e6] {
            let range = visible_range(offset, 1000, p).unwrap();
            assert!(range.start <= range.end);
            assert!(range.end <= 999);
        }
    }

    #[test]
    fn covers_at_least_the_visible_rows() {
        let p = params(50.0, 400.0, 5);
        let needed = (400.0f32 / 50.0).ceil() as usize;
        for offset in [0.0, 777.0, 20_000.0] {
            let range = visible_range(offset, 1000, p).unwrap();
            assert!(range.count() >= needed);
        }
    }

    #[test]
    fn total_extent_is_independent_of_scroll() {
        assert_eq!(total_extent(1000, 50.0), 50_000.0);
        assert_eq!(total_extent(7, 48.0), 336.0);
    }

    #[test]
    fn viewport_smaller_than_one_row_still_renders_one() {
        let range = visible_range(0.0, 10, params(500.0, 400.0, 0)).unwrap();
        assert!(range.count() >= 1);
    }

    #[test]
    fn overscan_larger_than_sequence_is_clamped() {
        let range = visible_range(0.0, 3, params(50.0, 400.0, 100)).unwrap();
        assert_eq!(range, WindowRange { start: 0, end: 2 });
    }

    #[test]
    fn negative_offset_clamps_to_start() {
        let range = visible_range(-300.0, 100, params(50.0, 400.0, 5)).unwrap();
        assert_eq!(range.start, 0);
    }

    #[test]
    fn leading_offset_matches_hidden_rows() {
        let p = params(40.0, 300.0, 2);
        for offset in [0.0, 120.0, 4000.0] {
            let range = visible_range(offset, 500, p).unwrap();
            assert_eq!(range.leading_offset(40.0), range.start as f32 * 40.0);
        }
    }

    #[test]
    fn cache_recomputes_only_on_change() {
        let mut state = WindowState::default();
        let p = params(50.0, 400.0, 5);

        let a = state.range_for(2500.0, 1000, p);
        let b = state.range_for(2500.0, 1000, p);
        assert_eq!(a, b);

        let c = state.range_for(2600.0, 1000, p);
        assert_ne!(a, c);

        // A parameter change at the same offset also recomputes.
        let d = state.range_for(2600.0, 1000, params(50.0, 400.0, 0));
        assert_ne!(c, d);
    }
}
