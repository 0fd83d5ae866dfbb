//! One-shot viewport visibility gating.
//!
//! Defers work (image decodes, section content) until a region scrolls
//! near the visible viewport, then stops observing that region entirely.

use egui::Rect;

/// Default proximity margin in points.
pub const DEFAULT_MARGIN: f32 = 50.0;

/// Default fraction of the region that must sit inside the expanded
/// viewport before the signal fires.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// A single in-flight observation: the intersection test parameters.
///
/// Owned by [`VisibilityObserver`] and dropped on the first threshold
/// crossing, so a long page with many gated regions stops paying for
/// regions that already activated.
#[derive(Debug, Clone)]
struct Observation {
    margin: f32,
    threshold: f32,
}

impl Observation {
    fn satisfied_by(&self, region: Rect, viewport: Rect) -> bool {
        let ratio = intersection_ratio(region, viewport, self.margin);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Fraction of `region` covered by `viewport` expanded by `margin` on all
/// sides. A zero-area region counts as fully covered when it touches the
/// expanded viewport at all.
pub fn intersection_ratio(region: Rect, viewport: Rect, margin: f32) -> f32 {
    let expanded = viewport.expand(margin);
    let area = region.area();
    if area <= 0.0 {
        return if expanded.intersects(region) { 1.0 } else { 0.0 };
    }
    let overlap = expanded.intersect(region);
    if overlap.width() <= 0.0 || overlap.height() <= 0.0 {
        return 0.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// A latch that flips from inactive to active at most once, the first time
/// its observed region nears the viewport.
///
/// Supply the region's rect every frame through [`observe`]; until then the
/// signal stays inactive, which is the expected state for regions that
/// never mount. Once active the observer does no further intersection
/// work.
///
/// [`observe`]: VisibilityObserver::observe
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    observation: Option<Observation>,
    active: bool,
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN, DEFAULT_THRESHOLD)
    }
}

impl VisibilityObserver {
    pub fn new(margin: f32, threshold: f32) -> Self {
        Self {
            observation: Some(Observation {
                margin,
                threshold: threshold.clamp(0.0, 1.0),
            }),
            active: false,
        }
    }

    /// An observer that never waits. Used for priority resources.
    pub fn already_active() -> Self {
        Self {
            observation: None,
            active: true,
        }
    }

    /// Supply this frame's region rect and test it against the viewport.
    /// Returns the (possibly just flipped) active signal.
    ///
    /// A viewport without finite bounds means the host cannot report
    /// intersections here (egui's clip rect is infinite outside a scroll
    /// region); the region is then treated as immediately visible.
    pub fn observe(&mut self, region: Rect, viewport: Rect) -> bool {
        if self.active {
            return true;
        }
        let Some(observation) = &self.observation else {
            // Released before ever being satisfied; the signal stays off.
            return false;
        };
        if !viewport_supported(viewport) || observation.satisfied_by(region, viewport) {
            self.activate_now();
        }
        self.active
    }

    /// Force the signal active and release the observation.
    pub fn activate_now(&mut self) {
        self.active = true;
        self.observation = None;
    }

    /// Cancel an unsatisfied observation. Idempotent. Once released
    /// without activating, the signal can never fire.
    pub fn release(&mut self) {
        self.observation = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

fn viewport_supported(viewport: Rect) -> bool {
    viewport.width().is_finite() && viewport.height().is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::from_min_max(pos2(x0, y0), pos2(x1, y1))
    }

    fn viewport() -> Rect {
        rect(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn ratio_is_one_when_fully_inside() {
        let region = rect(10.0, 10.0, 40.0, 40.0);
        assert_eq!(intersection_ratio(region, viewport(), 0.0), 1.0);
    }

    #[test]
    fn ratio_is_zero_when_far_below() {
        let region = rect(0.0, 500.0, 100.0, 600.0);
        assert_eq!(intersection_ratio(region, viewport(), 0.0), 0.0);
    }

    #[test]
    fn margin_extends_the_viewport() {
        // 40 points below the viewport edge, inside a 50 point margin.
        let region = rect(0.0, 140.0, 100.0, 180.0);
        assert_eq!(intersection_ratio(region, viewport(), 0.0), 0.0);
        assert!(intersection_ratio(region, viewport(), 50.0) > 0.0);
    }

    #[test]
    fn partial_overlap_reports_the_covered_fraction() {
        // Bottom 10 of 100 rows inside the viewport.
        let region = rect(0.0, 90.0, 100.0, 190.0);
        let ratio = intersection_ratio(region, viewport(), 0.0);
        assert!((ratio - 0.1).abs() < 1e-4);
    }

    #[test]
    fn zero_area_region_counts_when_touching() {
        let region = Rect::from_min_max(pos2(50.0, 50.0), pos2(50.0, 50.0));
        assert_eq!(intersection_ratio(region, viewport(), 0.0), 1.0);
        let far = Rect::from_min_max(pos2(50.0, 500.0), pos2(50.0, 500.0));
        assert_eq!(intersection_ratio(far, viewport(), 0.0), 0.0);
    }

    #[test]
    fn activates_at_most_once() {
        let mut observer = VisibilityObserver::default();
        assert!(!observer.is_active());
        assert!(observer.observe(rect(0.0, 0.0, 50.0, 50.0), viewport()));
        // Region scrolls far away again; the signal never reverts.
        assert!(observer.observe(rect(0.0, 5000.0, 50.0, 5050.0), viewport()));
        assert!(observer.is_active());
    }

    #[test]
    fn below_threshold_stays_inactive() {
        let mut observer = VisibilityObserver::new(0.0, 0.5);
        // Only 10% visible, threshold is 50%.
        assert!(!observer.observe(rect(0.0, 90.0, 100.0, 190.0), viewport()));
        // 60% visible crosses it.
        assert!(observer.observe(rect(0.0, 40.0, 100.0, 140.0), viewport()));
    }

    #[test]
    fn never_supplied_region_stays_inactive() {
        let observer = VisibilityObserver::default();
        assert!(!observer.is_active());
    }

    #[test]
    fn release_before_satisfaction_cancels_forever() {
        let mut observer = VisibilityObserver::default();
        observer.release();
        observer.release(); // double release is fine
        assert!(!observer.observe(rect(0.0, 0.0, 50.0, 50.0), viewport()));
        assert!(!observer.is_active());
    }

    #[test]
    fn release_after_activation_keeps_the_signal() {
        let mut observer = VisibilityObserver::default();
        observer.observe(rect(0.0, 0.0, 50.0, 50.0), viewport());
        observer.release();
        assert!(observer.is_active());
    }

    #[test]
    fn infinite_viewport_degrades_to_active() {
        let mut observer = VisibilityObserver::default();
        assert!(observer.observe(rect(0.0, 9000.0, 10.0, 9010.0), Rect::EVERYTHING));
    }

    #[test]
    fn already_active_skips_observation() {
        let observer = VisibilityObserver::already_active();
        assert!(observer.is_active());
    }
}
