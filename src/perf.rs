//! Frame pacing instrumentation.
//!
//! Tracks a rolling FPS figure, keeps a bounded log of per-frame samples,
//! and flags frames that blow past the long-frame threshold.

use std::time::Instant;

use tracing::warn;

/// Frames slower than this are flagged and logged.
pub const LONG_FRAME_MS: f32 = 50.0;

/// Rolling window used for the FPS readout.
const FPS_WINDOW: usize = 60;

/// Retained frame samples; the oldest half is dropped on overflow.
const MAX_SAMPLES: usize = 2048;

/// One recorded frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    /// Seconds since instrumentation started.
    pub at: f64,
    /// Frame duration in milliseconds.
    pub ms: f32,
}

impl FrameSample {
    pub fn is_long(&self) -> bool {
        self.ms >= LONG_FRAME_MS
    }
}

pub struct FrameMetrics {
    started: Instant,
    last_frame: Instant,
    frame_times: Vec<f32>,
    fps: f32,
    samples: Vec<FrameSample>,
    long_frames: usize,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameMetrics {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            frame_times: Vec::with_capacity(FPS_WINDOW),
            fps: 0.0,
            samples: Vec::new(),
            long_frames: 0,
        }
    }

    /// Call once at the top of every frame.
    pub fn on_frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        let at = now.duration_since(self.started).as_secs_f64();
        self.record(dt, at);
    }

    fn record(&mut self, dt_secs: f32, at: f64) {
        self.frame_times.push(dt_secs);
        if self.frame_times.len() > FPS_WINDOW {
            self.frame_times.remove(0);
        }
        let avg: f32 = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        if avg > f32::EPSILON {
            self.fps = 1.0 / avg;
        }

        let sample = FrameSample {
            at,
            ms: dt_secs * 1000.0,
        };
        if sample.is_long() {
            self.long_frames += 1;
            warn!(frame_ms = sample.ms, "long frame");
        }
        if self.samples.len() >= MAX_SAMPLES {
            self.samples.drain(..MAX_SAMPLES / 2);
        }
        self.samples.push(sample);
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn average_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|s| s.ms).sum::<f32>() / self.samples.len() as f32
    }

    pub fn worst_ms(&self) -> f32 {
        self.samples.iter().map(|s| s.ms).fold(0.0, f32::max)
    }

    pub fn latest_ms(&self) -> f32 {
        self.samples.last().map_or(0.0, |s| s.ms)
    }

    pub fn long_frame_count(&self) -> usize {
        self.long_frames
    }

    pub fn samples(&self) -> &[FrameSample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steady(metrics: &mut FrameMetrics, count: usize, dt: f32) {
        for i in 0..count {
            metrics.record(dt, i as f64 * dt as f64);
        }
    }

    #[test]
    fn fps_is_reciprocal_of_mean_frame_time() {
        let mut metrics = FrameMetrics::new();
        steady(&mut metrics, 120, 1.0 / 60.0);
        assert!((metrics.fps() - 60.0).abs() < 0.5);
    }

    #[test]
    fn fps_window_never_exceeds_sixty_frames() {
        let mut metrics = FrameMetrics::new();
        steady(&mut metrics, 500, 0.016);
        assert_eq!(metrics.frame_times.len(), FPS_WINDOW);
    }

    #[test]
    fn long_frames_are_counted_and_flagged() {
        let mut metrics = FrameMetrics::new();
        metrics.record(0.016, 0.0);
        metrics.record(0.080, 0.016);
        metrics.record(0.016, 0.096);

        assert_eq!(metrics.long_frame_count(), 1);
        let long: Vec<_> = metrics.samples().iter().filter(|s| s.is_long()).collect();
        assert_eq!(long.len(), 1);
        assert!((long[0].ms - 80.0).abs() < 0.01);
    }

    #[test]
    fn sample_log_is_bounded() {
        let mut metrics = FrameMetrics::new();
        steady(&mut metrics, MAX_SAMPLES + 100, 0.016);
        assert!(metrics.samples().len() <= MAX_SAMPLES);
        assert!(!metrics.samples().is_empty());
    }

    #[test]
    fn aggregates_track_recorded_frames() {
        let mut metrics = FrameMetrics::new();
        metrics.record(0.010, 0.0);
        metrics.record(0.030, 0.010);

        assert!((metrics.average_ms() - 20.0).abs() < 0.01);
        assert!((metrics.worst_ms() - 30.0).abs() < 0.01);
        assert!((metrics.latest_ms() - 30.0).abs() < 0.01);
    }
}
