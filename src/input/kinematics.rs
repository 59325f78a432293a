//! Instantaneous pointer speed between consecutive samples.

use super::events::PointerSample;
use crate::draw::Point;

/// Last sample of the active stroke and the speed measured against it.
///
/// Speed is raw feedback, not a control signal: no smoothing is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicState {
    last_position: Option<Point>,
    last_timestamp_ms: Option<u64>,
    speed_px_per_sec: f64,
}

impl KinematicState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a sample and returns the current speed in pixels per second.
    ///
    /// The first sample of a stroke only anchors the tracker. A non-positive
    /// elapsed time keeps the previous speed.
    pub fn on_sample(&mut self, sample: &PointerSample) -> f64 {
        let position = sample.position();

        if let (Some(last), Some(last_ms)) = (self.last_position, self.last_timestamp_ms) {
            let distance = last.distance_to(position);
            let dt = (sample.timestamp_ms as f64 - last_ms as f64) / 1000.0;
            if dt > 0.0 {
                self.speed_px_per_sec = distance / dt;
            } else {
                log::trace!("Skipping speed update: non-positive elapsed time {dt}s");
            }
        }

        self.last_position = Some(position);
        self.last_timestamp_ms = Some(sample.timestamp_ms);
        self.speed_px_per_sec
    }

    /// Forgets the anchor and zeroes the speed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn speed(&self) -> f64 {
        self.speed_px_per_sec
    }

    pub fn last_position(&self) -> Option<Point> {
        self.last_position
    }

    pub fn last_timestamp_ms(&self) -> Option<u64> {
        self.last_timestamp_ms
    }
}
