use crate::math::{lerp, StPoint};
use crate::util::Interval;
use serde::{Deserialize, Serialize};

/// A predicted obstacle, as deduced by the planner for a single frame.
///
/// The obstacle occupies a quadrilateral envelope on the ST diagram:
/// over the prediction window `[start_t, end_t]` its lower and upper
/// longitudinal bounds move linearly from their start to their end values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// The planner's obstacle ID. Negative IDs are valid.
    pub id: i64,
    /// The start of the prediction window in s.
    pub start_t: f64,
    /// The end of the prediction window in s.
    pub end_t: f64,
    /// The lower longitudinal bound at `start_t`, in m.
    pub start_low_s: f64,
    /// The lower longitudinal bound at `end_t`, in m.
    pub end_low_s: f64,
    /// The upper longitudinal bound at `start_t`, in m.
    pub start_up_s: f64,
    /// The upper longitudinal bound at `end_t`, in m.
    pub end_up_s: f64,
}

impl Obstacle {
    /// The prediction window of the obstacle.
    pub fn window(&self) -> Interval<f64> {
        Interval::new(self.start_t, self.end_t)
    }

    /// Whether the prediction window has zero duration.
    ///
    /// A degenerate obstacle has no interior and never matches a hit test.
    pub fn is_degenerate(&self) -> bool {
        self.window().is_degenerate()
    }

    /// The ranking area used to resolve overlapping envelopes:
    /// window duration times the distance band at `start_t`.
    pub fn area(&self) -> f64 {
        (self.end_t - self.start_t) * (self.start_up_s - self.start_low_s)
    }

    /// The largest upper bound reached by the envelope.
    pub fn max_s(&self) -> f64 {
        f64::max(self.start_up_s, self.end_up_s)
    }

    /// Computes the `[lower, upper]` distance band at time `t`.
    ///
    /// Returns `None` when `t` lies outside the prediction window,
    /// or when the window is degenerate.
    pub fn bounds_at(&self, t: f64) -> Option<Interval<f64>> {
        let window = self.window();
        if window.is_degenerate() || !window.contains(t) {
            return None;
        }
        let r = window.inv_lerp(t);
        Some(Interval::new(
            lerp(self.start_low_s, self.end_low_s, r),
            lerp(self.start_up_s, self.end_up_s, r),
        ))
    }

    /// Returns true if the envelope contains the point, bounds included.
    pub fn contains(&self, point: StPoint) -> bool {
        self.bounds_at(point.x)
            .map_or(false, |band| band.contains(point.y))
    }
}
