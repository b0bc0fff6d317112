use crate::obstacle::Obstacle;
use crate::util::Interval;
use serde::{Deserialize, Serialize};

/// One timestamped snapshot of the planner's obstacle deduction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    /// A human readable form of `timestamp`, if the producer supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_readable: Option<String>,
    /// The predicted obstacles, in log order.
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    /// The planned trajectory, in temporal order.
    #[serde(
        default,
        rename = "trajectories",
        skip_serializing_if = "Option::is_none"
    )]
    pub trajectory: Option<Vec<TrajectoryPoint>>,
}

/// A single sample of the planned trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Prediction time in s.
    pub t: f64,
    /// Longitudinal distance in m.
    pub s: f64,
}

impl Frame {
    /// Creates a frame with no trajectory.
    pub fn new(timestamp: f64, obstacles: Vec<Obstacle>) -> Self {
        Self {
            timestamp,
            timestamp_readable: None,
            obstacles,
            trajectory: None,
        }
    }

    /// Attaches a planned trajectory to the frame.
    pub fn with_trajectory(mut self, points: Vec<TrajectoryPoint>) -> Self {
        self.trajectory = Some(points);
        self
    }

    /// The label to show for this frame.
    pub fn label(&self) -> String {
        match &self.timestamp_readable {
            Some(readable) => readable.clone(),
            None => format!("{:.6}", self.timestamp),
        }
    }

    /// The trajectory samples, empty if the frame has none.
    pub fn trajectory_points(&self) -> &[TrajectoryPoint] {
        self.trajectory.as_deref().unwrap_or(&[])
    }

    /// Finds an obstacle by ID.
    pub fn obstacle(&self, id: i64) -> Option<&Obstacle> {
        self.obstacles.iter().find(|obs| obs.id == id)
    }

    /// The largest upper bound over all obstacles, or zero if there are none.
    pub fn max_s(&self) -> f64 {
        self.obstacles
            .iter()
            .map(Obstacle::max_s)
            .fold(0.0, f64::max)
    }

    /// The time span covered by the obstacles' windows and the trajectory.
    pub fn t_span(&self) -> Option<Interval<f64>> {
        let obstacle_ts = self.obstacles.iter().flat_map(|obs| [obs.start_t, obs.end_t]);
        let trajectory_ts = self.trajectory_points().iter().map(|p| p.t);
        obstacle_ts.chain(trajectory_ts).fold(None, |span, t| {
            Some(match span {
                Some(span) => span.expand_to(t),
                None => Interval::new(t, t),
            })
        })
    }
}
