use crate::frame::Frame;
use std::fmt;

/// A plain text listing of a frame's obstacles.
pub struct FrameReport<'a> {
    frame: &'a Frame,
    highlighted: Option<i64>,
}

impl<'a> FrameReport<'a> {
    pub fn new(frame: &'a Frame) -> Self {
        Self {
            frame,
            highlighted: None,
        }
    }

    /// Marks an obstacle as highlighted in the listing.
    pub fn highlight(mut self, id: Option<i64>) -> Self {
        self.highlighted = id;
        self
    }
}

impl fmt::Display for FrameReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timestamp: {}", self.frame.label())?;
        writeln!(f)?;
        writeln!(f, "Obstacles:")?;
        for obs in &self.frame.obstacles {
            let marker = if self.highlighted == Some(obs.id) { " *" } else { "" };
            writeln!(f)?;
            writeln!(f, "Obstacle ID: {}{}", obs.id, marker)?;
            writeln!(f, "Lower s: {:.3} -> {:.3}", obs.start_low_s, obs.end_low_s)?;
            writeln!(f, "Window t: {:.3} -> {:.3}", obs.start_t, obs.end_t)?;
            writeln!(f, "Upper s: {:.3} -> {:.3}", obs.start_up_s, obs.end_up_s)?;
            writeln!(f, "{}", "-".repeat(40))?;
        }
        if let Some(points) = &self.frame.trajectory {
            writeln!(f)?;
            writeln!(f, "Trajectory: {} points", points.len())?;
        }
        Ok(())
    }
}
