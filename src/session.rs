use crate::frame::Frame;
use crate::hit::hit_test;
use crate::index::FrameIndex;
use crate::math::StPoint;
use crate::util::Interval;
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

/// Scrub positions are quantised to this many steps across the time range.
pub const SCRUB_STEPS: f64 = 1_000_000.0;

/// Headroom added above the tallest envelope when sizing the distance axis.
const PLOT_MARGIN: f64 = 1.1;

/// Obstacle colors, assigned to IDs in order of first appearance.
const PALETTE: [Rgb; 20] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xae, 0xc7, 0xe8),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0xff, 0xbb, 0x78),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0x98, 0xdf, 0x8a),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0xff, 0x98, 0x96),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0xc5, 0xb0, 0xd5),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xc4, 0x9c, 0x94),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0xf7, 0xb6, 0xd2),
    Rgb(0x7f, 0x7f, 0x7f),
    Rgb(0xc7, 0xc7, 0xc7),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0xdb, 0xdb, 0x8d),
    Rgb(0x17, 0xbe, 0xcf),
    Rgb(0x9e, 0xda, 0xe5),
];

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The axis extents needed to draw a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotExtent {
    /// Prediction time axis, in s.
    pub t: Interval<f64>,
    /// Longitudinal distance axis, in m.
    pub s: Interval<f64>,
}

/// The state of one interactive viewing session over a set of frames.
///
/// The frame index itself is never mutated; the session only tracks
/// what the user is looking at.
pub struct ViewerSession {
    /// The frames being viewed.
    index: FrameIndex,
    /// The time most recently sought to, if any.
    time: Option<f64>,
    /// The position of the current frame in the index.
    frame: usize,
    /// The ID of the highlighted obstacle.
    highlighted: Option<i64>,
    /// The palette slot assigned to each obstacle ID seen so far.
    colors: HashMap<i64, usize>,
}

impl ViewerSession {
    /// Creates a session positioned on the first frame.
    pub fn new(index: FrameIndex) -> Self {
        Self {
            index,
            time: None,
            frame: 0,
            highlighted: None,
            colors: HashMap::new(),
        }
    }

    /// The frames being viewed.
    pub fn index(&self) -> &FrameIndex {
        &self.index
    }

    /// The time most recently sought to.
    pub fn time(&self) -> Option<f64> {
        self.time
    }

    /// The frame currently displayed.
    pub fn frame(&self) -> &Frame {
        &self.index.frames()[self.frame]
    }

    /// The ID of the highlighted obstacle, if there is one.
    pub fn highlighted(&self) -> Option<i64> {
        self.highlighted
    }

    /// Moves to the frame nearest to `t`.
    /// Any highlight is cleared if the time changes.
    pub fn seek(&mut self, t: f64) -> &Frame {
        if self.time != Some(t) {
            self.highlighted = None;
        }
        self.time = Some(t);
        self.frame = self.index.nearest_index(t);
        log::debug!("seek to {t}: frame #{}", self.frame);
        self.frame()
    }

    /// Moves to a scrub position, where 0 is the first frame's time
    /// and 1 is the last frame's. Out of range positions are clamped.
    pub fn seek_fraction(&mut self, fraction: f64) -> &Frame {
        let t = self.scrub_time(fraction);
        self.seek(t)
    }

    /// Converts a scrub position into a time.
    pub fn scrub_time(&self, fraction: f64) -> f64 {
        let fraction = Interval::new(0.0, 1.0).clamp(fraction);
        let step = (fraction * SCRUB_STEPS).round() / SCRUB_STEPS;
        self.index.time_range().lerp(step)
    }

    /// Handles a click on the ST diagram of the current frame.
    ///
    /// Clicking an obstacle highlights it, clicking the highlighted obstacle
    /// again clears the highlight, and clicking empty space changes nothing.
    /// Returns the resulting highlight.
    pub fn click(&mut self, point: StPoint) -> Option<i64> {
        let hit = hit_test(&self.frame().obstacles, point).map(|obs| obs.id);
        if let Some(id) = hit {
            self.highlighted = match self.highlighted {
                Some(current) if current == id => None,
                _ => Some(id),
            };
        }
        self.highlighted
    }

    /// Gets the color of an obstacle, assigning the next palette
    /// color if this ID has not been seen in this session.
    pub fn color_of(&mut self, id: i64) -> Rgb {
        let next = self.colors.len();
        let slot = *self.colors.entry(id).or_insert(next);
        PALETTE[slot % PALETTE.len()]
    }

    /// The colors of the current frame's obstacles, in frame order.
    pub fn frame_colors(&mut self) -> Vec<(i64, Rgb)> {
        let ids: Vec<i64> = self.frame().obstacles.iter().map(|obs| obs.id).collect();
        ids.into_iter().map(|id| (id, self.color_of(id))).collect()
    }

    /// The axis extents for the current frame.
    pub fn plot_extent(&self) -> PlotExtent {
        let frame = self.frame();
        PlotExtent {
            t: frame.t_span().unwrap_or_default(),
            s: Interval::new(0.0, frame.max_s() * PLOT_MARGIN),
        }
    }

    /// A JSON description of the session state, for debugging.
    pub fn snapshot(&self) -> serde_json::Value {
        let mut colors: Vec<_> = self
            .colors
            .iter()
            .map(|(id, slot)| (*id, *slot, PALETTE[slot % PALETTE.len()]))
            .collect();
        colors.sort_by_key(|(_, slot, _)| *slot);
        json!({
            "time": self.time,
            "frame": self.frame,
            "timestamp": self.frame().timestamp,
            "highlighted": self.highlighted,
            "colors": colors
                .into_iter()
                .map(|(id, _, color)| json!({ "id": id, "color": color }))
                .collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::st;
    use crate::obstacle::Obstacle;
    use assert_approx_eq::assert_approx_eq;

    fn obstacle(id: i64, end_t: f64, start_up_s: f64) -> Obstacle {
        Obstacle {
            id,
            start_t: 0.0,
            end_t,
            start_low_s: 0.0,
            end_low_s: 0.0,
            start_up_s,
            end_up_s: start_up_s + 10.0,
        }
    }

    fn session() -> ViewerSession {
        let frames = vec![
            Frame::new(10.0, vec![obstacle(1, 10.0, 10.0), obstacle(2, 5.0, 10.0)]),
            Frame::new(20.0, vec![obstacle(3, 8.0, 40.0)]),
            Frame::new(30.0, vec![]),
        ];
        ViewerSession::new(FrameIndex::new(frames).unwrap())
    }

    #[test]
    fn seek_nearest() {
        let mut session = session();
        assert_eq!(session.frame().timestamp, 10.0);
        assert_eq!(session.seek(14.0).timestamp, 10.0);
        assert_eq!(session.seek(16.0).timestamp, 20.0);
        assert_eq!(session.seek(99.0).timestamp, 30.0);
        assert_eq!(session.time(), Some(99.0));
    }

    #[test]
    fn click_toggles_highlight() {
        let mut session = session();
        session.seek(10.0);
        assert_eq!(session.click(st(5.0, 10.0)), Some(2));
        assert_eq!(session.click(st(5.0, 10.0)), None);
        assert_eq!(session.click(st(8.0, 10.0)), Some(1));
        // Missing everything keeps the highlight
        assert_eq!(session.click(st(8.0, 500.0)), Some(1));
        // Switching directly to another obstacle
        assert_eq!(session.click(st(5.0, 10.0)), Some(2));
    }

    #[test]
    fn seeking_clears_highlight() {
        let mut session = session();
        session.seek(10.0);
        session.click(st(5.0, 10.0));
        session.seek(10.0);
        assert_eq!(session.highlighted(), Some(2));
        session.seek(11.0);
        assert_eq!(session.highlighted(), None);
    }

    #[test]
    fn scrub_positions() {
        let mut session = session();
        assert_approx_eq!(session.scrub_time(0.0), 10.0);
        assert_approx_eq!(session.scrub_time(1.0), 30.0);
        assert_approx_eq!(session.scrub_time(0.5), 20.0);
        assert_approx_eq!(session.scrub_time(-2.0), 10.0);
        assert_approx_eq!(session.scrub_time(7.0), 30.0);
        assert_approx_eq!(session.scrub_time(0.12345678), 12.46914);
        assert_eq!(session.seek_fraction(0.74).timestamp, 20.0);
        assert_eq!(session.seek_fraction(0.76).timestamp, 30.0);
    }

    #[test]
    fn colors_are_stable() {
        let mut session = session();
        let first = session.color_of(-5);
        let second = session.color_of(9);
        assert_ne!(first, second);
        assert_eq!(session.color_of(-5), first);
        assert_eq!(first.to_string(), "#1f77b4");
        assert_eq!(session.frame_colors(), vec![(1, PALETTE[2]), (2, PALETTE[3])]);
        for id in 100..140 {
            session.color_of(id);
        }
        assert_eq!(session.color_of(9), second);
    }

    #[test]
    fn extent_has_margin() {
        let mut session = session();
        session.seek(20.0);
        let extent = session.plot_extent();
        assert_approx_eq!(extent.s.max, 55.0);
        assert_eq!(extent.s.min, 0.0);
        assert_eq!(extent.t, Interval::new(0.0, 8.0));
        session.seek(30.0);
        assert_eq!(session.plot_extent().s, Interval::new(0.0, 0.0));
    }

    #[test]
    fn snapshot_reports_state() {
        let mut session = session();
        session.seek(10.0);
        session.click(st(5.0, 10.0));
        session.color_of(2);
        let snapshot = session.snapshot();
        assert_eq!(snapshot["highlighted"], 2);
        assert_eq!(snapshot["timestamp"], 10.0);
        assert_eq!(snapshot["colors"][0]["color"], "#1f77b4");
    }
}
