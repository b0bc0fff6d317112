use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::util::Interval;
use itertools::Itertools;

/// Returns the frame whose timestamp is closest to `query`.
///
/// `timestamps` must be ascending and correspond index-for-index to `frames`.
/// Queries before the first or after the last timestamp clamp to the first
/// or last frame. When the query is equally close to two neighbours,
/// the earlier frame is returned.
///
/// # Errors
/// * [Error::LengthMismatch] if the two slices differ in length.
/// * [Error::EmptyIndex] if there are no frames.
pub fn nearest_frame<'a>(timestamps: &[f64], frames: &'a [Frame], query: f64) -> Result<&'a Frame> {
    if timestamps.len() != frames.len() {
        return Err(Error::LengthMismatch {
            timestamps: timestamps.len(),
            frames: frames.len(),
        });
    }
    let idx = nearest_position(timestamps, query).ok_or(Error::EmptyIndex)?;
    Ok(&frames[idx])
}

/// Binary searches an ascending slice for the index nearest to `query`.
fn nearest_position(timestamps: &[f64], query: f64) -> Option<usize> {
    let len = timestamps.len();
    if len == 0 {
        return None;
    }
    // Leftmost insertion point
    let pos = timestamps.partition_point(|t| *t < query);
    let idx = match pos {
        0 => 0,
        pos if pos == len => len - 1,
        pos => {
            let before = (query - timestamps[pos - 1]).abs();
            let after = (timestamps[pos] - query).abs();
            if before <= after {
                pos - 1
            } else {
                pos
            }
        }
    };
    Some(idx)
}

/// An immutable, time-ordered collection of frames.
#[derive(Clone, Debug)]
pub struct FrameIndex {
    /// The timestamp of each frame, in ascending order.
    timestamps: Vec<f64>,
    /// The frames, matching `timestamps` index-for-index.
    frames: Vec<Frame>,
}

impl FrameIndex {
    /// Creates an index over frames that are already in ascending time order.
    ///
    /// The frames are validated but never reordered.
    pub fn new(frames: Vec<Frame>) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::EmptyIndex);
        }
        let unsorted = frames
            .iter()
            .tuple_windows()
            .position(|(prev, next)| !(next.timestamp >= prev.timestamp));
        if let Some(idx) = unsorted {
            return Err(Error::Unsorted {
                index: idx + 1,
                timestamp: frames[idx + 1].timestamp,
            });
        }
        let timestamps = frames.iter().map(|frame| frame.timestamp).collect();
        Ok(Self { timestamps, frames })
    }

    /// The number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; an index holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frames in time order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Gets a frame by position.
    pub fn get(&self, idx: usize) -> Option<&Frame> {
        self.frames.get(idx)
    }

    /// The time covered by the index, from the first to the last frame.
    pub fn time_range(&self) -> Interval<f64> {
        Interval::new(self.timestamps[0], self.timestamps[self.len() - 1])
    }

    /// The position of the frame nearest to `t`.
    pub fn nearest_index(&self, t: f64) -> usize {
        // Construction guarantees at least one frame
        nearest_position(&self.timestamps, t).unwrap_or(0)
    }

    /// The frame nearest to `t`.
    pub fn nearest(&self, t: f64) -> &Frame {
        let idx = self.nearest_index(t);
        log::trace!("nearest frame to {t}: #{idx}");
        &self.frames[idx]
    }
}
