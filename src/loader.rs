//! Reading frame files produced by the log converter.

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::index::FrameIndex;
use std::io::{BufReader, Read};
use std::path::Path;

/// Loads a JSON array of frames from a file.
///
/// The frames are returned in file order.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    let file = std::fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    let frames = read_frames(BufReader::new(file)).map_err(|source| Error::Json {
        path: path.to_owned(),
        source,
    })?;
    log::info!("loaded {} frames from {}", frames.len(), path.display());
    Ok(frames)
}

/// Parses a JSON array of frames and reports suspicious content.
pub fn read_frames(reader: impl Read) -> serde_json::Result<Vec<Frame>> {
    let frames: Vec<Frame> = serde_json::from_reader(reader)?;
    for frame in &frames {
        check_frame(frame);
    }
    Ok(frames)
}

fn check_frame(frame: &Frame) {
    if frame.obstacles.is_empty() {
        log::debug!("frame {} has no obstacles", frame.label());
    }
    for obs in frame.obstacles.iter().filter(|obs| obs.is_degenerate()) {
        log::warn!(
            "frame {}: obstacle {} has an empty prediction window [{}, {}] and cannot be selected",
            frame.label(),
            obs.id,
            obs.start_t,
            obs.end_t
        );
    }
}

impl FrameIndex {
    /// Loads and validates a frame file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::new(load_frames(path)?)
    }
}
