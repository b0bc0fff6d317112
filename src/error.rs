use std::path::PathBuf;

/// Errors raised while loading frames or querying a frame index.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A nearest-frame query was made against zero frames.
    #[error("frame index is empty")]
    EmptyIndex,
    /// The timestamp column and the frame column differ in length.
    #[error("{timestamps} timestamps supplied for {frames} frames")]
    LengthMismatch { timestamps: usize, frames: usize },
    /// The frame at `index` is earlier than the frame before it.
    #[error("frame {index} (t = {timestamp}) is earlier than its predecessor")]
    Unsorted { index: usize, timestamp: f64 },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed frame file {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
