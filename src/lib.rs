pub use cgmath;
pub use error::{Error, Result};
pub use frame::{Frame, TrajectoryPoint};
pub use hit::{hit_test, hits};
pub use index::{nearest_frame, FrameIndex};
pub use loader::{load_frames, read_frames};
pub use obstacle::Obstacle;
pub use report::FrameReport;
pub use session::{PlotExtent, Rgb, ViewerSession};
pub use util::Interval;

mod error;
mod frame;
mod hit;
mod index;
mod loader;
pub mod math;
mod obstacle;
mod report;
mod session;
mod util;
