//! `st-inspect` CLI: summarise a frame file, print frames, and hit test ST points.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use st_viewer::math::st;
use st_viewer::{hit_test, hits, FrameIndex, FrameReport, ViewerSession};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "st-inspect", about = "Inspect planner obstacle deductions on an ST diagram")]
struct Cli {
    /// Path to the frame file (a JSON array of frames)
    frames: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of frames, their time range and obstacle counts.
    Summary,
    /// Print the obstacles of the frame nearest to a time.
    Frame {
        #[command(flatten)]
        when: When,
        /// Also print the session state as JSON
        #[arg(long)]
        state: bool,
    },
    /// Find the obstacle under a point on the ST diagram of a frame.
    Hit {
        #[command(flatten)]
        when: When,
        /// Prediction time of the point, in s
        #[arg(long, allow_negative_numbers = true)]
        t: f64,
        /// Longitudinal distance of the point, in m
        #[arg(long, allow_negative_numbers = true)]
        s: f64,
        /// Print the selected obstacle as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Which frame to look at.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct When {
    /// Time in seconds since the Unix epoch
    #[arg(long)]
    at: Option<f64>,
    /// Scrub position, 0 for the first frame and 1 for the last
    #[arg(long)]
    fraction: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let index = FrameIndex::load(&cli.frames)?;
    let mut session = ViewerSession::new(index);

    match cli.command {
        Commands::Summary => print_summary(session.index()),
        Commands::Frame { when, state } => {
            seek(&mut session, &when);
            print!("{}", FrameReport::new(session.frame()));
            if state {
                session.frame_colors();
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            }
        }
        Commands::Hit { when, t, s, json } => {
            seek(&mut session, &when);
            run_hit(&mut session, t, s, json)?;
        }
    }

    Ok(())
}

fn seek(session: &mut ViewerSession, when: &When) {
    match (when.at, when.fraction) {
        (Some(t), _) => session.seek(t),
        (None, Some(fraction)) => session.seek_fraction(fraction),
        (None, None) => session.seek_fraction(0.0),
    };
}

fn print_summary(index: &FrameIndex) {
    let range = index.time_range();
    let frames = index.frames();
    let obstacles = frames.iter().map(|frame| frame.obstacles.len()).sum::<usize>();
    let ids = frames
        .iter()
        .flat_map(|frame| frame.obstacles.iter().map(|obs| obs.id))
        .unique()
        .count();
    let with_trajectory = frames.iter().filter(|frame| frame.trajectory.is_some()).count();

    println!("Frames: {}", index.len());
    println!("First: {}", frames[0].label());
    println!("Last: {}", frames[frames.len() - 1].label());
    println!("Duration: {:.3} s", range.length());
    println!("Obstacles: {} ({} distinct IDs)", obstacles, ids);
    println!("Frames with trajectory: {}", with_trajectory);
}

fn run_hit(session: &mut ViewerSession, t: f64, s: f64, json: bool) -> Result<()> {
    let point = st(t, s);
    let frame = session.frame().clone();
    let selected = hit_test(&frame.obstacles, point);

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    println!("Frame: {}", frame.label());
    match selected {
        Some(obs) => {
            let color = session.color_of(obs.id);
            println!("Selected obstacle {} ({}, area {:.3})", obs.id, color, obs.area());
            let band = obs.bounds_at(t).unwrap_or_default();
            println!("Band at t = {:.3}: {:.3} -> {:.3}", t, band.min, band.max);
        }
        None => println!("No obstacle at ({:.3}, {:.3})", t, s),
    }
    let candidates = hits(&frame.obstacles, point);
    if candidates.len() > 1 {
        println!(
            "Overlapping: {}",
            candidates.iter().map(|obs| obs.id).join(", ")
        );
    }
    Ok(())
}
