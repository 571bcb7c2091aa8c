use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::Parser;
use fern::FormatCallback;
use game_core::{Config, Params};
use time::format_description::well_known::Iso8601;

use crate::host::{read_recording, Host, HostError, Recorder};

mod host;

#[derive(Parser)]
#[command(about = "Run a Pong match without a window", long_about = None)]
struct Cli {
    /// Court width, the window width of a windowed host.
    #[arg(long, default_value_t = Params::COURT_WIDTH)]
    width: f32,

    /// Court height, the window height of a windowed host.
    #[arg(long, default_value_t = Params::COURT_HEIGHT)]
    height: f32,

    /// Number of 60 Hz frames to simulate.
    #[arg(long, short, default_value = "3600")]
    frames: u64,

    /// Seed for the random touch generator.
    #[arg(long, short, default_value = "12345")]
    seed: u64,

    /// Chance per frame of a random drag in one of the paddle zones.
    #[arg(long, default_value = "0.2")]
    touch_rate: f64,

    /// Pace frames at 60 Hz instead of running flat out.
    #[arg(long)]
    realtime: bool,

    /// Write every frame to this file as length-prefixed postcard records.
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,

    /// Read a recording made with --record and print its last frame instead of playing.
    #[arg(long, value_name = "PATH", conflicts_with = "record")]
    replay: Option<PathBuf>,

    /// Maximum log level printed to stderr.
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    setup_logger(cli.log_level)
        .map_err(|e| eprintln!("Error while configuring logging : {e:?}"))?;
    match &cli.replay {
        Some(path) => replay(path).map_err(|e| log::error!("Replay failed : {e}")),
        None => run(&cli).map_err(|e| log::error!("Match aborted : {e}")),
    }
}

fn replay(path: &Path) -> Result<(), HostError> {
    let frames = read_recording(BufReader::new(File::open(path)?))?;
    log::info!("Read {} frames from {}", frames.len(), path.display());
    match frames.last() {
        Some(last) => println!(
            "frame {}: ball ({:.1}, {:.1}) paddles {:.1} / {:.1}, score {} - {}",
            last.frame,
            last.ball_x,
            last.ball_y,
            last.paddle_left_y,
            last.paddle_right_y,
            last.score_left,
            last.score_right
        ),
        None => println!("empty recording"),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), HostError> {
    let config = Config::with_court(cli.width, cli.height);
    let mut host = Host::new(config, cli.seed, cli.touch_rate)?;
    if let Some(path) = &cli.record {
        let file = BufWriter::new(File::create(path)?);
        host = host.with_sink(Box::new(Recorder::new(file)));
        log::info!("Recording frames to {}", path.display());
    }

    let frame_time = Duration::from_secs_f32(Params::FRAME_DT);
    for _ in 0..cli.frames {
        host.step()?;
        if cli.realtime {
            thread::sleep(frame_time);
        }
    }

    host.finish()?;

    let score = host.game.score();
    log::info!(
        "Finished after {} frames ({:.1}s)",
        host.game.time().frame,
        host.game.time().now
    );
    println!("{} - {}", score.left, score.right);
    Ok(())
}

/// Print log records up to `level` verbosity on stderr.
fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .level(level)
        .format(format_log)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

/// `[timestamp LEVEL crate] message`, keeping only the crate part of the target.
fn format_log(out: FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    let target = record.target();
    let crate_name = target.split("::").next().unwrap_or(target);
    out.finish(format_args!(
        "[{} {} {}] {}",
        timestamp(),
        record.level(),
        crate_name,
        message
    ))
}

/// Current UTC time for log lines, `??` if it cannot be formatted.
fn timestamp() -> String {
    time::OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME)
        .unwrap_or_else(|_| String::from("??"))
}
