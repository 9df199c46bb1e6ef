#![warn(clippy::todo)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::unknown_clippy_lints)] // unwrap_used isn't available on stable yet.

use std::path::PathBuf;

use anyhow::{bail, Context, Error};
use log::*;
use structopt::StructOpt;

mod args;
pub mod canvas;
mod config;
pub mod error;
pub mod geometry;
mod logger;
pub mod receiver;

use args::FillArg;
use config::Config;

pub use canvas::{Canvas, CanvasStore, Cell, Grid, MemoryStore, BORDER_MARKER};
pub use error::ReceiverError;
pub use geometry::{Direction, Line, Point, Size};
pub use logger::Logger;
pub use receiver::{compute_path, fill_grid, Receiver};

/// Command-line options.
#[derive(Debug, StructOpt)]
pub struct Options {
    /// Read configuration from this file instead of the default location.
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Write logs to this file instead of standard error.
    #[structopt(long, parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    /// Width of the canvas, including the frame.
    width: u16,

    /// Height of the canvas, including the frame.
    height: u16,

    /// A horizontal or vertical line to draw, as `X1,Y1,X2,Y2`.
    #[structopt(long = "line", number_of_values = 1)]
    lines: Vec<Line>,

    /// An area to fill after all lines are drawn, as `X,Y` or `X,Y,C`.
    #[structopt(long = "fill", number_of_values = 1)]
    fills: Vec<FillArg>,
}

pub async fn run(options: Options) -> Result<(), Error> {
    let config_path = options.config.clone().or_else(Config::config_path);

    let config = match Config::read(config_path).await {
        Ok(config) => config,
        Err(e) => {
            info!("unable to read config file: {}", e);
            Config::default()
        }
    };

    let canvas = draw(&options, config.filler)?;
    print!("{}", canvas);

    Ok(())
}

/// Creates a canvas and applies the requested lines, then the requested fills.
fn draw(options: &Options, default_filler: char) -> Result<Canvas, Error> {
    if options.width == 0 || options.height == 0 {
        bail!("canvas must be at least 1x1");
    }

    let size = Size::new(options.width, options.height);
    let mut receiver = Receiver::new(MemoryStore::new(Canvas::new(size)));

    for &line in &options.lines {
        if !receiver.draw_line(line)? {
            bail!(
                "line from ({}, {}) to ({}, {}) does not fit inside a {}x{} canvas",
                line.from.x,
                line.from.y,
                line.to.x,
                line.to.y,
                size.width,
                size.height
            );
        }
    }

    for fill in &options.fills {
        receiver.fill(fill.seed, fill.filler.unwrap_or(default_filler))?;
    }

    receiver.store().load()?.context("canvas disappeared")
}
