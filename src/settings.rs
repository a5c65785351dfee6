use std::error::Error;
use std::time::Duration;

use clap::Parser;

use crate::generators::{Bias, GeneratorKind};

const DEFAULT_DIMS: (usize, usize) = (15, 15);

/// Step-by-step maze generation in the terminal.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "maze-carve", version, about, long_about = None)]
pub struct Settings {
    /// Number of rows in the grid.
    #[arg(long, env = "MAZE_ROWS", default_value_t = DEFAULT_DIMS.0)]
    pub rows: usize,

    /// Number of columns in the grid.
    #[arg(long, env = "MAZE_COLUMNS", default_value_t = DEFAULT_DIMS.1)]
    pub columns: usize,

    /// Carving algorithm: aldous-broder, depth-first or eller.
    #[arg(
        long = "algorithm",
        env = "MAZE_ALGORITHM",
        default_value_t = GeneratorKind::EllerBiased
    )]
    pub kind: GeneratorKind,

    /// Percent chance (1-99) that eller carves down.
    #[arg(long, env = "MAZE_BIAS", default_value = "50", value_parser = parse_bias)]
    pub bias: Bias,

    /// Seed for the random source, drawn fresh when missing.
    #[arg(long, env = "MAZE_SEED")]
    pub seed: Option<u64>,

    /// Pause between steps (e.g. "20ms", "1s").
    #[arg(
        long,
        env = "MAZE_STEP_DELAY",
        value_name = "DURATION",
        default_value = "20ms",
        value_parser = humantime::parse_duration
    )]
    pub step_delay: Duration,
}

fn parse_bias(value: &str) -> Result<Bias, Box<dyn Error + Send + Sync>> {
    let value: u8 = value.trim().parse()?;
    Ok(Bias::new(value)?)
}
