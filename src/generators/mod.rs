pub mod aldous_broder;
pub mod depth_first;
pub mod eller;

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MazeError;
use crate::grids::WallGrid;

pub use aldous_broder::AldousBroder;
pub use depth_first::DepthFirst;
pub use eller::{Bias, EllerBiased};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    pub completed: bool,
    pub current: Option<usize>,
}

impl StepResult {
    pub fn running(current: Option<usize>) -> Self {
        Self {
            completed: false,
            current,
        }
    }

    pub fn completed() -> Self {
        Self {
            completed: true,
            current: None,
        }
    }
}

pub trait Generator {
    fn step(&mut self) -> Result<StepResult, MazeError>;
    fn grid(&self) -> &WallGrid;
    fn is_done(&self) -> bool;

    fn generate_maze(&mut self) -> Result<&WallGrid, MazeError> {
        while !self.step()?.completed {}
        Ok(self.grid())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    AldousBroder,
    DepthFirst,
    EllerBiased,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeneratorKind::AldousBroder => "aldous-broder",
            GeneratorKind::DepthFirst => "depth-first",
            GeneratorKind::EllerBiased => "eller",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown generator `{0}`, expected aldous-broder, depth-first or eller")]
pub struct UnknownGenerator(pub String);

impl FromStr for GeneratorKind {
    type Err = UnknownGenerator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aldous-broder" | "aldous_broder" | "aldousbroder" => Ok(GeneratorKind::AldousBroder),
            "depth-first" | "depth_first" | "dfs" => Ok(GeneratorKind::DepthFirst),
            "eller" | "eller-biased" | "eller_biased" => Ok(GeneratorKind::EllerBiased),
            _ => Err(UnknownGenerator(s.to_string())),
        }
    }
}

pub fn new_generator(
    kind: GeneratorKind,
    rows: usize,
    columns: usize,
    bias: Bias,
    seed: u64,
) -> Result<Box<dyn Generator>, MazeError> {
    let grid = WallGrid::with_dims(rows, columns)?;
    let rng = StdRng::seed_from_u64(seed);

    Ok(match kind {
        GeneratorKind::AldousBroder => Box::new(AldousBroder::new(grid, rng)?),
        GeneratorKind::DepthFirst => Box::new(DepthFirst::new(grid, rng)?),
        GeneratorKind::EllerBiased => Box::new(EllerBiased::new(grid, bias, rng)?),
    })
}
