pub mod disjoint_set;
pub mod error;
pub mod generators;
pub mod grids;
pub mod settings;

pub use disjoint_set::DisjointSet;
pub use error::MazeError;
pub use generators::{new_generator, Bias, Generator, GeneratorKind, StepResult};
pub use grids::{Cell, Direction, WallGrid};
