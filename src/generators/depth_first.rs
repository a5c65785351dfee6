use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MazeError;
use crate::generators::{Generator, StepResult};
use crate::grids::WallGrid;

// explicit stack instead of recursion, starts in cell 0
pub struct DepthFirst<R: Rng> {
    grid: WallGrid,
    rng: R,
    stack: Vec<usize>,
    current_cell: Option<usize>,
    pub done: bool,
}

impl<R: Rng> DepthFirst<R> {
    pub fn new(grid: WallGrid, rng: R) -> Result<Self, MazeError> {
        if grid.is_empty() {
            let dims = grid.dims();
            return Err(MazeError::EmptyGrid {
                rows: dims.rows,
                columns: dims.columns,
            });
        }

        log::debug!(
            "depth-first over {}x{}",
            grid.dims.rows,
            grid.dims.columns
        );

        Ok(Self {
            stack: Vec::with_capacity(grid.len()),
            grid,
            rng,
            current_cell: Some(0),
            done: false,
        })
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    fn carve(&mut self, current: usize) -> Result<(), MazeError> {
        self.grid.set_visited(current);
        if self.grid.all_visited() {
            return Ok(());
        }

        let next = self
            .grid
            .unvisited_neighbours(current)
            .choose(&mut self.rng)
            .copied();

        match next {
            Some(next) => {
                self.stack.push(current);
                self.grid.clear_wall_between(current, next)?;
                self.current_cell = Some(next);
            }
            None => {
                let previous = self
                    .stack
                    .pop()
                    .ok_or(MazeError::StackExhausted(current))?;
                self.current_cell = Some(previous);
            }
        }

        Ok(())
    }
}

impl<R: Rng> Generator for DepthFirst<R> {
    fn step(&mut self) -> Result<StepResult, MazeError> {
        if self.done {
            return Ok(StepResult::completed());
        }

        if !self.grid.all_visited() {
            if let Some(current) = self.current_cell {
                self.carve(current)?;
            }
        }

        if self.grid.all_visited() {
            self.done = true;
            self.current_cell = None;
            self.stack.clear();
            log::debug!("depth-first finished");
            return Ok(StepResult::completed());
        }

        Ok(StepResult::running(self.current_cell))
    }

    fn grid(&self) -> &WallGrid {
        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
