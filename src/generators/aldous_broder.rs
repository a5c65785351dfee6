use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MazeError;
use crate::generators::{Generator, StepResult};
use crate::grids::WallGrid;

pub struct AldousBroder<R: Rng> {
    grid: WallGrid,
    rng: R,
    current_cell: Option<usize>,
    pub done: bool,
}

impl<R: Rng> AldousBroder<R> {
    pub fn new(grid: WallGrid, mut rng: R) -> Result<Self, MazeError> {
        if grid.is_empty() {
            let dims = grid.dims();
            return Err(MazeError::EmptyGrid {
                rows: dims.rows,
                columns: dims.columns,
            });
        }

        let current_cell = rng.gen_range(0..grid.len());
        log::debug!(
            "aldous-broder over {}x{} starting at cell {}",
            grid.dims.rows,
            grid.dims.columns,
            current_cell
        );

        Ok(Self {
            grid,
            rng,
            current_cell: Some(current_cell),
            done: false,
        })
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    fn carve(&mut self, current: usize) -> Result<(), MazeError> {
        self.grid.set_visited(current);

        // a lone cell has nowhere to walk
        let next = match self.grid.neighbours(current).choose(&mut self.rng) {
            Some(next) => *next,
            None => return Ok(()),
        };

        if !self.grid.is_visited(next) {
            self.grid.clear_wall_between(current, next)?;
        }
        self.current_cell = Some(next);

        Ok(())
    }
}

impl<R: Rng> Generator for AldousBroder<R> {
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
            log::debug!("aldous-broder finished");
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(rows: usize, columns: usize, seed: u64) -> AldousBroder<StdRng> {
        let grid = WallGrid::with_dims(rows, columns).unwrap();
        AldousBroder::new(grid, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn single_cell_finishes_on_first_step() {
        let mut generator = seeded(1, 1, 3);
        assert_eq!(generator.step(), Ok(StepResult::completed()));
        assert_eq!(generator.grid().passage_count(), 0);
        assert!(generator.grid().all_visited());
    }

    #[test]
    fn walk_moves_between_adjacent_cells() {
        let mut generator = seeded(6, 6, 11);
        let mut previous = generator.current_cell.unwrap();

        loop {
            let result = generator.step().unwrap();
            if result.completed {
                break;
            }
            let current = result.current.unwrap();
            assert!(generator.grid().direction_between(previous, current).is_some());
            previous = current;
        }

        assert_eq!(generator.grid().passage_count(), 35);
        assert!(generator.current_cell.is_none());
    }

    #[test]
    fn same_seed_same_maze() {
        let mut one = seeded(8, 5, 2024);
        let mut two = seeded(8, 5, 2024);
        one.generate_maze().unwrap();
        two.generate_maze().unwrap();

        assert_eq!(one.into_grid(), two.into_grid());
    }
}
