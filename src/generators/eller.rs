// Eller's algorithm, worked column by column instead of row by row.

use std::collections::VecDeque;
use std::convert::TryFrom;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::disjoint_set::DisjointSet;
use crate::error::MazeError;
use crate::generators::{Generator, StepResult};
use crate::grids::{Direction, WallGrid};

/// Percent chance, in `1..=99`, of carving down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bias(u8);

impl Bias {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 99;

    pub fn new(value: u8) -> Result<Self, MazeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MazeError::InvalidBias(value))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Bias {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u8> for Bias {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

struct ColumnCarver {
    cells: Vec<usize>,
    down_queue: VecDeque<usize>,
    right_queue: VecDeque<usize>,
    last: bool,
}

impl ColumnCarver {
    fn new(cells: Vec<usize>, last: bool) -> Self {
        let down_queue = cells.iter().copied().collect();
        // nothing lies right of the last column
        let right_queue = if last {
            VecDeque::new()
        } else {
            cells.iter().copied().collect()
        };

        Self {
            cells,
            down_queue,
            right_queue,
            last,
        }
    }

    #[inline]
    fn is_drained(&self) -> bool {
        self.down_queue.is_empty() && self.right_queue.is_empty()
    }

    fn step<R: Rng>(
        &mut self,
        grid: &mut WallGrid,
        sets: &mut DisjointSet,
        bias: Bias,
        rng: &mut R,
    ) -> Result<Option<usize>, MazeError> {
        if let Some(cell) = self.down_queue.pop_front() {
            self.carve_down(cell, grid, sets, bias, rng)?;
            Ok(Some(cell))
        } else if let Some(cell) = self.right_queue.pop_front() {
            self.carve_right(cell, grid, sets, rng)
        } else {
            Ok(None)
        }
    }

    fn carve_down<R: Rng>(
        &self,
        cell: usize,
        grid: &mut WallGrid,
        sets: &mut DisjointSet,
        bias: Bias,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        grid.set_visited(cell);

        let roll = rng.gen_range(0..100) < bias.get();
        if !(roll || self.last) {
            return Ok(());
        }

        if let Some(below) = grid.neighbor_of(cell, Direction::South) {
            if !sets.same_set(cell, below)? {
                grid.clear_wall_between(cell, below)?;
                sets.union(cell, below)?;
            }
        }

        Ok(())
    }

    fn carve_right<R: Rng>(
        &self,
        cell: usize,
        grid: &mut WallGrid,
        sets: &mut DisjointSet,
        rng: &mut R,
    ) -> Result<Option<usize>, MazeError> {
        let root = sets.find(cell)?;
        let mut members = Vec::new();
        for other in self.cells.iter() {
            if sets.find(*other)? == root {
                members.push(*other);
            }
        }
        members.shuffle(rng);

        let from = match members.first() {
            Some(from) => *from,
            None => return Ok(Some(cell)),
        };
        let right = match grid.neighbor_of(from, Direction::East) {
            Some(right) => right,
            None => return Ok(Some(cell)),
        };

        grid.set_visited(right);
        if !sets.same_set(from, right)? {
            grid.clear_wall_between(from, right)?;
            sets.union(from, right)?;
        }

        Ok(Some(right))
    }
}

pub struct EllerBiased<R: Rng> {
    grid: WallGrid,
    sets: DisjointSet,
    bias: Bias,
    rng: R,
    next_column: usize,
    column: Option<ColumnCarver>,
    current_cell: Option<usize>,
    pub done: bool,
}

impl<R: Rng> EllerBiased<R> {
    pub fn new(grid: WallGrid, bias: Bias, rng: R) -> Result<Self, MazeError> {
        if grid.is_empty() {
            let dims = grid.dims();
            return Err(MazeError::EmptyGrid {
                rows: dims.rows,
                columns: dims.columns,
            });
        }

        log::debug!(
            "eller over {}x{} with bias {}",
            grid.dims.rows,
            grid.dims.columns,
            bias.get()
        );

        Ok(Self {
            sets: DisjointSet::with_ids(0..grid.len()),
            grid,
            bias,
            rng,
            next_column: 0,
            column: None,
            current_cell: None,
            done: false,
        })
    }

    pub fn bias(&self) -> Bias {
        self.bias
    }

    pub fn ready_for_next_column(&self) -> bool {
        !self.done && self.column.is_none()
    }

    pub fn into_grid(self) -> WallGrid {
        self.grid
    }

    fn start_next_column(&mut self) -> ColumnCarver {
        let column = self.next_column;
        let last = column + 1 == self.grid.dims.columns;
        log::debug!("eller starting column {}", column);

        self.next_column += 1;
        ColumnCarver::new(self.grid.column(column), last)
    }
}

impl<R: Rng> Generator for EllerBiased<R> {
    fn step(&mut self) -> Result<StepResult, MazeError> {
        if self.done {
            return Ok(StepResult::completed());
        }

        let mut carver = match self.column.take() {
            Some(carver) => carver,
            None => self.start_next_column(),
        };
        self.current_cell = carver.step(&mut self.grid, &mut self.sets, self.bias, &mut self.rng)?;

        if !carver.is_drained() {
            self.column = Some(carver);
        } else if carver.last {
            debug_assert!(self.grid.all_visited());
            self.done = true;
            self.current_cell = None;
            log::debug!("eller finished");
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

    fn seeded(rows: usize, columns: usize, bias: u8, seed: u64) -> EllerBiased<StdRng> {
        let grid = WallGrid::with_dims(rows, columns).unwrap();
        EllerBiased::new(grid, Bias::new(bias).unwrap(), StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn bias_bounds() {
        assert_eq!(Bias::new(0), Err(MazeError::InvalidBias(0)));
        assert_eq!(Bias::new(100), Err(MazeError::InvalidBias(100)));
        assert_eq!(Bias::try_from(1).map(Bias::get), Ok(1));
        assert_eq!(Bias::new(99).map(Bias::get), Ok(99));
        assert_eq!(Bias::default().get(), 50);
    }

    #[test]
    fn single_cell_finishes_on_first_step() {
        let mut generator = seeded(1, 1, 50, 1);
        assert_eq!(generator.step(), Ok(StepResult::completed()));
        assert_eq!(generator.grid().passage_count(), 0);
        assert!(generator.grid().all_visited());
    }

    #[test]
    fn single_column_is_one_corridor() {
        let mut generator = seeded(5, 1, 1, 8);
        for row in 0..4 {
            assert_eq!(generator.step(), Ok(StepResult::running(Some(row))));
        }
        assert_eq!(generator.step(), Ok(StepResult::completed()));

        let grid = generator.into_grid();
        assert_eq!(
            grid.passages().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 3), (3, 4)]
        );
    }

    #[test]
    fn columns_run_down_then_right() {
        let mut generator = seeded(3, 3, 50, 21);
        assert!(generator.ready_for_next_column());

        // carve down touches the column itself
        for row in 0..3 {
            let current = generator.step().unwrap().current.unwrap();
            assert_eq!(current, generator.grid().index_of(row, 0));
        }
        // carve right lands in the next column
        for _ in 0..3 {
            let current = generator.step().unwrap().current.unwrap();
            assert_eq!(generator.grid().coords_of(current).1, 1);
        }
        assert!(generator.ready_for_next_column());
    }

    #[test]
    fn every_set_reaches_the_next_column() {
        let mut generator = seeded(12, 2, 1, 4);
        // first column: 12 carve down steps, 12 carve right steps
        for _ in 0..24 {
            generator.step().unwrap();
        }
        assert!(generator.ready_for_next_column());

        let first = generator.grid.column(0);
        for cell in first {
            let root = generator.sets.find(cell).unwrap();
            let reaches = generator
                .grid
                .column(1)
                .into_iter()
                .any(|right| generator.sets.find(right).unwrap() == root);
            assert!(reaches, "set of cell {} never carved right", cell);
        }
    }

    #[test]
    fn every_step_does_column_work() {
        // each column carves down once per cell and right once per cell,
        // except the last which only carves down
        let (rows, columns) = (7, 5);
        let mut generator = seeded(rows, columns, 50, 13);

        let mut steps = 1;
        while !generator.step().unwrap().completed {
            assert!(generator.current_cell.is_some());
            steps += 1;
        }

        assert_eq!(steps, rows * columns + rows * (columns - 1));
        assert!(generator.column.is_none());
        assert_eq!(generator.next_column, columns);
    }

    #[test]
    fn last_column_joins_everything() {
        let mut generator = seeded(10, 4, 1, 99);
        generator.generate_maze().unwrap();

        let root = generator.sets.find(0).unwrap();
        for cell in 0..generator.grid.len() {
            assert_eq!(generator.sets.find(cell), Ok(root));
        }
        assert_eq!(generator.grid().passage_count(), 39);
    }
}
