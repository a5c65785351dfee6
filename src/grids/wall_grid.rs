use std::fmt;
use std::mem;

use crate::error::MazeError;
use crate::grids::{Dimensions, Direction, Neighborhood};

const ALL_WALLS: u8 = 0b1111;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub visited: bool,
    walls: u8,
}

impl Cell {
    pub fn new() -> Self {
        Self {
            visited: false,
            walls: ALL_WALLS,
        }
    }

    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls & dir.bit() != 0
    }

    #[inline]
    pub fn wall_mask(&self) -> u8 {
        self.walls
    }

    #[inline]
    fn clear_wall(&mut self, dir: Direction) {
        self.walls &= !dir.bit();
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
    visited_count: usize,
}

impl WallGrid {
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::EmptyGrid { rows, columns });
        }

        let len = rows
            .checked_mul(columns)
            .filter(|len| *len <= isize::MAX as usize / mem::size_of::<Cell>())
            .ok_or(MazeError::InvalidSize { rows, columns })?;

        Ok(Self {
            cells: vec![Cell::new(); len],
            dims: Dimensions { rows, columns },
            visited_count: 0,
        })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn index_of(&self, row: usize, column: usize) -> usize {
        (self.dims.columns * row) + column
    }

    #[inline]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index / self.dims.columns, index % self.dims.columns)
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // rows never wrap into each other
    pub fn neighbor_of(&self, index: usize, dir: Direction) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        let (row, column) = self.coords_of(index);

        match dir {
            Direction::North if row > 0 => Some(index - self.dims.columns),
            Direction::South if row + 1 < self.dims.rows => Some(index + self.dims.columns),
            Direction::East if column + 1 < self.dims.columns => Some(index + 1),
            Direction::West if column > 0 => Some(index - 1),
            _ => None,
        }
    }

    pub fn get_neighborhood_of(&self, index: usize) -> Neighborhood {
        let mut hood = Neighborhood::new();
        for dir in Direction::ALL.iter() {
            hood.set(*dir, self.neighbor_of(index, *dir));
        }
        hood
    }

    pub fn neighbours(&self, index: usize) -> Vec<usize> {
        self.get_neighborhood_of(index)
            .map(|(neighbor, _)| neighbor)
            .collect()
    }

    pub fn unvisited_neighbours(&self, index: usize) -> Vec<usize> {
        self.get_neighborhood_of(index)
            .filter(|(neighbor, _)| !self.cells[*neighbor].visited)
            .map(|(neighbor, _)| neighbor)
            .collect()
    }

    pub fn direction_between(&self, one: usize, two: usize) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|dir| self.neighbor_of(one, *dir) == Some(two))
    }

    pub fn clear_wall_between(&mut self, one: usize, two: usize) -> Result<(), MazeError> {
        let dir = self
            .direction_between(one, two)
            .ok_or(MazeError::InvalidEdge(one, two))?;

        self.cells[one].clear_wall(dir);
        self.cells[two].clear_wall(-dir);
        log::trace!("cleared wall between {} and {}", one, two);

        Ok(())
    }

    #[inline]
    pub fn has_wall(&self, index: usize, dir: Direction) -> bool {
        self.cells[index].has_wall(dir)
    }

    #[inline]
    pub fn is_visited(&self, index: usize) -> bool {
        self.cells[index].visited
    }

    pub fn set_visited(&mut self, index: usize) {
        let cell = &mut self.cells[index];
        if !cell.visited {
            cell.visited = true;
            self.visited_count += 1;
        }
    }

    #[inline]
    pub fn all_visited(&self) -> bool {
        self.visited_count == self.cells.len()
    }

    pub fn column(&self, column: usize) -> Vec<usize> {
        if column >= self.dims.columns {
            return Vec::new();
        }
        (0..self.dims.rows)
            .map(|row| self.index_of(row, column))
            .collect()
    }

    // every open edge once, lower index first
    pub fn passages(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).flat_map(move |index| {
            [Direction::East, Direction::South]
                .iter()
                .filter_map(move |dir| {
                    self.neighbor_of(index, *dir)
                        .filter(|_| !self.has_wall(index, *dir))
                        .map(|neighbor| (index, neighbor))
                })
                .collect::<Vec<_>>()
        })
    }

    pub fn passage_count(&self) -> usize {
        self.passages().count()
    }

    pub fn wall_state(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::wall_mask).collect()
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+{}", "---+".repeat(self.dims.columns))?;

        for row in 0..self.dims.rows {
            let mut body = String::from("|");
            let mut floor = String::from("+");

            for column in 0..self.dims.columns {
                let index = self.index_of(row, column);
                body.push_str("   ");
                body.push(if self.has_wall(index, Direction::East) {
                    '|'
                } else {
                    ' '
                });
                floor.push_str(if self.has_wall(index, Direction::South) {
                    "---+"
                } else {
                    "   +"
                });
            }

            writeln!(f, "{}", body)?;
            writeln!(f, "{}", floor)?;
        }

        Ok(())
    }
}
