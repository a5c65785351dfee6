pub mod wall_grid;

pub use wall_grid::{Cell, WallGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[inline]
    pub fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub north: Option<usize>,
    pub south: Option<usize>,
    pub east: Option<usize>,
    pub west: Option<usize>,

    counter: Option<Direction>,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            north: None,
            south: None,
            east: None,
            west: None,
            counter: Some(Direction::North),
        }
    }

    pub fn get(&self, dir: Direction) -> Option<usize> {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, dir: Direction, index: Option<usize>) {
        match dir {
            Direction::North => self.north = index,
            Direction::South => self.south = index,
            Direction::East => self.east = index,
            Direction::West => self.west = index,
        }
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::new()
    }
}

// yields north, south, east, west, skipping the missing ones
impl Iterator for Neighborhood {
    type Item = (usize, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(dir) = self.counter {
            self.counter = match dir {
                Direction::North => Some(Direction::South),
                Direction::South => Some(Direction::East),
                Direction::East => Some(Direction::West),
                Direction::West => None,
            };

            if let Some(index) = self.get(dir) {
                return Some((index, dir));
            }
        }

        None
    }
}
