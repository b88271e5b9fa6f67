use crate::error::ParseError;
use crate::grid::SolidGrid;
use grid_2d::{Coord, Grid, Size};
use std::collections::HashSet;
use std::str::FromStr;

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Terrain {
    grid: Grid<Cell>,
}

impl Terrain {
    /// A terrain of the given size with every cell open.
    pub fn new(size: Size) -> Self {
        Self {
            grid: Grid::new_clone(size, Cell::Open),
        }
    }

    pub fn from_grid(grid: Grid<Cell>) -> Self {
        Self { grid }
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.grid.get(coord).cloned()
    }

    /// Returns the previous cell, or `None` if `coord` is outside the terrain
    /// (in which case nothing changes).
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Option<Cell> {
        self.grid
            .get_mut(coord)
            .map(|current| std::mem::replace(current, cell))
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    pub fn open_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords()
            .filter(move |&coord| self.get(coord) == Some(Cell::Open))
    }
}

impl SolidGrid for Terrain {
    fn size(&self) -> Size {
        self.grid.size()
    }

    fn is_solid(&self, coord: Coord) -> Option<bool> {
        self.get(coord).map(|cell| cell == Cell::Wall)
    }
}

/// A terrain with its start and goal cells.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Maze {
    pub terrain: Terrain,
    pub start: Coord,
    pub goal: Coord,
}

const WALL: char = '#';
const OPEN: char = '.';
const START: char = 'S';
const GOAL: char = 'E';
const MARKED: char = 'O';

impl Maze {
    /// Draws the maze in its input format, with marked open cells as `O`.
    pub fn render(&self, marked: &HashSet<Coord>) -> String {
        let width = self.terrain.grid.width() as usize;
        let mut out = String::with_capacity((width + 1) * self.terrain.grid.height() as usize);
        for coord in self.terrain.coords() {
            let ch = if coord == self.start {
                START
            } else if coord == self.goal {
                GOAL
            } else if self.terrain.get(coord) == Some(Cell::Wall) {
                WALL
            } else if marked.contains(&coord) {
                MARKED
            } else {
                OPEN
            };
            out.push(ch);
            if coord.x as usize == width - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_maze(s)
    }
}

/// Parses a maze where `#` is a wall, `.` is open, and `S` and `E` are the
/// open start and goal cells. Every row must have the same width.
pub fn parse_maze(input: &str) -> Result<Maze, ParseError> {
    let rows = input
        .trim()
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>();

    let width = match rows.first() {
        Some(row) if !row.is_empty() => row.chars().count(),
        _ => return Err(ParseError::Empty),
    };
    let height = rows.len();

    let mut grid = Grid::new_clone(Size::new(width as u32, height as u32), Cell::Open);
    let mut start = None;
    let mut goal = None;

    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(ParseError::RaggedRow {
                row: y,
                expected: width,
                found,
            });
        }
        for (x, symbol) in row.chars().enumerate() {
            let coord = Coord::new(x as i32, y as i32);
            let cell = match symbol {
                WALL => Cell::Wall,
                OPEN => Cell::Open,
                START => {
                    if start.replace(coord).is_some() {
                        return Err(ParseError::DuplicateStart(coord));
                    }
                    Cell::Open
                }
                GOAL => {
                    if goal.replace(coord).is_some() {
                        return Err(ParseError::DuplicateGoal(coord));
                    }
                    Cell::Open
                }
                _ => return Err(ParseError::UnknownSymbol { symbol, coord }),
            };
            if let Some(slot) = grid.get_mut(coord) {
                *slot = cell;
            }
        }
    }

    Ok(Maze {
        terrain: Terrain::from_grid(grid),
        start: start.ok_or(ParseError::MissingStart)?,
        goal: goal.ok_or(ParseError::MissingGoal)?,
    })
}
