use crate::facing::FacingNode;
use grid_2d::Coord;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("start lies outside the grid")]
    StartOutsideGrid,
    #[error("goal lies outside the grid")]
    GoalOutsideGrid,
    #[error("start is solid")]
    StartSolid,
    #[error("step costs must be non-zero")]
    ZeroStepCost,
    #[error("no path from start to goal")]
    NoPath,
    #[error("search cancelled")]
    Cancelled,
    #[error("node limit reached before the search finished")]
    NodeLimitReached,
    #[error("node {0:?} has no predecessor but is not the start")]
    BrokenPredecessorChain(FacingNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input contains no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at ({}, {})", .coord.x, .coord.y)]
    UnknownSymbol { symbol: char, coord: Coord },
    #[error("no start marker")]
    MissingStart,
    #[error("no goal marker")]
    MissingGoal,
    #[error("second start marker at ({}, {})", .0.x, .0.y)]
    DuplicateStart(Coord),
    #[error("second goal marker at ({}, {})", .0.x, .0.y)]
    DuplicateGoal(Coord),
}
