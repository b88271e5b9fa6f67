//! Shortest paths over grids where the cost of a move depends on the
//! direction faced. Advancing one cell is cheap and rotating in place is
//! expensive, so the search runs over (cell, facing) nodes.
//!
//! Two queries are provided: the minimum cost of reaching a goal cell
//! ([`min_cost`], [`SearchContext::astar_manhattan_distance_heuristic`]), and
//! the set of every cell lying on at least one path of that cost
//! ([`optimal_path_cells`],
//! [`SearchContext::astar_all_optima_manhattan_distance_heuristic`]).

pub use direction::CardinalDirection;
pub use grid_2d::{Coord, Size};

mod all_optima;
mod astar;
mod config;
mod dijkstra;
mod error;
mod facing;
mod grid;
mod metadata;
mod path;
mod search;
mod terrain;

pub use all_optima::*;
pub use astar::*;
pub use config::*;
pub use error::*;
pub use facing::*;
pub use grid::*;
pub use metadata::*;
pub use path::*;
pub use search::*;
pub use terrain::*;

#[cfg(test)]
mod tests;
