use crate::config::*;
use crate::error::*;
use crate::facing::*;
use crate::grid::*;
use crate::metadata::*;
use crate::search::*;
use grid_2d::Coord;
use std::collections::HashSet;

impl SearchContext {
    pub fn dijkstra<G>(
        &mut self,
        grid: &G,
        start: FacingNode,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Step>,
    ) -> Result<SearchMetadata, Error>
    where
        G: SolidGrid,
    {
        self.search_general(grid, start, goal, |_, _| 0, config, None, path)
    }

    pub fn dijkstra_all_optima<G>(
        &mut self,
        grid: &G,
        start: FacingNode,
        goal: Coord,
        config: SearchConfig,
        cells: &mut HashSet<Coord>,
    ) -> Result<AllOptimaMetadata, Error>
    where
        G: SolidGrid,
    {
        self.all_optima_general(grid, start, goal, |_, _| 0, config, None, cells)
    }
}
