use crate::config::*;
use crate::error::*;
use crate::facing::*;
use crate::grid::*;
use crate::metadata::*;
use crate::search::*;
use direction::CardinalDirection;
use grid_2d::Coord;
use std::sync::atomic::AtomicBool;

pub fn manhattan_distance(a: Coord, b: Coord) -> Cost {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as Cost
}

/// Every cell between a node and the goal costs at least one advance, and
/// rotations leave the distance unchanged, so this never overestimates and
/// never decreases by more than the step taken. Saturates, since any goal
/// further away than `Cost::MAX` is out of reach anyway.
pub(crate) fn manhattan_heuristic(costs: StepCosts) -> impl Fn(Coord, Coord) -> Cost {
    move |a, b| manhattan_distance(a, b).saturating_mul(costs.advance)
}

impl SearchContext {
    pub fn astar_manhattan_distance_heuristic<G>(
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
        let heuristic_fn = manhattan_heuristic(config.step_costs);
        self.search_general(grid, start, goal, heuristic_fn, config, None, path)
    }

    /// As `astar_manhattan_distance_heuristic`, but gives up with
    /// `Error::Cancelled` once `cancel` is set. The flag is checked once per
    /// node visited.
    pub fn astar_manhattan_distance_heuristic_cancellable<G>(
        &mut self,
        grid: &G,
        start: FacingNode,
        goal: Coord,
        config: SearchConfig,
        cancel: &AtomicBool,
        path: &mut Vec<Step>,
    ) -> Result<SearchMetadata, Error>
    where
        G: SolidGrid,
    {
        let heuristic_fn = manhattan_heuristic(config.step_costs);
        self.search_general(grid, start, goal, heuristic_fn, config, Some(cancel), path)
    }
}

/// Minimum cost of reaching `goal` (in any direction) from `start` facing
/// `start_direction`, with the default step costs.
pub fn min_cost<G>(
    grid: &G,
    start: Coord,
    start_direction: CardinalDirection,
    goal: Coord,
) -> Result<Cost, Error>
where
    G: SolidGrid,
{
    let mut ctx = SearchContext::new(grid.size());
    let mut path = Vec::new();
    ctx.astar_manhattan_distance_heuristic(
        grid,
        FacingNode::new(start, start_direction),
        goal,
        Default::default(),
        &mut path,
    )
    .map(|metadata| metadata.cost)
}
