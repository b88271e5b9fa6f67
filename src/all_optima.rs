use crate::astar::manhattan_heuristic;
use crate::config::*;
use crate::error::*;
use crate::facing::*;
use crate::grid::*;
use crate::metadata::*;
use crate::search::*;
use direction::CardinalDirection;
use grid_2d::Coord;
use log::{debug, trace};
use std::collections::HashSet;
use std::sync::atomic::AtomicBool;

impl SearchContext {
    /// Like `search_general`, but keeps every tied predecessor of each node
    /// and, once all nodes no more expensive than the cheapest goal node have
    /// been finalized, collects the cell of every node lying on a cheapest
    /// path into `cells`.
    pub(crate) fn all_optima_general<G, H>(
        &mut self,
        grid: &G,
        start: FacingNode,
        goal: Coord,
        heuristic_fn: H,
        config: SearchConfig,
        cancel: Option<&AtomicBool>,
        cells: &mut HashSet<Coord>,
    ) -> Result<AllOptimaMetadata, Error>
    where
        G: SolidGrid,
        H: Fn(Coord, Coord) -> Cost,
    {
        cells.clear();

        let start_index = self.init(grid, start, goal, config)?;
        self.priority_queue
            .push(PriorityEntry::new(start_index, heuristic_fn(start.coord, goal)));

        let mut best_goal_cost: Option<Cost> = None;
        let mut num_nodes_visited = 0;

        while let Some(current_entry) = self.priority_queue.pop() {
            if let Some(best_goal_cost) = best_goal_cost {
                // entries pop in non-decreasing priority, so every node tied
                // with the cheapest goal node has now been finalized
                if current_entry.cost > best_goal_cost {
                    break;
                }
            }

            let (current_node, current_cost) = match self.visit(current_entry.node_index) {
                Some(visited) => visited,
                None => continue,
            };

            num_nodes_visited += 1;
            check_interrupted(config, cancel, num_nodes_visited)?;

            if current_node.is_goal(goal) {
                trace!(
                    "goal node {:?} finalized with cost {}",
                    current_node,
                    current_cost
                );
                best_goal_cost = Some(match best_goal_cost {
                    Some(best) => best.min(current_cost),
                    None => current_cost,
                });
            }

            for transition in current_node.neighbours(grid, config.step_costs) {
                self.see_successor(
                    current_entry.node_index,
                    current_cost,
                    transition,
                    &heuristic_fn,
                    goal,
                    true,
                );
            }
        }

        let cost = match best_goal_cost {
            Some(cost) => cost,
            None => {
                debug!("no path to {:?} after visiting {} nodes", goal, num_nodes_visited);
                return Err(Error::NoPath);
            }
        };

        self.walk_predecessors(start_index, goal, cost, cells)?;

        debug!(
            "{} cells on paths of cost {} to {:?} after visiting {} nodes",
            cells.len(),
            cost,
            goal,
            num_nodes_visited
        );

        Ok(AllOptimaMetadata {
            num_nodes_visited,
            cost,
            num_cells: cells.len(),
        })
    }

    /// Follows predecessor links back from every goal node of cost
    /// `goal_cost`, visiting each node once. The start is the only node
    /// allowed to have no predecessors.
    pub(crate) fn walk_predecessors(
        &mut self,
        start_index: usize,
        goal: Coord,
        goal_cost: Cost,
        cells: &mut HashSet<Coord>,
    ) -> Result<(), Error> {
        let seq = self.seq;

        let mut frontier = FACINGS
            .iter()
            .filter_map(|&direction| self.node_index(FacingNode::new(goal, direction)))
            .filter(|&index| {
                let node = self.search_node(index);
                node.seen == seq && node.cost == goal_cost
            })
            .collect::<Vec<_>>();

        while let Some(index) = frontier.pop() {
            let node = self.search_node_mut(index);
            if node.walked == seq {
                continue;
            }
            node.walked = seq;
            cells.insert(node.node.coord);

            if node.predecessors.is_empty() {
                if index != start_index {
                    return Err(Error::BrokenPredecessorChain(node.node));
                }
                continue;
            }
            frontier.extend(node.predecessors.iter().cloned());
        }

        Ok(())
    }

    pub fn astar_all_optima_manhattan_distance_heuristic<G>(
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
        let heuristic_fn = manhattan_heuristic(config.step_costs);
        self.all_optima_general(grid, start, goal, heuristic_fn, config, None, cells)
    }

    pub fn astar_all_optima_manhattan_distance_heuristic_cancellable<G>(
        &mut self,
        grid: &G,
        start: FacingNode,
        goal: Coord,
        config: SearchConfig,
        cancel: &AtomicBool,
        cells: &mut HashSet<Coord>,
    ) -> Result<AllOptimaMetadata, Error>
    where
        G: SolidGrid,
    {
        let heuristic_fn = manhattan_heuristic(config.step_costs);
        self.all_optima_general(grid, start, goal, heuristic_fn, config, Some(cancel), cells)
    }
}

/// Every cell lying on at least one cheapest path from `start` facing
/// `start_direction` to `goal`, with the default step costs.
pub fn optimal_path_cells<G>(
    grid: &G,
    start: Coord,
    start_direction: CardinalDirection,
    goal: Coord,
) -> Result<HashSet<Coord>, Error>
where
    G: SolidGrid,
{
    let mut ctx = SearchContext::new(grid.size());
    let mut cells = HashSet::new();
    ctx.astar_all_optima_manhattan_distance_heuristic(
        grid,
        FacingNode::new(start, start_direction),
        goal,
        Default::default(),
        &mut cells,
    )?;
    Ok(cells)
}
