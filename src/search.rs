use crate::config::*;
use crate::error::*;
use crate::facing::*;
use crate::grid::*;
use crate::metadata::*;
use crate::path::{self, PathNode};
use grid_2d::{Coord, Grid, Size};
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{self, AtomicBool};

pub type Cost = u64;

#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) seen: u64,
    pub(crate) visited: u64,
    pub(crate) walked: u64,
    pub(crate) node: FacingNode,
    pub(crate) from_parent: Option<Step>,
    pub(crate) cost: Cost,
    /// Indices of every node from which `cost` is achieved.
    pub(crate) predecessors: Vec<usize>,
}

impl SearchNode {
    fn new(node: FacingNode) -> Self {
        Self {
            seen: 0,
            visited: 0,
            walked: 0,
            node,
            from_parent: None,
            cost: 0,
            predecessors: Vec::new(),
        }
    }

    fn facings(coord: Coord) -> [Self; NUM_FACINGS] {
        FACINGS.map(|direction| Self::new(FacingNode::new(coord, direction)))
    }
}

impl PathNode for SearchNode {
    fn from_parent(&self) -> Option<Step> {
        self.from_parent
    }
    fn node(&self) -> FacingNode {
        self.node
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PriorityEntry {
    pub(crate) node_index: usize,
    pub(crate) cost: Cost,
}

impl PriorityEntry {
    pub(crate) fn new(node_index: usize, cost: Cost) -> Self {
        Self { node_index, cost }
    }
}

impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for PriorityEntry {}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

/// Working state for searches over a grid of a given size. Reusing a context
/// across queries reuses its allocations; each query stamps a fresh sequence
/// number so nothing from an earlier query is observed.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub(crate) seq: u64,
    pub(crate) priority_queue: BinaryHeap<PriorityEntry>,
    pub(crate) node_grid: Grid<[SearchNode; NUM_FACINGS]>,
}

impl SearchContext {
    pub fn new(size: Size) -> Self {
        Self {
            seq: 0,
            node_grid: Grid::new_fn(size, SearchNode::facings),
            priority_queue: BinaryHeap::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.node_grid.size()
    }

    pub(crate) fn node_index(&self, node: FacingNode) -> Option<usize> {
        self.node_grid
            .index_of_coord(node.coord)
            .map(|cell_index| cell_index * NUM_FACINGS + facing_index(node.direction))
    }

    pub(crate) fn search_node(&self, index: usize) -> &SearchNode {
        &self.node_grid.get_index_checked(index / NUM_FACINGS)[index % NUM_FACINGS]
    }

    pub(crate) fn search_node_mut(&mut self, index: usize) -> &mut SearchNode {
        &mut self.node_grid.get_index_checked_mut(index / NUM_FACINGS)[index % NUM_FACINGS]
    }

    pub(crate) fn init<G>(
        &mut self,
        grid: &G,
        start: FacingNode,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<usize, Error>
    where
        G: SolidGrid,
    {
        match grid.is_solid(start.coord) {
            None => return Err(Error::StartOutsideGrid),
            Some(true) if !config.allow_solid_start => return Err(Error::StartSolid),
            Some(_) => (),
        }

        if grid.is_solid(goal).is_none() {
            return Err(Error::GoalOutsideGrid);
        }

        if config.step_costs.advance == 0 || config.step_costs.rotate == 0 {
            return Err(Error::ZeroStepCost);
        }

        if self.size() != grid.size() {
            self.node_grid = Grid::new_fn(grid.size(), SearchNode::facings);
        }

        let index = self.node_index(start).ok_or(Error::StartOutsideGrid)?;

        self.seq += 1;
        self.priority_queue.clear();

        let seq = self.seq;
        let node = self.search_node_mut(index);
        node.from_parent = None;
        node.seen = seq;
        node.cost = 0;
        node.predecessors.clear();

        Ok(index)
    }

    /// Marks the node at `index` as finalized for this query. Returns its
    /// node and cost, or `None` if it had already been finalized (the entry
    /// popped was stale).
    pub(crate) fn visit(&mut self, index: usize) -> Option<(FacingNode, Cost)> {
        let seq = self.seq;
        let node = self.search_node_mut(index);
        if node.visited == seq {
            return None;
        }
        node.visited = seq;
        Some((node.node, node.cost))
    }

    pub(crate) fn search_general<G, H>(
        &mut self,
        grid: &G,
        start: FacingNode,
        goal: Coord,
        heuristic_fn: H,
        config: SearchConfig,
        cancel: Option<&AtomicBool>,
        path: &mut Vec<Step>,
    ) -> Result<SearchMetadata, Error>
    where
        G: SolidGrid,
        H: Fn(Coord, Coord) -> Cost,
    {
        let start_index = self.init(grid, start, goal, config)?;
        self.priority_queue
            .push(PriorityEntry::new(start_index, heuristic_fn(start.coord, goal)));

        let mut num_nodes_visited = 0;

        while let Some(current_entry) = self.priority_queue.pop() {
            let (current_node, current_cost) = match self.visit(current_entry.node_index) {
                Some(visited) => visited,
                None => continue,
            };

            num_nodes_visited += 1;
            check_interrupted(config, cancel, num_nodes_visited)?;

            if current_node.is_goal(goal) {
                path::make_path(self, current_entry.node_index, path);
                debug!(
                    "reached {:?} with cost {} after visiting {} nodes",
                    current_node, current_cost, num_nodes_visited
                );
                return Ok(SearchMetadata {
                    num_nodes_visited,
                    cost: current_cost,
                    length: path.len(),
                });
            }

            for transition in current_node.neighbours(grid, config.step_costs) {
                self.see_successor(
                    current_entry.node_index,
                    current_cost,
                    transition,
                    &heuristic_fn,
                    goal,
                    false,
                );
            }
        }

        debug!(
            "no path to {:?} after visiting {} nodes",
            goal, num_nodes_visited
        );
        Err(Error::NoPath)
    }

    /// Relaxes the edge from `parent_index` along `transition`. A strictly
    /// cheaper cost replaces the successor's predecessors; an equal cost
    /// appends to them when `record_ties` is set. A successor whose cost or
    /// priority does not fit in a `Cost` is treated as unreachable.
    pub(crate) fn see_successor<H>(
        &mut self,
        parent_index: usize,
        parent_cost: Cost,
        transition: Transition,
        heuristic_fn: H,
        goal: Coord,
        record_ties: bool,
    ) where
        H: Fn(Coord, Coord) -> Cost,
    {
        let index = match self.node_index(transition.node) {
            Some(index) => index,
            None => return,
        };

        let cost = match parent_cost.checked_add(transition.cost) {
            Some(cost) => cost,
            None => return,
        };
        let priority = match cost.checked_add(heuristic_fn(transition.node.coord, goal)) {
            Some(priority) => priority,
            None => return,
        };

        let seq = self.seq;
        let node = self.search_node_mut(index);

        if node.seen != seq || cost < node.cost {
            node.from_parent = Some(transition.step);
            node.seen = seq;
            node.cost = cost;
            node.predecessors.clear();
            node.predecessors.push(parent_index);

            self.priority_queue.push(PriorityEntry::new(index, priority));
        } else if record_ties && cost == node.cost {
            node.predecessors.push(parent_index);
        }
    }
}

pub(crate) fn check_interrupted(
    config: SearchConfig,
    cancel: Option<&AtomicBool>,
    num_nodes_visited: usize,
) -> Result<(), Error> {
    if let Some(max_nodes_visited) = config.max_nodes_visited {
        if num_nodes_visited > max_nodes_visited {
            return Err(Error::NodeLimitReached);
        }
    }
    if cancel.map_or(false, |flag| flag.load(atomic::Ordering::Relaxed)) {
        return Err(Error::Cancelled);
    }
    Ok(())
}
