use crate::config::StepCosts;
use crate::facing::{FacingNode, Step};
use crate::search::{Cost, SearchContext};
use std::slice;

pub(crate) trait PathNode {
    fn from_parent(&self) -> Option<Step>;
    fn node(&self) -> FacingNode;
}

/// Fills `path` with the steps leading from the start of the current query
/// to the node at `goal_index`.
pub(crate) fn make_path(ctx: &SearchContext, goal_index: usize, path: &mut Vec<Step>) {
    path.clear();
    let mut index = goal_index;
    loop {
        let search_node = ctx.search_node(index);
        let step = match search_node.from_parent() {
            Some(step) => step,
            None => break,
        };
        path.push(step);
        let parent = search_node.node().unstep(step);
        index = match ctx.node_index(parent) {
            Some(index) => index,
            None => break,
        };
    }
    path.reverse();
}

/// Replays a sequence of steps from a start node, yielding each node reached.
pub struct PathWalk<'a> {
    current: FacingNode,
    steps: slice::Iter<'a, Step>,
}

impl<'a> PathWalk<'a> {
    pub fn new(start: FacingNode, path: &'a [Step]) -> Self {
        Self {
            current: start,
            steps: path.iter(),
        }
    }
}

impl<'a> Iterator for PathWalk<'a> {
    type Item = FacingNode;
    fn next(&mut self) -> Option<Self::Item> {
        let &step = self.steps.next()?;
        self.current = self.current.step(step);
        Some(self.current)
    }
}

pub fn path_cost(path: &[Step], costs: StepCosts) -> Cost {
    path.iter().map(|&step| step.cost(costs)).sum()
}
