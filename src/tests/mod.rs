
use crate::*;
use std::collections::{HashMap, HashSet};

pub(crate) fn maze_from_strings(strings: &[&str]) -> Maze {
    parse_maze(&strings.join("\n")).unwrap()
}

type NodeKey = (i32, i32, usize);

fn key(node: FacingNode) -> NodeKey {
    (node.coord.x, node.coord.y, crate::facing::facing_index(node.direction))
}

fn all_nodes(terrain: &Terrain) -> Vec<FacingNode> {
    terrain
        .open_coords()
        .flat_map(|coord| {
            crate::facing::FACINGS
                .iter()
                .map(move |&direction| FacingNode::new(coord, direction))
        })
        .collect()
}

/// Cheapest cost from `start` to every node, found by relaxing every edge
/// until nothing changes.
fn costs_from(terrain: &Terrain, start: FacingNode, costs: StepCosts) -> HashMap<NodeKey, Cost> {
    let nodes = all_nodes(terrain);
    let mut dist = HashMap::new();
    dist.insert(key(start), 0);
    loop {
        let mut changed = false;
        for &node in &nodes {
            let node_cost = match dist.get(&key(node)) {
                Some(&node_cost) => node_cost,
                None => continue,
            };
            for transition in node.neighbours(terrain, costs) {
                let entry = dist.entry(key(transition.node)).or_insert(Cost::MAX);
                if node_cost + transition.cost < *entry {
                    *entry = node_cost + transition.cost;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Cheapest cost from every node to any node standing on `goal`.
fn costs_to(terrain: &Terrain, goal: Coord, costs: StepCosts) -> HashMap<NodeKey, Cost> {
    let nodes = all_nodes(terrain);
    let mut dist = nodes
        .iter()
        .filter(|node| node.is_goal(goal))
        .map(|&node| (key(node), 0))
        .collect::<HashMap<_, _>>();
    loop {
        let mut changed = false;
        for &node in &nodes {
            if node.is_goal(goal) {
                continue;
            }
            for transition in node.neighbours(terrain, costs) {
                let successor_cost = match dist.get(&key(transition.node)) {
                    Some(&successor_cost) => successor_cost,
                    None => continue,
                };
                let entry = dist.entry(key(node)).or_insert(Cost::MAX);
                if transition.cost + successor_cost < *entry {
                    *entry = transition.cost + successor_cost;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Exhaustive answer to both queries: the cheapest cost, and the cells of
/// every node whose cheapest cost from the start plus cheapest cost to the
/// goal equals it.
pub(crate) fn reference(
    terrain: &Terrain,
    start: FacingNode,
    goal: Coord,
    costs: StepCosts,
) -> Option<(Cost, HashSet<Coord>)> {
    let from_start = costs_from(terrain, start, costs);
    let to_goal = costs_to(terrain, goal, costs);
    let best = crate::facing::FACINGS
        .iter()
        .filter_map(|&direction| from_start.get(&key(FacingNode::new(goal, direction))))
        .cloned()
        .min()?;
    let cells = all_nodes(terrain)
        .into_iter()
        .filter(|&node| {
            match (from_start.get(&key(node)), to_goal.get(&key(node))) {
                (Some(&a), Some(&b)) => a + b == best,
                _ => false,
            }
        })
        .map(|node| node.coord)
        .collect();
    Some((best, cells))
}

/// Replays `path` from `start`, checking it never enters a wall and ends on
/// `goal`. Returns the cells it passes through.
pub(crate) fn check_path(
    terrain: &Terrain,
    start: FacingNode,
    goal: Coord,
    path: &[Step],
) -> HashSet<Coord> {
    let mut cells = HashSet::new();
    cells.insert(start.coord);
    let end = PathWalk::new(start, path).fold(start, |_, node| {
        assert_eq!(
            terrain.get(node.coord),
            Some(Cell::Open),
            "Path goes through wall"
        );
        cells.insert(node.coord);
        node
    });
    assert_eq!(end.coord, goal);
    cells
}

pub(crate) const SMALL_MAZE: &[&str] = &[
    "###############",
    "#.......#....E#",
    "#.#.###.#.###.#",
    "#.....#.#...#.#",
    "#.###.#####.#.#",
    "#.#.#.......#.#",
    "#.#.#####.###.#",
    "#...........#.#",
    "###.#.#####.#.#",
    "#...#.....#.#.#",
    "#.#.#.###.#.#.#",
    "#.....#...#.#.#",
    "#.###.#.#.#.#.#",
    "#S..#.....#...#",
    "###############",
];

pub(crate) const LARGE_MAZE: &[&str] = &[
    "#################",
    "#...#...#...#..E#",
    "#.#.#.#.#.#.#.#.#",
    "#.#.#.#...#...#.#",
    "#.#.#.#.###.#.#.#",
    "#...#.#.#.....#.#",
    "#.#.#.#.#.#####.#",
    "#.#...#.#.#.....#",
    "#.#.#####.#.###.#",
    "#.#.#.......#...#",
    "#.#.###.#####.###",
    "#.#.#...#.....#.#",
    "#.#.#.#####.###.#",
    "#.#.#.........#.#",
    "#.#.#.#########.#",
    "#S#.............#",
    "#################",
];

/// One internal spur that no cheapest route touches.
pub(crate) const SPUR: &[&str] = &[
    "###############",
    "#............E#",
    "#......#......#",
    "#......#......#",
    "#......#......#",
    "#......#......#",
    "#......#......#",
    "#......#......#",
    "#.............#",
    "#.............#",
    "#.............#",
    "#.............#",
    "#.............#",
    "#S............#",
    "###############",
];

/// Equally cheap routes above and below the block.
pub(crate) const TWIN_ROUTES: &[&str] = &[
    "#######",
    "#.....#",
    "#S###E#",
    "#.....#",
    "#######",
];

pub(crate) const ENCLOSED_GOAL: &[&str] = &[
    "#######",
    "#S..#E#",
    "#...###",
    "#######",
];

pub(crate) fn start_of(maze: &Maze) -> FacingNode {
    FacingNode::new(maze.start, CardinalDirection::East)
}
