use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use facing_search::*;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Heuristic {
    /// A* guided by the Manhattan distance to the goal
    Manhattan,
    /// Plain Dijkstra
    Zero,
}

#[derive(Parser)]
#[command(name = "facing-search")]
#[command(about = "Cheapest cost through a maze, and every cell on a cheapest path")]
struct Cmd {
    /// Maze file: `#` walls, `.` open cells, `S` start (facing east), `E` goal
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,

    /// Print the maze with every cell on a cheapest path marked `O`
    #[arg(long)]
    render: bool,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Give up after visiting this many nodes
    #[arg(long)]
    max_nodes: Option<usize>,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    advance_cost: Cost,

    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    rotate_cost: Cost,
}

#[derive(Debug, Serialize)]
struct Report {
    min_cost: Cost,
    num_cells: usize,
    search: SearchMetadata,
    all_optima: AllOptimaMetadata,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cmd = Cmd::parse();
    let maze = load(&cmd.input)?;
    let config = SearchConfig {
        allow_solid_start: false,
        step_costs: StepCosts {
            advance: cmd.advance_cost,
            rotate: cmd.rotate_cost,
        },
        max_nodes_visited: cmd.max_nodes,
    };

    let (report, cells) = solve(&maze, cmd.heuristic, config)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Part 1: {}", report.min_cost);
        println!("Part 2: {}", report.num_cells);
    }
    if cmd.render {
        print!("{}", maze.render(&cells));
    }
    Ok(())
}

fn load(path: &Path) -> Result<Maze> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_maze(&input).with_context(|| format!("failed to parse {}", path.display()))
}

fn solve(
    maze: &Maze,
    heuristic: Heuristic,
    config: SearchConfig,
) -> Result<(Report, HashSet<Coord>)> {
    let start = FacingNode::new(maze.start, CardinalDirection::East);
    let mut ctx = SearchContext::new(maze.terrain.size());
    let mut path = Vec::new();
    let mut cells = HashSet::new();

    let search = match heuristic {
        Heuristic::Manhattan => {
            ctx.astar_manhattan_distance_heuristic(&maze.terrain, start, maze.goal, config, &mut path)
        }
        Heuristic::Zero => ctx.dijkstra(&maze.terrain, start, maze.goal, config, &mut path),
    }
    .context("failed to find the cheapest cost")?;
    tracing::info!(
        cost = search.cost,
        nodes = search.num_nodes_visited,
        steps = search.length,
        "min cost"
    );

    let all_optima = match heuristic {
        Heuristic::Manhattan => ctx.astar_all_optima_manhattan_distance_heuristic(
            &maze.terrain,
            start,
            maze.goal,
            config,
            &mut cells,
        ),
        Heuristic::Zero => {
            ctx.dijkstra_all_optima(&maze.terrain, start, maze.goal, config, &mut cells)
        }
    }
    .context("failed to collect cells on cheapest paths")?;
    tracing::info!(
        cells = all_optima.num_cells,
        nodes = all_optima.num_nodes_visited,
        "optimal cells"
    );

    let report = Report {
        min_cost: search.cost,
        num_cells: all_optima.num_cells,
        search,
        all_optima,
    };
    Ok((report, cells))
}
