//! clearpath-demo: scatter obstacles, route two agents and draw the result.
//!
//! Usage: `clearpath-demo [seed] [metric] [--no-jump] [--wall-factor N]
//! [--show small|large] [--sweep]`

mod args;
mod render;

use std::io;

use clearpath_core::{ObstacleGrid, Point, Range};
use clearpath_paths::{
    AgentProfile, ClearanceField, Metric, PathWalker, Pathfinder, ScatterConfig, SearchConfig,
    SearchError, SearchResult, scatter_blocks,
};
use crossterm::style::Color;
use rand::SeedableRng;

use args::{Options, Show};
use render::{Layer, Overlay};

const WIDTH: i32 = 80;
const HEIGHT: i32 = 45;
const START: Point = Point { x: 5, y: 25 };
const GOAL: Point = Point { x: 75, y: 25 };

const SMALL_FG: Color = Color::Rgb { r: 255, g: 85, b: 85 };
const LARGE_FG: Color = Color::Rgb { r: 80, g: 200, b: 80 };

fn route(
    finder: &Pathfinder,
    field: &ClearanceField,
    agent: &AgentProfile,
    jumping: bool,
) -> Result<SearchResult, SearchError> {
    let cfg = SearchConfig::new(START, GOAL)
        .for_agent(agent)
        .with_jumping(jumping);
    let result = finder.search(field, &cfg)?;
    log::info!(
        "{} (unit {}, wall factor {}): expanded {}, goal score {}, overflows {}",
        agent.name,
        agent.unit_size,
        agent.wall_factor,
        result.expanded,
        result.goal_score(),
        result.overflows
    );
    Ok(result)
}

/// Route the small agent under every metric and every wall factor in its cycle.
fn sweep(grid: &ObstacleGrid, finder: &Pathfinder, opts: &Options) -> Result<(), SearchError> {
    println!("{:<10} {:>6} {:>8} {:>8}", "metric", "factor", "score", "length");
    let mut metric = opts.metric;
    let mut field = ClearanceField::build(grid, metric);
    for _ in Metric::ALL {
        let mut agent = AgentProfile::small();
        agent.wall_factor = 0;
        for _ in 0..AgentProfile::WALL_FACTOR_CYCLE {
            let cfg = SearchConfig::new(START, GOAL)
                .for_agent(&agent)
                .with_jumping(opts.jumping);
            let result = finder.search(&field, &cfg)?;
            println!(
                "{:<10} {:>6} {:>8} {:>8.2}",
                metric,
                agent.wall_factor,
                result.goal_score(),
                result.path.length()
            );
            agent.cycle_wall_factor();
        }
        metric = metric.next();
        field.set_metric(metric, grid);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Options::parse(std::env::args().skip(1))?;

    let mut grid = ObstacleGrid::new(WIDTH, HEIGHT);
    let mut rng = rand::rngs::StdRng::seed_from_u64(opts.seed);
    let blocked = scatter_blocks(&mut grid, &mut rng, &ScatterConfig::default());
    // Keep both endpoints usable by the largest agent.
    for p in [START, GOAL] {
        grid.fill_range(Range::new(p.x - 3, p.y - 3, p.x + 4, p.y + 4), false);
    }
    log::info!("seed {}, metric {}, {} blocked cells", opts.seed, opts.metric, blocked);

    let finder = Pathfinder::new(grid.bounds());
    log::debug!("jump table: {} offsets", finder.offsets().len());

    if opts.sweep {
        sweep(&grid, &finder, &opts)?;
        return Ok(());
    }

    let field = ClearanceField::build(&grid, opts.metric);

    let mut small = AgentProfile::small();
    if let Some(f) = opts.wall_factor {
        small.wall_factor = f;
    }
    let large = AgentProfile::large();
    let small_result = route(&finder, &field, &small, opts.jumping)?;
    let large_result = route(&finder, &field, &large, opts.jumping)?;

    let layer = match opts.show {
        None => Layer::Clearance(&field),
        Some(Show::Small) => Layer::Scores(&small_result.map),
        Some(Show::Large) => Layer::Scores(&large_result.map),
    };
    let overlays = [
        Overlay {
            path: &small_result.path,
            glyph: 'r',
            fg: SMALL_FG,
        },
        Overlay {
            path: &large_result.path,
            glyph: 'c',
            fg: LARGE_FG,
        },
    ];
    render::draw(&mut io::stdout(), &grid, layer, &overlays)?;

    for (agent, result) in [(&small, &small_result), (&large, &large_result)] {
        if result.found() {
            println!(
                "{}: {} cells, length {:.2}, score {} (max {})",
                agent.name,
                result.path.len(),
                result.path.length(),
                result.goal_score(),
                result.map.max_score()
            );
        } else {
            println!("{}: no path", agent.name);
        }
    }

    if let Some((agent, result)) = [(&small, &small_result), (&large, &large_result)]
        .into_iter()
        .find(|(_, r)| r.found())
    {
        let mut walker = PathWalker::default();
        let samples: Vec<String> = (0..5)
            .filter_map(|_| walker.advance(&result.path, 1.0))
            .map(|(x, y)| format!("({:.1}, {:.1})", x, y))
            .collect();
        println!("{} walking at {}/s: {}", agent.name, walker.speed(), samples.join(" "));
    }

    Ok(())
}
