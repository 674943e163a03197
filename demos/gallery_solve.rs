//! Solve shooting-gallery mazes from files or generated at random.
//!
//! Run: cargo run --bin gallery-solve -- maze.txt
//!      cargo run --bin gallery-solve -- --random 16x10 -n 5 --uniform-cost

use clap::Parser;
use flexi_logger::Logger;
use gallery_demos::{Args, solve_maze};
use gallery_maze::{GenConfig, Maze, MazeGen, MazeProblem};
use gallery_search::Solver;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let costs = args.costs();
    let mut solver = Solver::new(args.search_config());
    log::info!("strategy {:?}, costs {:?}", solver.config().strategy, costs);

    for path in &args.files {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("{}: {e}", path.display()))?;
        let maze = Maze::parse(&text).map_err(|e| format!("{}: {e}", path.display()))?;
        let problem = MazeProblem::with_costs(maze, costs);
        let outcome = solve_maze(&mut solver, &problem)?;
        println!("{}\n{}\n{outcome}\n", path.display(), problem.maze());
        log::info!("{}: {:?}", path.display(), outcome.stats);
    }

    if let Some(size) = args.random_size() {
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("generating {} {size} maze(s) with seed {seed}", args.count);
        let mut mg = MazeGen::new(StdRng::seed_from_u64(seed), GenConfig::default());
        for i in 0..args.count {
            let problem = MazeProblem::with_costs(mg.generate(size.width, size.height), costs);
            let outcome = solve_maze(&mut solver, &problem)?;
            println!("random #{i}\n{}\n{outcome}\n", problem.maze());
            log::info!("random #{i}: {:?}", outcome.stats);
        }
    }

    Ok(())
}
