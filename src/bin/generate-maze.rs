//! CLI for maze generation

use clap::Parser;
use log::info;
use maze2d::MazeGenerator;

/// Perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell columns
    #[arg(long, default_value_t = 5)]
    columns: usize,

    /// Number of cell rows
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Also report the path from the top-left start to the bottom-right goal
    #[arg(short, long)]
    solve: bool,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen.generate(args.columns, args.rows)?;
    println!("{}", grid);

    if args.solve {
        let solution = grid.solve()?;
        info!("path: {:?}", solution.steps);
        solution.print_report();
    }
    Ok(())
}
