use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use maze_flood::{CLIArgs, Report, Solution};
use tracing::info;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_max_level(args.log_level())
        .init();

    let mut grid = match &args.input_path {
        Some(path) => maze_flood::read_maze_file(path).with_context(|| {
            format!("Failed to load maze from given file({}).", path.display())
        })?,
        None => maze_flood::read_maze(io::stdin().lock())
            .context("Failed to read maze from standard input.")?,
    };

    match maze_flood::solve(&mut grid).context("Failed to search given maze.")? {
        Solution::Exit {
            pos,
            cost,
            path_len,
        } => info!(
            "Found exit at {} with cost {}, {} cell(s) on its path.",
            pos, cost, path_len
        ),
        Solution::NoExit => info!("Given maze has no reachable exit."),
    }

    let mut stdout = io::stdout().lock();
    Report::new(&grid)
        .context("Failed to report given maze.")?
        .write_to(&mut stdout)
        .and_then(|_| stdout.flush())
        .context("Failed to write maze report.")?;

    Ok(())
}
