use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;
use tracing::{debug, info, Level};

pub mod flood;
pub mod frontier;
pub mod grid;
pub mod reader;
pub mod report;
pub mod solution;

pub use grid::{Cell, CellKind, Grid, SearchState, MAX_COLS, MAX_ROWS};
pub use reader::{parse_maze, read_maze, read_maze_file, MazeBuilder};
pub use report::{Report, Stage};
pub use solution::Solution;

#[derive(Debug)]
pub enum Error {
    OutOfBounds(Position, usize, usize), // (requested position, row count, column count)
    InvalidGridState(Position),
    ExceedMaxSize(usize, usize), // (row count, column count) that was asked for
    EmptyGrid,
    EmptyMaze,
    InconsistentRow(usize, usize),
    InvalidCharForMaze(char, Position),
    AlreadySearched,
    NotSearched,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfBounds(pos, row_n, col_n) => write!(
                f,
                "Position {} is out of the {}x{} grid.",
                pos, row_n, col_n
            ),
            Error::InvalidGridState(pos) => {
                write!(f, "Cell at {} has never been populated.", pos)
            }
            Error::ExceedMaxSize(row_n, col_n) => write!(
                f,
                "Expect a maze no larger than {}x{}, given {}x{}.",
                MAX_ROWS, MAX_COLS, row_n, col_n
            ),
            Error::EmptyGrid => write!(f, "Expect at least one row and one column in grid."),
            Error::EmptyMaze => write!(f, "No maze in given input."),
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForMaze(c, pos) => {
                write!(f, "Invalid character({}) at {} for maze.", c, pos)
            }
            Error::AlreadySearched => write!(f, "Given grid has been searched already."),
            Error::NotSearched => write!(f, "Given grid has not been searched yet."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Maze file to solve, read from standard input if omitted.
    pub input_path: Option<PathBuf>,
    /// Raise log verbosity, repeat for more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CLIArgs {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Axis directions, listed in the order the flood tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    pub fn flood_order() -> &'static [Direction] {
        static FLOOD_DIRECTIONS: [Direction; 4] = [
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::North,
        ];

        &FLOOD_DIRECTIONS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }
}

/// Floods the grid from every entrance, picks the cheapest exit on the last row
/// and marks the path leading to it.
///
/// The grid moves from [`SearchState::Unsolved`] to [`SearchState::Solved`];
/// solving it a second time is an error.
pub fn solve(grid: &mut Grid) -> Result<Solution, Error> {
    let frontier = flood::flood(grid)?;
    debug!(
        records_n = frontier.len(),
        "Flooded {}x{} grid.",
        grid.row_count(),
        grid.col_count()
    );

    let solution = match solution::find_exit(grid)? {
        Some((exit, cost)) => {
            let path_len = solution::mark_path(grid, &frontier, &exit)?
                .ok_or_else(|| Error::InvalidGridState(exit.clone()))?;
            debug!(%exit, cost, path_len, "Marked shortest path.");
            grid.record_solution(Some(cost));
            Solution::Exit {
                pos: exit,
                cost,
                path_len,
            }
        }
        None => {
            grid.record_solution(None);
            Solution::NoExit
        }
    };
    info!(has_solution = grid.has_solution(), "Solved maze.");

    Ok(solution)
}
