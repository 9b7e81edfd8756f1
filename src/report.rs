use std::{
    fmt::{self, Display},
    io,
};

use crate::{
    grid::{Cell, Grid, SearchState},
    Error,
};

const REACHABLE: char = '+';
const UNREACHABLE: char = '-';
const PATH: char = '.';
const OFF_PATH: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Dimensions,
    Reachability,
    Costs,
    Solution,
}

impl Stage {
    pub fn number(&self) -> usize {
        match self {
            Stage::Dimensions => 1,
            Stage::Reachability => 2,
            Stage::Costs => 3,
            Stage::Solution => 4,
        }
    }
}

/// Text report of a searched grid, two characters per cell.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    grid: &'a Grid,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ind, stage) in self.stages().iter().enumerate() {
            if ind > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.stage(*stage))?;
        }

        Ok(())
    }
}

impl<'a> Report<'a> {
    /// Only a solved grid can be reported.
    pub fn new(grid: &'a Grid) -> Result<Self, Error> {
        if grid.state() != SearchState::Solved {
            return Err(Error::NotSearched);
        }

        Ok(Self { grid })
    }

    /// The solution stage is only reported for grids with a solution.
    pub fn stages(&self) -> &'static [Stage] {
        static ALL_STAGES: [Stage; 4] = [
            Stage::Dimensions,
            Stage::Reachability,
            Stage::Costs,
            Stage::Solution,
        ];

        if self.grid.has_solution() {
            &ALL_STAGES
        } else {
            &ALL_STAGES[..3]
        }
    }

    pub fn stage(&self, stage: Stage) -> StageReport<'a> {
        StageReport {
            grid: self.grid,
            stage,
        }
    }

    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StageReport<'a> {
    grid: &'a Grid,
    stage: Stage,
}

impl Display for StageReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stage {}", self.stage.number())?;
        writeln!(f, "=======")?;
        match (self.stage, self.grid.solution_cost()) {
            (Stage::Dimensions, _) => writeln!(
                f,
                "maze has {} rows and {} columns",
                self.grid.row_count(),
                self.grid.col_count()
            )?,
            (Stage::Reachability, Some(_)) => writeln!(f, "maze has a solution")?,
            (Stage::Costs, Some(cost)) => writeln!(f, "maze has solution with cost {}", cost)?,
            (Stage::Reachability | Stage::Costs, None) => writeln!(f, "maze has no solution")?,
            (Stage::Solution, _) => writeln!(f, "maze solution")?,
        }

        for row in self.grid.rows() {
            for cell in row {
                write_cell(f, cell, self.stage)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_cell(f: &mut fmt::Formatter<'_>, cell: &Cell, stage: Stage) -> fmt::Result {
    match stage {
        Stage::Dimensions => write_twice(f, cell.kind().glyph()),
        _ if !cell.is_open() => write_twice(f, cell.kind().glyph()),
        _ if !cell.is_reachable() => write_twice(f, UNREACHABLE),
        Stage::Reachability => write_twice(f, REACHABLE),
        Stage::Costs => write_cost(f, cell.cost(), REACHABLE),
        Stage::Solution if cell.is_on_solution_path() => write_cost(f, cell.cost(), PATH),
        Stage::Solution => write_twice(f, OFF_PATH),
    }
}

/// Even costs are shown as their last two digits, odd ones as `filler`.
fn write_cost(f: &mut fmt::Formatter<'_>, cost: Option<usize>, filler: char) -> fmt::Result {
    match cost {
        Some(cost) if cost % 2 == 0 => write!(f, "{:02}", cost % 100),
        _ => write_twice(f, filler),
    }
}

fn write_twice(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    write!(f, "{0}{0}", c)
}
