use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    grid::{CellKind, Grid, MAX_COLS, MAX_ROWS},
    Error, Position,
};

#[derive(Debug, Default)]
pub struct MazeBuilder {
    kinds: Vec<CellKind>,
    row_n: usize,
    col_n: Option<usize>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one row of text. A rejected row leaves the builder unchanged.
    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        if this_col_n > MAX_COLS || self.row_n >= MAX_ROWS {
            return Err(Error::ExceedMaxSize(self.row_n + 1, this_col_n));
        }
        if let Some(expect_col_n) = self.col_n.filter(|col_n| *col_n != this_col_n) {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        let row = text
            .chars()
            .enumerate()
            .map(|(ind, c)| match c {
                '#' => Ok(CellKind::Wall),
                '.' => Ok(CellKind::Open),
                other => Err(Error::InvalidCharForMaze(
                    other,
                    Position::new(self.row_n, ind),
                )),
            })
            .collect::<Result<Vec<_>, Error>>()?;
        self.kinds.extend(row);
        self.col_n = Some(this_col_n);
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Grid, Error> {
        let col_n = match self.col_n {
            Some(col_n) if self.row_n > 0 => col_n,
            _ => return Err(Error::EmptyMaze),
        };

        let mut grid = Grid::new(self.row_n, col_n)?;
        for (ind, kind) in self.kinds.into_iter().enumerate() {
            grid.set_kind(&Position::new(ind / col_n, ind % col_n), kind)?;
        }
        debug!("Read {}x{} maze.", grid.row_count(), grid.col_count());

        Ok(grid)
    }
}

/// Maze rows end at the first blank line, a trailing '\r' is ignored.
fn maze_row(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

pub fn parse_maze(text: &str) -> Result<Grid, Error> {
    let mut builder = MazeBuilder::new();
    for row in text.lines().map_while(maze_row) {
        builder.add_row(row)?;
    }

    builder.build()
}

pub fn read_maze<R: BufRead>(reader: R) -> Result<Grid> {
    let mut builder = MazeBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {} of maze.", ind + 1))?;
        let Some(row) = maze_row(&line) else {
            break;
        };
        builder
            .add_row(row)
            .with_context(|| format!("Failed to parse line {} of maze.", ind + 1))?;
    }

    Ok(builder.build()?)
}

pub fn read_maze_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    read_maze(BufReader::new(file)).with_context(|| {
        format!(
            "Failed to read maze from given file({}).",
            path.as_ref().display()
        )
    })
}
