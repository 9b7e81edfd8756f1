use crate::{
    frontier::Frontier,
    grid::{Grid, SearchState},
    Error, Position,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    NoExit,
    Exit {
        pos: Position,
        cost: usize,
        path_len: usize, // Cells on the path, both ends included.
    },
}

impl Solution {
    pub fn cost(&self) -> Option<usize> {
        match self {
            Solution::NoExit => None,
            Solution::Exit { cost, .. } => Some(*cost),
        }
    }
}

/// Cheapest reachable open cell of the last row. The leftmost one wins a tie.
///
/// The grid must have been flooded first.
pub fn find_exit(grid: &Grid) -> Result<Option<(Position, usize)>, Error> {
    grid.ensure_populated()?;
    if grid.state() == SearchState::Unsolved {
        return Err(Error::NotSearched);
    }

    let mut best_exit: Option<(Position, usize)> = None;
    for cell in grid.last_row() {
        if !cell.is_open() || !cell.is_reachable() {
            continue;
        }

        let Some(cost) = cell.cost() else {
            continue;
        };
        if best_exit
            .as_ref()
            .map_or(true, |(_, best_cost)| cost < *best_cost)
        {
            best_exit = Some((cell.pos().clone(), cost));
        }
    }

    Ok(best_exit)
}

/// Marks the cells from `exit` back to its entrance as the solution path,
/// following the first record discovered for `exit`.
///
/// Returns the number of cells marked, or None if `exit` was never discovered.
pub fn mark_path(
    grid: &mut Grid,
    frontier: &Frontier,
    exit: &Position,
) -> Result<Option<usize>, Error> {
    let Some(exit_ind) = frontier.find(exit) else {
        return Ok(None);
    };

    let mut path_len = 0;
    for record in frontier.ancestors(exit_ind) {
        grid.cell_at_mut(record.pos())?.mark_solution();
        path_len += 1;
    }

    Ok(Some(path_len))
}
