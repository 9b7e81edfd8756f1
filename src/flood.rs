use tracing::{debug, trace};

use crate::{
    frontier::Frontier,
    grid::{Grid, SearchState},
    Direction, Error,
};

/// Breadth-first flood from every entrance at once.
///
/// Returns the frontier holding every record created, in discovery order, so
/// the caller can walk paths back from it.
pub fn flood(grid: &mut Grid) -> Result<Frontier, Error> {
    grid.ensure_populated()?;
    if grid.state() != SearchState::Unsolved {
        return Err(Error::AlreadySearched);
    }

    let entrances = grid.entrances();
    for pos in &entrances {
        let cell = grid.cell_at_mut(pos)?;
        cell.reach();
        cell.set_cost(0);
    }
    debug!(entrances_n = entrances.len(), "Seeded flood.");
    let mut frontier = Frontier::seed(entrances);

    // Records appended while scanning are picked up later by the same scan.
    let mut ind = 0;
    while ind < frontier.len() {
        let cur_pos = frontier[ind].pos().clone();
        let cur_cost = grid
            .cell_at(&cur_pos)?
            .cost()
            .ok_or_else(|| Error::InvalidGridState(cur_pos.clone()))?;
        for dir in Direction::flood_order() {
            let Some(next_pos) = grid.neighbor(&cur_pos, *dir) else {
                continue;
            };

            let next_cell = grid.cell_at_mut(&next_pos)?;
            if !next_cell.is_open() {
                continue;
            }

            next_cell.reach();
            if next_cell.cost().map_or(true, |cost| cur_cost + 1 < cost) {
                next_cell.set_cost(cur_cost + 1);
                trace!(
                    from = %cur_pos,
                    to = %next_pos,
                    cost = cur_cost + 1,
                    "Discovered cell."
                );
                frontier.append(ind, next_pos);
            }
        }
        ind += 1;
    }
    grid.set_state(SearchState::Flooded);

    Ok(frontier)
}
