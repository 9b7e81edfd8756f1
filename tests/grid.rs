use maze_flood::{CellKind, Direction, Error, Grid, Position, SearchState, MAX_COLS, MAX_ROWS};

#[test]
fn new_grid_starts_unvisited() {
    let grid = Grid::new(3, 4).unwrap();
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.col_count(), 4);
    assert_eq!(grid.state(), SearchState::Unsolved);
    assert!(!grid.has_solution());
    assert_eq!(grid.solution_cost(), None);
    assert_eq!(grid.cells().count(), 12);
    assert!(grid
        .cells()
        .all(|cell| cell.cost().is_none() && !cell.is_reachable() && !cell.is_on_solution_path()));
}

#[test]
fn new_grid_rejects_bad_sizes() {
    assert!(matches!(Grid::new(0, 3), Err(Error::EmptyGrid)));
    assert!(matches!(Grid::new(3, 0), Err(Error::EmptyGrid)));
    assert!(matches!(
        Grid::new(MAX_ROWS + 1, 3),
        Err(Error::ExceedMaxSize(101, 3))
    ));
    assert!(matches!(
        Grid::new(3, MAX_COLS + 1),
        Err(Error::ExceedMaxSize(3, 101))
    ));
    assert!(Grid::new(MAX_ROWS, MAX_COLS).is_ok());
}

#[test]
fn cell_at_fails_outside_grid() {
    let grid = Grid::new(2, 3).unwrap();
    assert_eq!(grid.cell_at(&Position::new(1, 2)).unwrap().pos(), &Position::new(1, 2));
    assert!(matches!(
        grid.cell_at(&Position::new(2, 0)),
        Err(Error::OutOfBounds(_, 2, 3))
    ));
    assert!(matches!(
        grid.cell_at(&Position::new(0, 3)),
        Err(Error::OutOfBounds(_, 2, 3))
    ));
}

#[test]
fn unpopulated_grid_is_invalid() {
    let mut grid = Grid::new(1, 2).unwrap();
    grid.set_kind(&Position::new(0, 0), CellKind::Open).unwrap();
    match grid.ensure_populated() {
        Err(Error::InvalidGridState(pos)) => assert_eq!(pos, Position::new(0, 1)),
        other => panic!("Expect invalid grid state, given {:?}.", other),
    }

    grid.set_kind(&Position::new(0, 1), CellKind::Wall).unwrap();
    assert!(grid.ensure_populated().is_ok());
    assert!(maze_flood::solve(&mut Grid::new(2, 2).unwrap()).is_err());
}

#[test]
fn neighbor_checks_only_moving_axis() {
    let grid = Grid::new(2, 3).unwrap();
    let corner = Position::new(0, 0);
    assert_eq!(grid.neighbor(&corner, Direction::North), None);
    assert_eq!(grid.neighbor(&corner, Direction::West), None);
    assert_eq!(
        grid.neighbor(&corner, Direction::East),
        Some(Position::new(0, 1))
    );
    assert_eq!(
        grid.neighbor(&corner, Direction::South),
        Some(Position::new(1, 0))
    );

    let far_corner = Position::new(1, 2);
    assert_eq!(grid.neighbor(&far_corner, Direction::East), None);
    assert_eq!(grid.neighbor(&far_corner, Direction::South), None);
    assert_eq!(
        grid.neighbor(&far_corner, Direction::West),
        Some(Position::new(1, 1))
    );
    assert_eq!(
        grid.neighbor(&far_corner, Direction::North),
        Some(Position::new(0, 2))
    );
}

#[test]
fn entrances_are_open_cells_of_first_row() {
    let grid = maze_flood::parse_maze(".#..\n....").unwrap();
    assert_eq!(
        grid.entrances(),
        vec![
            Position::new(0, 0),
            Position::new(0, 2),
            Position::new(0, 3)
        ]
    );
    assert_eq!(grid.last_row().len(), 4);
    assert!(grid.last_row().iter().all(|cell| cell.pos().r() == 1));
}
