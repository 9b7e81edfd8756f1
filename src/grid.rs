use crate::{Direction, Error, Position};

pub const MAX_ROWS: usize = 100;
pub const MAX_COLS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Wall,
    Open,
}

impl CellKind {
    pub fn glyph(&self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => '.',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    pos: Position,
    kind: CellKind,
    populated: bool,
    cost: Option<usize>, // None until the flood reaches this cell
    reachable: bool,
    on_solution_path: bool,
}

impl Cell {
    fn new(pos: Position) -> Self {
        Self {
            pos,
            kind: CellKind::Wall,
            populated: false,
            cost: None,
            reachable: false,
            on_solution_path: false,
        }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.kind == CellKind::Open
    }

    pub fn cost(&self) -> Option<usize> {
        self.cost
    }

    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    pub fn is_on_solution_path(&self) -> bool {
        self.on_solution_path
    }

    pub(crate) fn reach(&mut self) {
        self.reachable = true;
    }

    pub(crate) fn set_cost(&mut self, cost: usize) {
        self.cost = Some(cost);
    }

    pub(crate) fn mark_solution(&mut self) {
        self.on_solution_path = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Unsolved,
    Flooded,
    Solved,
}

#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: usize,
    state: SearchState,
    solution_cost: Option<usize>,
}

impl Grid {
    pub fn new(row_n: usize, col_n: usize) -> Result<Self, Error> {
        if row_n == 0 || col_n == 0 {
            return Err(Error::EmptyGrid);
        }
        if row_n > MAX_ROWS || col_n > MAX_COLS {
            return Err(Error::ExceedMaxSize(row_n, col_n));
        }

        let cells = (0..row_n)
            .flat_map(|r| (0..col_n).map(move |c| Cell::new(Position::new(r, c))))
            .collect();
        Ok(Self {
            cells,
            row_n,
            col_n,
            state: SearchState::Unsolved,
            solution_cost: None,
        })
    }

    pub fn row_count(&self) -> usize {
        self.row_n
    }

    pub fn col_count(&self) -> usize {
        self.col_n
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn has_solution(&self) -> bool {
        self.solution_cost.is_some()
    }

    pub fn solution_cost(&self) -> Option<usize> {
        self.solution_cost
    }

    pub fn cell_at(&self, pos: &Position) -> Result<&Cell, Error> {
        let ind = self.pos_to_ind(pos)?;
        Ok(&self.cells[ind])
    }

    pub fn cell_at_mut(&mut self, pos: &Position) -> Result<&mut Cell, Error> {
        let ind = self.pos_to_ind(pos)?;
        Ok(&mut self.cells[ind])
    }

    pub fn set_kind(&mut self, pos: &Position, kind: CellKind) -> Result<(), Error> {
        let cell = self.cell_at_mut(pos)?;
        cell.kind = kind;
        cell.populated = true;

        Ok(())
    }

    pub fn ensure_populated(&self) -> Result<(), Error> {
        match self.cells.iter().find(|cell| !cell.populated) {
            Some(cell) => Err(Error::InvalidGridState(cell.pos.clone())),
            None => Ok(()),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.col_n)
    }

    pub fn last_row(&self) -> &[Cell] {
        &self.cells[(self.row_n - 1) * self.col_n..]
    }

    /// Open cells of the first row, from left to right.
    pub fn entrances(&self) -> Vec<Position> {
        self.cells[..self.col_n]
            .iter()
            .filter(|cell| cell.is_open())
            .map(|cell| cell.pos.clone())
            .collect()
    }

    /// Steps one cell along `dir`, checking only the bound of the axis it moves on.
    pub fn neighbor(&self, pos: &Position, dir: Direction) -> Option<Position> {
        match dir {
            Direction::East if pos.c() + 1 < self.col_n => {
                Some(Position::new(pos.r(), pos.c() + 1))
            }
            Direction::South if pos.r() + 1 < self.row_n => {
                Some(Position::new(pos.r() + 1, pos.c()))
            }
            Direction::West if pos.c() > 0 => Some(Position::new(pos.r(), pos.c() - 1)),
            Direction::North if pos.r() > 0 => Some(Position::new(pos.r() - 1, pos.c())),
            _ => None,
        }
    }

    pub(crate) fn set_state(&mut self, state: SearchState) {
        self.state = state;
    }

    pub(crate) fn record_solution(&mut self, cost: Option<usize>) {
        self.solution_cost = cost;
        self.state = SearchState::Solved;
    }

    fn pos_to_ind(&self, pos: &Position) -> Result<usize, Error> {
        if pos.r() < self.row_n && pos.c() < self.col_n {
            Ok(pos.r() * self.col_n + pos.c())
        } else {
            Err(Error::OutOfBounds(pos.clone(), self.row_n, self.col_n))
        }
    }
}
