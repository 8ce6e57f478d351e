//! Grid of walled cells

use std::fmt;

use itertools::Itertools;

use crate::error::MazeError;

/// Location of a cell in the grid
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Side of a cell
///
/// Rows grow downwards, so `Top` points towards row `0`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// Order in which neighbours are scanned during generation.
    ///
    /// Random draws index into candidates collected in this order, so changing
    /// it changes every seeded maze.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    fn wall_index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }
}

/// Single maze cell with four independent walls
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cell {
    position: Position,
    /// Wall flags in order top, right, bottom, left; `true` means present
    walls: [bool; 4],
}

impl Cell {
    fn new(position: Position) -> Self {
        Self {
            position,
            walls: [true; 4],
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.wall_index()]
    }

    pub fn top(&self) -> bool {
        self.has_wall(Direction::Top)
    }

    pub fn right(&self) -> bool {
        self.has_wall(Direction::Right)
    }

    pub fn bottom(&self) -> bool {
        self.has_wall(Direction::Bottom)
    }

    pub fn left(&self) -> bool {
        self.has_wall(Direction::Left)
    }

    fn remove_wall(&mut self, direction: Direction) {
        self.walls[direction.wall_index()] = false;
    }
}

/// Rectangular grid of cells, stored row by row
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell has all four walls.
    ///
    /// Returns [MazeError::InvalidDimension] if either dimension is zero.
    pub fn new(columns: usize, rows: usize) -> Result<Self, MazeError> {
        if columns == 0 || rows == 0 {
            return Err(MazeError::InvalidDimension { columns, rows });
        }
        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| Cell::new(Position::new(column, row))))
            .collect();
        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a grid has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).map(|i| &self.cells[i])
    }

    /// Where the player token is placed
    pub fn start(&self) -> Position {
        Position::new(0, 0)
    }

    /// Where the goal marker is placed
    pub fn goal(&self) -> Position {
        Position::new(self.columns - 1, self.rows - 1)
    }

    /// Flat index of `position`, or `None` outside the grid
    pub fn index(&self, position: Position) -> Option<usize> {
        (position.column < self.columns && position.row < self.rows)
            .then(|| position.row * self.columns + position.column)
    }

    /// Adjacent position in `direction`, bounds-checked
    pub fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        let Position { column, row } = position;
        let next = match direction {
            Direction::Top => Position::new(column, row.checked_sub(1)?),
            Direction::Right => Position::new(column + 1, row),
            Direction::Bottom => Position::new(column, row + 1),
            Direction::Left => Position::new(column.checked_sub(1)?, row),
        };
        self.index(next).map(|_| next)
    }

    /// Whether a token at `position` may step in `direction`.
    ///
    /// False on the grid border even though the outer wall is the only thing
    /// in the way there.
    pub fn is_open(&self, position: Position, direction: Direction) -> bool {
        match (self.cell(position), self.neighbour(position, direction)) {
            (Some(cell), Some(_)) => !cell.has_wall(direction),
            _ => false,
        }
    }

    /// Remove the wall shared by `position` and its neighbour in `direction`,
    /// on both sides.
    ///
    /// Returns the neighbour, or `None` (touching nothing) if there is none.
    pub(crate) fn carve(&mut self, position: Position, direction: Direction) -> Option<Position> {
        let next = self.neighbour(position, direction)?;
        let current_idx = self.index(position)?;
        let next_idx = self.index(next)?;
        self.cells[current_idx].remove_wall(direction);
        self.cells[next_idx].remove_wall(direction.opposite());
        Some(next)
    }

    /// Number of open shared walls, each counted once
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| self.is_open(cell.position, d))
                    .count()
            })
            .sum()
    }

    fn row_cells(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }
}

impl fmt::Display for Grid {
    /// Plain-text dump, one `+--+` band per wall line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let cells = self.row_cells(row);
            let top = cells
                .iter()
                .map(|c| if c.top() { "+--" } else { "+  " })
                .join("");
            writeln!(f, "{}+", top)?;

            let middle = cells
                .iter()
                .map(|c| if c.left() { "|  " } else { "   " })
                .join("");
            let edge = if cells.last().is_some_and(Cell::right) {
                "|"
            } else {
                " "
            };
            writeln!(f, "{}{}", middle, edge)?;
        }
        let bottom = self
            .row_cells(self.rows - 1)
            .iter()
            .map(|c| if c.bottom() { "+--" } else { "+  " })
            .join("");
        write!(f, "{}+", bottom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Direction, Grid, MazeError, Position};

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(MazeError::InvalidDimension {
                columns: 0,
                rows: 5
            })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn new_grid_is_fully_walled() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.passage_count(), 0);
        for cell in grid.cells() {
            assert!(cell.top() && cell.right() && cell.bottom() && cell.left());
        }
    }

    #[test]
    fn cells_are_stored_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.index(Position::new(2, 1)), Some(5));
        assert_eq!(grid.index(Position::new(3, 0)), None);
        assert_eq!(grid.cells()[4].position(), Position::new(1, 1));
        assert_eq!(grid.goal(), Position::new(2, 1));
    }

    #[test]
    fn neighbours_stay_inside_grid() {
        let grid = Grid::new(2, 2).unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(grid.neighbour(origin, Direction::Top), None);
        assert_eq!(grid.neighbour(origin, Direction::Left), None);
        assert_eq!(
            grid.neighbour(origin, Direction::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            grid.neighbour(origin, Direction::Bottom),
            Some(Position::new(0, 1))
        );
        assert_eq!(grid.neighbour(Position::new(1, 1), Direction::Right), None);
    }

    #[test]
    fn carving_opens_both_sides() {
        let mut grid = Grid::new(2, 2).unwrap();
        let next = grid.carve(Position::new(1, 1), Direction::Top);
        assert_eq!(next, Some(Position::new(1, 0)));

        assert!(!grid.cell(Position::new(1, 1)).unwrap().top());
        assert!(!grid.cell(Position::new(1, 0)).unwrap().bottom());
        assert!(grid.is_open(Position::new(1, 0), Direction::Bottom));
        assert_eq!(grid.passage_count(), 1);

        // Outer walls cannot be carved
        assert_eq!(grid.carve(Position::new(0, 0), Direction::Left), None);
        assert!(grid.cell(Position::new(0, 0)).unwrap().left());
    }

    #[test]
    fn display_draws_walls() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.carve(Position::new(0, 0), Direction::Right);
        assert_eq!(grid.to_string(), "+--+--+\n|     |\n+--+--+");
    }
}
