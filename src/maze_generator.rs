//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Position};

/// Perfect maze generator using the randomized backtracker.
///
/// The random source is owned by the generator, so consecutive calls to
/// [Self::generate] continue the same random sequence.
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Generator seeded from `seed`, or from entropy when `None`
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Generator drawing from an arbitrary random source
    pub fn with_rng(random: R) -> Self {
        Self { random }
    }

    /// Generate a `columns` × `rows` maze.
    ///
    /// Every cell is reachable from every other cell through exactly one
    /// path. Returns [MazeError::InvalidDimension] if either dimension is
    /// zero.
    pub fn generate(&mut self, columns: usize, rows: usize) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(columns, rows)?;
        self.build_maze(&mut grid);
        debug!(
            "generated {}x{} maze with {} passages",
            columns,
            rows,
            grid.passage_count()
        );
        Ok(grid)
    }

    /// Carve passages from the start cell with an explicit stack.
    ///
    /// Advance into a random unvisited neighbour while there is one, and
    /// back up along the stack when there is not.
    fn build_maze(&mut self, grid: &mut Grid) {
        let mut visited = vec![false; grid.len()];
        let start = grid.start();
        visited[0] = true;

        let mut stack: Vec<Position> = vec![start];
        let mut current = start;
        loop {
            let candidates: Vec<Direction> = Direction::SCAN_ORDER
                .into_iter()
                .filter(|&d| {
                    grid.neighbour(current, d)
                        .and_then(|next| grid.index(next))
                        .is_some_and(|i| !visited[i])
                })
                .collect();

            if candidates.is_empty() {
                match stack.pop() {
                    Some(previous) => {
                        trace!("backtrack {} -> {}", current, previous);
                        current = previous;
                    }
                    None => break,
                }
                continue;
            }

            let direction = candidates[self.random.gen_range(0..candidates.len())];
            if let Some(next) = grid.carve(current, direction) {
                if let Some(i) = grid.index(next) {
                    visited[i] = true;
                }
                stack.push(current);
                current = next;
            }
        }
    }
}

/// Generate a maze with a fresh [MazeGenerator]
///
/// Same `seed` and dimensions always give the same maze.
pub fn generate(columns: usize, rows: usize, seed: Option<u64>) -> Result<Grid, MazeError> {
    MazeGenerator::new(seed).generate(columns, rows)
}
