//! Path from the player's start to the goal

use log::debug;
use petgraph::algo::astar;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Position};

/// Route through the maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Visited positions, including start & end
    pub steps: Vec<Position>,
}

impl Solution {
    /// Number of moves the token makes
    pub fn step_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Print report
    pub fn print_report(&self) {
        println!("The goal is {} steps away.", self.step_count())
    }
}

impl Grid {
    /// Build an undirected graph with a node per cell and an edge per
    /// open wall.
    ///
    /// Node weights are cell positions; node indices match [Grid::index].
    pub fn to_graph(&self) -> UnGraph<Position, ()> {
        let mut graph = UnGraph::with_capacity(self.len(), self.len().saturating_sub(1));
        for cell in self.cells() {
            graph.add_node(cell.position());
        }
        for (a, cell) in self.cells().iter().enumerate() {
            // Right and bottom only, every wall is shared by two cells
            for direction in [Direction::Right, Direction::Bottom] {
                if !self.is_open(cell.position(), direction) {
                    continue;
                }
                let b = self
                    .neighbour(cell.position(), direction)
                    .and_then(|next| self.index(next));
                if let Some(b) = b {
                    graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
                }
            }
        }
        graph
    }

    /// Find the path from [Grid::start] to [Grid::goal]
    pub fn solve(&self) -> Result<Solution, MazeError> {
        self.solve_between(self.start(), self.goal())
    }

    /// Find the shortest path between two cells, crossing open walls only.
    ///
    /// In a generated maze this is the only path.
    pub fn solve_between(&self, from: Position, to: Position) -> Result<Solution, MazeError> {
        let unreachable = MazeError::Unreachable { from, to };
        let (Some(start), Some(goal)) = (self.index(from), self.index(to)) else {
            return Err(unreachable);
        };

        let graph = self.to_graph();
        let goal = NodeIndex::new(goal);
        let (cost, path) = astar(
            &graph,
            NodeIndex::new(start),
            |n| n == goal,
            |_| 1usize,
            |_| 0,
        )
        .ok_or(unreachable)?;
        debug!("path {} -> {} takes {} steps", from, to, cost);

        Ok(Solution {
            steps: path.into_iter().map(|n| graph[n]).collect(),
        })
    }
}
