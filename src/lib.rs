//! Perfect grid mazes carved by randomized backtracking
//!
//! A maze is a [Grid] of cells with four walls each. Generation starts
//! with every wall in place and removes walls until every cell can reach
//! every other cell through exactly one path.
//!
//! # Examples
//! ## Seeded maze
//! ```
//! use maze2d::{generate, Position};
//!
//! let grid = generate(5, 5, Some(2024)).unwrap();
//! assert_eq!(grid.passage_count(), 5 * 5 - 1);
//!
//! let origin = grid.cell(Position::new(0, 0)).unwrap();
//! assert!(origin.top() && origin.left());
//! println!("{}", grid);
//! ```
//!
//! ## Path to the goal
//! ```
//! use maze2d::MazeGenerator;
//!
//! let mut gen = MazeGenerator::new(Some(7));
//! let grid = gen.generate(6, 4).unwrap();
//! let solution = grid.solve().unwrap();
//! assert_eq!(solution.steps.first(), Some(&grid.start()));
//! assert_eq!(solution.steps.last(), Some(&grid.goal()));
//! solution.print_report();
//! ```

pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod solver;

pub use error::MazeError;
pub use grid::{Cell, Direction, Grid, Position};
pub use maze_generator::{generate, MazeGenerator};
pub use solver::Solution;
