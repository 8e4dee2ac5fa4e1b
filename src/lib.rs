//! # grid_search
//!
//! Search algorithms on a 4-connected grid of cells. A [Board] is generated with walls around
//! the border and random walls inside, a start and destination are placed on it, and one of
//! four searches produces a [Path]:
//!
//! - [depth-first](solver::depth_first::DepthFirstSolver), which finds some path,
//! - [breadth-first](solver::breadth_first::BreadthFirstSolver), shortest by number of steps,
//! - [Dijkstra](solver::dijkstra::DijkstraSolver), guided by the cumulative extra cost of the
//!   cells, either in plain queue order or properly cost ordered,
//! - [A*](solver::astar::AstarSolver), best-first on a
//!   [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) estimate.
//!
//! The path and the nodes a search checked can be drawn back onto the board.
//!
//! ```
//! use grid_search::{Algorithm, Board};
//!
//! let mut board = Board::from_layout(&["XXXXX", "X---X", "X-X-X", "X---X", "XXXXX"]).unwrap();
//! board.place_start(1, 1).unwrap();
//! board.place_destination(3, 3).unwrap();
//! let path = Algorithm::BreadthFirst.get_path(&board);
//! assert_eq!(path.len(), 4);
//! board.mark_checked_nodes(&path);
//! board.mark_path(&path);
//! println!("{}", board.render_with_header());
//! ```
pub mod board;
pub mod error;
pub mod node;
pub mod path;
pub mod search;
pub mod solver;

use grid_util::point::Point;

pub use board::{Board, BoardConfig};
pub use error::BoardError;
pub use node::{Node, NodeType};
pub use path::{Path, PathStep};
pub use solver::{Algorithm, GridSolver, SolverRegistry};

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;
/// Chance for an interior cell to be generated as a wall.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.15;

/// Taxicab distance between two cells, each axis difference taken absolute on its own.
pub fn heuristic_distance(p1: Point, p2: Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}
