use crate::board::Board;
use crate::path::Path;
use crate::search::{Frontier, SearchContext};
use core::fmt;
use indexmap::IndexMap;
use log::{debug, info, warn};

pub mod astar;
pub mod breadth_first;
pub mod depth_first;
pub mod dijkstra;

use astar::AstarSolver;
use breadth_first::BreadthFirstSolver;
use depth_first::DepthFirstSolver;
use dijkstra::DijkstraSolver;

/// A search from the board's start to its destination. Implementors choose the open-list
/// discipline and how a neighbour is admitted; the loop itself is shared.
pub trait GridSolver {
    type Frontier: Frontier;

    fn name(&self) -> &'static str;

    fn new_frontier(&self) -> Self::Frontier;

    /// Prepares the start's record before it enters the open list.
    fn seed(&self, _board: &Board, _context: &mut SearchContext) {}

    /// Frontier expansion for one neighbour of `current` that is neither a wall nor closed.
    fn expand(
        &self,
        board: &Board,
        context: &mut SearchContext,
        open: &mut Self::Frontier,
        current: usize,
        neighbour: usize,
    );

    /// Runs the search. Returns an empty [Path] if the destination cannot be reached, or if the
    /// board has no start or destination configured.
    fn get_path(&self, board: &Board) -> Path {
        let (Some(start), Some(goal)) = (board.starting_index(), board.destination_index()) else {
            warn!("{}: start and destination must be set before searching", self.name());
            return Path::default();
        };
        let mut context = SearchContext::new(start, goal);
        self.seed(board, &mut context);
        let mut open = self.new_frontier();
        open.push(start, &context);
        while let Some(current) = open.pop(&context) {
            if !context.close(current) {
                continue;
            }
            if current == goal {
                let path = context.into_path(board);
                info!(
                    "{} found a path of {} steps, cost {}, {} nodes checked",
                    self.name(),
                    path.len(),
                    path.cost(),
                    path.closed_nodes().len()
                );
                return path;
            }
            for &neighbour in board.neighbours(current) {
                if board.node_at(neighbour).is_wall() || context.is_closed(neighbour) {
                    continue;
                }
                self.expand(board, &mut context, &mut open, current, neighbour);
            }
        }
        debug!(
            "{} exhausted the open list after {} expansions",
            self.name(),
            context.closed_count()
        );
        info!("{}: no path found", self.name());
        context.into_unreached()
    }
}

/// The available searches, tagged by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => DepthFirstSolver.name(),
            Algorithm::BreadthFirst => BreadthFirstSolver.name(),
            Algorithm::Dijkstra => DijkstraSolver::default().name(),
            Algorithm::AStar => AstarSolver.name(),
        }
    }

    /// Runs the algorithm with its default settings.
    pub fn get_path(self, board: &Board) -> Path {
        match self {
            Algorithm::DepthFirst => DepthFirstSolver.get_path(board),
            Algorithm::BreadthFirst => BreadthFirstSolver.get_path(board),
            Algorithm::Dijkstra => DijkstraSolver::default().get_path(board),
            Algorithm::AStar => AstarSolver.get_path(board),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Menu numbers mapped to algorithms. Built once by the driver and passed to whatever needs to
/// list or pick a search.
#[derive(Clone, Debug, Default)]
pub struct SolverRegistry {
    entries: IndexMap<usize, Algorithm>,
}

impl SolverRegistry {
    /// An empty registry, same as [Default].
    pub fn new() -> SolverRegistry {
        SolverRegistry::default()
    }
    /// All four algorithms, numbered 0 to 3 in the order of [Algorithm::ALL].
    pub fn standard() -> SolverRegistry {
        let mut registry = SolverRegistry::new();
        for algorithm in Algorithm::ALL {
            registry.register(algorithm);
        }
        registry
    }
    /// Adds the algorithm under the next free number and returns that number.
    pub fn register(&mut self, algorithm: Algorithm) -> usize {
        let number = self.entries.len();
        self.entries.insert(number, algorithm);
        number
    }
    pub fn get(&self, number: usize) -> Option<Algorithm> {
        self.entries.get(&number).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, Algorithm)> + '_ {
        self.entries.iter().map(|(&n, &a)| (n, a))
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
