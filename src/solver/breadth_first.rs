use crate::board::Board;
use crate::search::{Frontier, Queue, SearchContext};
use crate::solver::GridSolver;

/// Breadth-first search with a FIFO open list. Shortest by number of steps, cell costs are
/// ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl GridSolver for BreadthFirstSolver {
    type Frontier = Queue;

    fn name(&self) -> &'static str {
        "Breadth First"
    }

    fn new_frontier(&self) -> Queue {
        Queue::default()
    }

    fn expand(
        &self,
        _board: &Board,
        context: &mut SearchContext,
        open: &mut Queue,
        current: usize,
        neighbour: usize,
    ) {
        if !open.contains(neighbour) {
            context.scratch_mut(neighbour).parent = Some(current);
            open.push(neighbour, context);
        }
    }
}
