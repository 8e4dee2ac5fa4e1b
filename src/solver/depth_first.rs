use crate::board::Board;
use crate::search::{Frontier, SearchContext, Stack};
use crate::solver::GridSolver;

/// Depth-first search with a LIFO open list. Finds some connected path, not a short one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirstSolver;

impl GridSolver for DepthFirstSolver {
    type Frontier = Stack;

    fn name(&self) -> &'static str {
        "Depth First"
    }

    fn new_frontier(&self) -> Stack {
        Stack::default()
    }

    /// A neighbour is parented and pushed on first discovery only.
    fn expand(
        &self,
        _board: &Board,
        context: &mut SearchContext,
        open: &mut Stack,
        current: usize,
        neighbour: usize,
    ) {
        if !open.contains(neighbour) {
            context.scratch_mut(neighbour).parent = Some(current);
            open.push(neighbour, context);
        }
    }
}
