use crate::board::Board;
use crate::heuristic_distance;
use crate::search::{Frontier, LowestScore, SearchContext};
use crate::solver::GridSolver;

/// Best-first search on `F = G + H`, taking the open node with the lowest `F` (first come on
/// ties).
///
/// `G` is the heuristic distance from the start to the candidate plus the candidate's cost, not
/// the cost accumulated along the parents, so the result approximates rather than guarantees
/// the cheapest path. `H` is the heuristic distance to the destination.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    type Frontier = LowestScore;

    fn name(&self) -> &'static str {
        "A Star"
    }

    fn new_frontier(&self) -> LowestScore {
        LowestScore::default()
    }

    fn seed(&self, board: &Board, context: &mut SearchContext) {
        let h = heuristic_distance(
            board.node_at(context.start()).position(),
            board.node_at(context.goal()).position(),
        );
        let start = context.start();
        let scratch = context.scratch_mut(start);
        scratch.g = 0;
        scratch.h = h;
        scratch.f = h;
    }

    /// Records the scores of the neighbour and admits it with `current` as parent. If it is
    /// already open, `current` becomes the parent when the recorded `F` is worse than going
    /// through `current`.
    fn expand(
        &self,
        board: &Board,
        context: &mut SearchContext,
        open: &mut LowestScore,
        current: usize,
        neighbour: usize,
    ) {
        let node = board.node_at(neighbour);
        let g = heuristic_distance(board.node_at(context.start()).position(), node.position())
            + node.cost();
        let h = heuristic_distance(node.position(), board.node_at(context.goal()).position());
        let current_g = context.scratch(current).g;
        let queued = open.contains(neighbour);
        let scratch = context.scratch_mut(neighbour);
        if !queued || scratch.f > h + current_g {
            scratch.parent = Some(current);
        }
        scratch.g = g;
        scratch.h = h;
        scratch.f = g + h;
        if !queued {
            open.push(neighbour, context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::breadth_first::BreadthFirstSolver;

    fn positions(path: &crate::path::Path) -> Vec<(i32, i32)> {
        path.steps()
            .iter()
            .map(|s| (s.position.x, s.position.y))
            .collect()
    }

    #[test]
    fn stays_inside_the_bounding_box() {
        let board =
            Board::from_layout(&["XXXXX", "XS--X", "X---X", "X--DX", "XXXXX"]).unwrap();
        let path = AstarSolver.get_path(&board);
        assert_eq!(positions(&path), vec![(2, 1), (3, 1), (3, 2), (3, 3)]);
        assert_eq!(path.closed_nodes().len(), 9);
    }

    #[test]
    fn checks_fewer_nodes_than_breadth_first() {
        let board = Board::from_layout(&[
            "XXXXXXX", //
            "X-----X",
            "X-----X",
            "XS---DX",
            "X-----X",
            "X-----X",
            "XXXXXXX",
        ])
        .unwrap();
        let astar = AstarSolver.get_path(&board);
        let bfs = BreadthFirstSolver.get_path(&board);
        assert_eq!(positions(&astar), vec![(2, 3), (3, 3), (4, 3), (5, 3)]);
        assert_eq!(astar.closed_nodes().len(), 5);
        assert!(bfs.closed_nodes().len() > astar.closed_nodes().len());
    }

    #[test]
    fn walks_around_an_obstacle() {
        let board = Board::from_layout(&[
            "XXXXXXX", //
            "X-----X",
            "XS-X-DX",
            "X-----X",
            "XXXXXXX",
        ])
        .unwrap();
        let path = AstarSolver.get_path(&board);
        assert_eq!(path.len(), 6);
        assert!(!path.contains_step(board.index_of(3, 2).unwrap()));
    }
}
