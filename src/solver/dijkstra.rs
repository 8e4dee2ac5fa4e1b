use crate::board::Board;
use crate::search::{CostHeap, Frontier, Queue, SearchContext};
use crate::solver::GridSolver;

/// How [DijkstraSolver] picks the next node to expand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DijkstraOrder {
    /// Plain queue order. Distances are tracked but do not steer the search, so the result is
    /// not guaranteed to be the cheapest path on weighted boards.
    #[default]
    Fifo,
    /// Lowest cumulative distance first, the textbook algorithm.
    CostOrdered,
}

/// Either open list, chosen at run time by [DijkstraOrder].
pub enum DijkstraFrontier {
    Fifo(Queue),
    CostOrdered(CostHeap),
}

impl Frontier for DijkstraFrontier {
    fn push(&mut self, ix: usize, context: &SearchContext) {
        match self {
            DijkstraFrontier::Fifo(queue) => queue.push(ix, context),
            DijkstraFrontier::CostOrdered(heap) => heap.push(ix, context),
        }
    }
    fn pop(&mut self, context: &SearchContext) -> Option<usize> {
        match self {
            DijkstraFrontier::Fifo(queue) => queue.pop(context),
            DijkstraFrontier::CostOrdered(heap) => heap.pop(context),
        }
    }
    fn contains(&self, ix: usize) -> bool {
        match self {
            DijkstraFrontier::Fifo(queue) => queue.contains(ix),
            DijkstraFrontier::CostOrdered(heap) => heap.contains(ix),
        }
    }
    fn is_empty(&self) -> bool {
        match self {
            DijkstraFrontier::Fifo(queue) => queue.is_empty(),
            DijkstraFrontier::CostOrdered(heap) => heap.is_empty(),
        }
    }
}

/// Cost search over the cumulative `distance` of each node, which grows by the extra cost of
/// every cell entered.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver {
    pub order: DijkstraOrder,
}

impl DijkstraSolver {
    pub fn new(order: DijkstraOrder) -> DijkstraSolver {
        DijkstraSolver { order }
    }
    pub fn cost_ordered() -> DijkstraSolver {
        DijkstraSolver::new(DijkstraOrder::CostOrdered)
    }
}

impl GridSolver for DijkstraSolver {
    type Frontier = DijkstraFrontier;

    fn name(&self) -> &'static str {
        "Dijkstras"
    }

    fn new_frontier(&self) -> DijkstraFrontier {
        match self.order {
            DijkstraOrder::Fifo => DijkstraFrontier::Fifo(Queue::default()),
            DijkstraOrder::CostOrdered => DijkstraFrontier::CostOrdered(CostHeap::default()),
        }
    }

    /// New nodes are admitted with the distance through `current`. A node already waiting in
    /// the open list is re-parented when `current` offers a strictly lower distance; the cost
    /// heap also gets a fresh entry for it.
    fn expand(
        &self,
        board: &Board,
        context: &mut SearchContext,
        open: &mut DijkstraFrontier,
        current: usize,
        neighbour: usize,
    ) {
        let distance = context.scratch(current).distance + board.node_at(neighbour).cost();
        let queued = open.contains(neighbour);
        if queued && distance >= context.scratch(neighbour).distance {
            return;
        }
        let scratch = context.scratch_mut(neighbour);
        scratch.parent = Some(current);
        scratch.distance = distance;
        if !queued || self.order == DijkstraOrder::CostOrdered {
            open.push(neighbour, context);
        }
    }
}
