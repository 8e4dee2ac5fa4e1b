//! Per-run search state and the open-list disciplines the solvers are built from.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::{IndexMap, IndexSet};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::board::Board;
use crate::path::{Path, PathStep};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Bookkeeping for one node during one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scratch {
    pub parent: Option<usize>,
    pub g: i32,
    pub h: i32,
    pub f: i32,
    /// Running cumulative cost.
    pub distance: i32,
}

impl Default for Scratch {
    fn default() -> Scratch {
        Scratch {
            parent: None,
            g: 0,
            h: 0,
            f: 0,
            distance: 1,
        }
    }
}

/// Side table of [Scratch] records keyed by grid index, plus the closed set in expansion order.
/// Allocated fresh for every search and dropped when the [Path] is built, so nothing leaks from
/// one run into the next.
#[derive(Clone, Debug)]
pub struct SearchContext {
    start: usize,
    goal: usize,
    scratch: FxIndexMap<usize, Scratch>,
    closed: FxIndexSet<usize>,
}

impl SearchContext {
    pub fn new(start: usize, goal: usize) -> SearchContext {
        let mut scratch = FxIndexMap::default();
        scratch.insert(start, Scratch::default());
        SearchContext {
            start,
            goal,
            scratch,
            closed: FxIndexSet::default(),
        }
    }
    pub fn start(&self) -> usize {
        self.start
    }
    pub fn goal(&self) -> usize {
        self.goal
    }
    /// The record of a node, or the default one if the search has not touched it yet.
    pub fn scratch(&self, ix: usize) -> Scratch {
        self.scratch.get(&ix).copied().unwrap_or_default()
    }
    pub fn scratch_mut(&mut self, ix: usize) -> &mut Scratch {
        self.scratch.entry(ix).or_default()
    }
    /// Adds the node to the closed set, returns false if it was already there.
    pub fn close(&mut self, ix: usize) -> bool {
        self.closed.insert(ix)
    }
    pub fn is_closed(&self, ix: usize) -> bool {
        self.closed.contains(&ix)
    }
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Follows parents back from `end` until the start, which is left out, and returns the
    /// indices in start to end order.
    fn reverse_path(&self, end: usize) -> Vec<usize> {
        let mut path: Vec<usize> = std::iter::successors(Some(end), |&ix| self.scratch(ix).parent)
            .take_while(|&ix| ix != self.start)
            .take(self.closed.len())
            .collect();
        path.reverse();
        path
    }

    /// Builds the result for a search that closed the goal.
    pub fn into_path(self, board: &Board) -> Path {
        let steps = self
            .reverse_path(self.goal)
            .into_iter()
            .map(|ix| {
                let node = board.node_at(ix);
                PathStep {
                    index: ix,
                    position: node.position(),
                    cost: node.cost(),
                }
            })
            .collect();
        Path::new(steps, self.closed.into_iter().collect())
    }

    /// Builds the result for a search that ran out of open nodes.
    pub fn into_unreached(self) -> Path {
        Path::unreached(self.closed.into_iter().collect())
    }
}

/// The open list. Implementations differ only in which node [pop](Frontier::pop) hands out.
pub trait Frontier {
    fn push(&mut self, ix: usize, context: &SearchContext);
    fn pop(&mut self, context: &SearchContext) -> Option<usize>;
    fn contains(&self, ix: usize) -> bool;
    fn is_empty(&self) -> bool;
}

/// Last in, first out.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    nodes: Vec<usize>,
}

impl Frontier for Stack {
    fn push(&mut self, ix: usize, _: &SearchContext) {
        self.nodes.push(ix);
    }
    fn pop(&mut self, _: &SearchContext) -> Option<usize> {
        self.nodes.pop()
    }
    fn contains(&self, ix: usize) -> bool {
        self.nodes.contains(&ix)
    }
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// First in, first out.
#[derive(Clone, Debug, Default)]
pub struct Queue {
    nodes: VecDeque<usize>,
}

impl Frontier for Queue {
    fn push(&mut self, ix: usize, _: &SearchContext) {
        self.nodes.push_back(ix);
    }
    fn pop(&mut self, _: &SearchContext) -> Option<usize> {
        self.nodes.pop_front()
    }
    fn contains(&self, ix: usize) -> bool {
        self.nodes.contains(&ix)
    }
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Unordered list scanned for the lowest `f` on every pop. On ties the node that entered the
/// list first wins.
#[derive(Clone, Debug, Default)]
pub struct LowestScore {
    nodes: Vec<usize>,
}

impl Frontier for LowestScore {
    fn push(&mut self, ix: usize, _: &SearchContext) {
        self.nodes.push(ix);
    }
    fn pop(&mut self, context: &SearchContext) -> Option<usize> {
        let mut chosen: Option<(usize, i32)> = None;
        for (pos, &ix) in self.nodes.iter().enumerate() {
            let f = context.scratch(ix).f;
            if chosen.map_or(true, |(_, best)| f < best) {
                chosen = Some((pos, f));
            }
        }
        chosen.map(|(pos, _)| self.nodes.remove(pos))
    }
    fn contains(&self, ix: usize) -> bool {
        self.nodes.contains(&ix)
    }
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

struct SmallestCostHolder<K> {
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest cost first, earliest push among equal costs
        match other.cost.cmp(&self.cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Binary heap ordered by the cumulative `distance` recorded at push time. Pushing a node again
/// with a lower distance leaves the old entry in the heap; it is skipped once the node has been
/// handed out.
#[derive(Default)]
pub struct CostHeap {
    heap: BinaryHeap<SmallestCostHolder<i32>>,
    members: FxHashSet<usize>,
    pushed: usize,
}

impl Frontier for CostHeap {
    fn push(&mut self, ix: usize, context: &SearchContext) {
        self.heap.push(SmallestCostHolder {
            cost: context.scratch(ix).distance,
            sequence: self.pushed,
            index: ix,
        });
        self.pushed += 1;
        self.members.insert(ix);
    }
    fn pop(&mut self, _: &SearchContext) -> Option<usize> {
        while let Some(SmallestCostHolder { index, .. }) = self.heap.pop() {
            if self.members.remove(&index) {
                return Some(index);
            }
        }
        None
    }
    fn contains(&self, ix: usize) -> bool {
        self.members.contains(&ix)
    }
    fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier>(frontier: &mut F, context: &SearchContext) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop(context)).collect()
    }

    #[test]
    fn stack_and_queue_order() {
        let context = SearchContext::new(0, 9);
        let mut stack = Stack::default();
        let mut queue = Queue::default();
        for ix in [3, 1, 2] {
            stack.push(ix, &context);
            queue.push(ix, &context);
        }
        assert!(stack.contains(1) && queue.contains(2));
        assert_eq!(drain(&mut stack, &context), vec![2, 1, 3]);
        assert_eq!(drain(&mut queue, &context), vec![3, 1, 2]);
        assert!(stack.is_empty() && queue.is_empty());
    }

    #[test]
    fn lowest_score_prefers_first_on_ties() {
        let mut context = SearchContext::new(0, 9);
        for (ix, f) in [(4, 7), (5, 3), (6, 3), (7, 1)] {
            context.scratch_mut(ix).f = f;
        }
        let mut open = LowestScore::default();
        for ix in [4, 5, 6, 7] {
            open.push(ix, &context);
        }
        assert_eq!(drain(&mut open, &context), vec![7, 5, 6, 4]);
    }

    #[test]
    fn cost_heap_skips_superseded_entries() {
        let mut context = SearchContext::new(0, 9);
        let mut open = CostHeap::default();
        context.scratch_mut(1).distance = 5;
        open.push(1, &context);
        context.scratch_mut(2).distance = 3;
        open.push(2, &context);
        context.scratch_mut(3).distance = 3;
        open.push(3, &context);
        context.scratch_mut(1).distance = 2;
        open.push(1, &context);
        assert_eq!(drain(&mut open, &context), vec![1, 2, 3]);
        assert!(open.is_empty());
    }

    #[test]
    fn scratch_defaults_and_closing() {
        let mut context = SearchContext::new(4, 8);
        assert_eq!(context.scratch(4), Scratch::default());
        assert_eq!(context.scratch(17).distance, 1);
        assert!(context.scratch(17).parent.is_none());
        assert!(context.close(4));
        assert!(!context.close(4));
        assert!(context.is_closed(4));
        assert_eq!(context.closed_count(), 1);
    }

    #[test]
    fn reverse_path_leaves_out_the_start() {
        let mut context = SearchContext::new(0, 3);
        for ix in 0..4 {
            context.close(ix);
        }
        for (ix, parent) in [(1, 0), (2, 1), (3, 2)] {
            context.scratch_mut(ix).parent = Some(parent);
        }
        assert_eq!(context.reverse_path(3), vec![1, 2, 3]);
    }
}
