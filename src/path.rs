use grid_util::point::Point;

/// One cell of a found path, copied out of the board at the time of the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub position: Point,
    pub cost: i32,
}

/// The result of a single search: the route from start (exclusive) to destination
/// (inclusive), every node the search expanded, and the summed cost of the route.
///
/// An empty `steps` means no path exists, which is a normal outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<PathStep>,
    closed_nodes: Vec<usize>,
    cost: i32,
}

impl Path {
    pub fn new(steps: Vec<PathStep>, closed_nodes: Vec<usize>) -> Path {
        let cost = steps.iter().map(|s| s.cost).sum();
        Path {
            steps,
            closed_nodes,
            cost,
        }
    }
    /// A no-path result that still records which nodes were examined.
    pub fn unreached(closed_nodes: Vec<usize>) -> Path {
        Path::new(Vec::new(), closed_nodes)
    }
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }
    /// Grid indices of the expanded nodes, in expansion order.
    pub fn closed_nodes(&self) -> &[usize] {
        &self.closed_nodes
    }
    pub fn cost(&self) -> i32 {
        self.cost
    }
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn contains_step(&self, index: usize) -> bool {
        self.steps.iter().any(|s| s.index == index)
    }
}
