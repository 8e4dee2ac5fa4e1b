use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

/// What a cell currently is. Every type has its own mark on the rendered board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    Wall,
    Floor,
    Start,
    Destination,
    Path,
    Checked,
}

impl NodeType {
    pub fn mark(self) -> char {
        match self {
            NodeType::Wall => 'X',
            NodeType::Floor => '-',
            NodeType::Start => 'S',
            NodeType::Destination => 'D',
            NodeType::Path => '*',
            NodeType::Checked => '~',
        }
    }

    /// Inverse of [mark](Self::mark).
    pub fn from_mark(mark: char) -> Option<NodeType> {
        match mark {
            'X' => Some(NodeType::Wall),
            '-' => Some(NodeType::Floor),
            'S' => Some(NodeType::Start),
            'D' => Some(NodeType::Destination),
            '*' => Some(NodeType::Path),
            '~' => Some(NodeType::Checked),
            _ => None,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A single cell of a [Board](crate::board::Board).
///
/// Position and cost are fixed when the board is built. The neighbours are indices into the
/// board's grid and are only filled in once every cell exists. Search bookkeeping (parent,
/// G/H/F, distance) lives in [SearchContext](crate::search::SearchContext) for one run only.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) node_type: NodeType,
    pub(crate) position: Point,
    pub(crate) cost: i32,
    pub(crate) neighbours: SmallVec<[usize; 4]>,
}

impl Node {
    pub(crate) fn new(node_type: NodeType, x: i32, y: i32, cost: i32) -> Node {
        debug_assert!(cost >= 0);
        Node {
            node_type,
            position: Point::new(x, y),
            cost,
            neighbours: SmallVec::new(),
        }
    }
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }
    pub fn position(&self) -> Point {
        self.position
    }
    pub fn x(&self) -> i32 {
        self.position.x
    }
    pub fn y(&self) -> i32 {
        self.position.y
    }
    /// Extra cost paid for stepping onto this cell.
    pub fn cost(&self) -> i32 {
        self.cost
    }
    /// Grid indices of the orthogonally adjacent in-bounds cells.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }
    pub fn is_wall(&self) -> bool {
        self.node_type == NodeType::Wall
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.node_type)
    }
}
