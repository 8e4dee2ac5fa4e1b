use crate::error::BoardError;
use crate::node::{Node, NodeType};
use crate::path::Path;
use crate::{DEFAULT_HEIGHT, DEFAULT_WALL_PROBABILITY, DEFAULT_WIDTH};
use core::fmt;
use itertools::{iproduct, Itertools};
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

/// Parameters for [Board::from_config].
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    /// Chance for an interior cell to become a wall.
    pub wall_probability: f64,
    /// Upper bound (inclusive) of the random extra cost of a cell.
    pub max_cost: i32,
    /// Seeds the generator; boards are only reproducible when this is set.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            max_cost: 0,
            seed: None,
        }
    }
}

/// [Board] owns a `height × width` grid of [Node]s stored row by row, the configured start and
/// destination, and the connected components of the non-wall cells kept in a [UnionFind].
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    starting_node: Option<usize>,
    destination_node: Option<usize>,
    components: UnionFind<usize>,
    max_cost: i32,
    rng: StdRng,
}

impl Default for Board {
    fn default() -> Board {
        Board::new(None)
    }
}

impl Board {
    /// An empty board. Call [generate](Self::generate) to fill it.
    pub fn new(seed: Option<u64>) -> Board {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Board {
            width: 0,
            height: 0,
            nodes: Vec::new(),
            starting_node: None,
            destination_node: None,
            components: UnionFind::new(0),
            max_cost: 0,
            rng,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Result<Board, BoardError> {
        let mut board = Board::new(config.seed);
        board.max_cost = config.max_cost;
        board.generate(config.width, config.height, config.wall_probability)?;
        Ok(board)
    }

    /// Builds a board from rows of marks (`X - S D * ~`). A digit stands for a floor cell with
    /// that extra cost. `S` and `D` configure the start and destination and may appear once each.
    pub fn from_layout(rows: &[&str]) -> Result<Board, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let mut board = Board::new(Some(0));
        board.width = width;
        board.height = height;
        board.nodes = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(BoardError::RaggedLayout {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, mark) in row.chars().enumerate() {
                let (node_type, cost) = match (NodeType::from_mark(mark), mark.to_digit(10)) {
                    (Some(node_type), _) => (node_type, 0),
                    (None, Some(cost)) => (NodeType::Floor, cost as i32),
                    (None, None) => return Err(BoardError::UnknownMark { mark, x, y }),
                };
                let ix = board.nodes.len();
                let marker = match node_type {
                    NodeType::Start => Some(&mut board.starting_node),
                    NodeType::Destination => Some(&mut board.destination_node),
                    _ => None,
                };
                if marker.is_some_and(|m| m.replace(ix).is_some()) {
                    return Err(BoardError::DuplicateMarker { mark, x, y });
                }
                board
                    .nodes
                    .push(Node::new(node_type, x as i32, y as i32, cost));
            }
        }
        board.link_neighbours();
        board.generate_components();
        Ok(board)
    }

    /// Replaces the grid with a freshly generated one. Border cells are walls, interior cells
    /// are walls with probability `wall_probability` and floor otherwise. Neighbours are linked in
    /// a second pass since every cell has to exist first.
    ///
    /// Fails with [BoardError::InvalidCost] if the configured max cost is negative or a board
    /// full of max cost cells would overflow an `i32` total.
    pub fn generate(
        &mut self,
        width: usize,
        height: usize,
        wall_probability: f64,
    ) -> Result<(), BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        if !(0.0..=1.0).contains(&wall_probability) {
            return Err(BoardError::InvalidProbability(wall_probability));
        }
        // Every cell at max cost plus the search's starting distance of 1 must fit in an i32
        let total = i32::try_from(width)
            .ok()
            .and_then(|w| w.checked_mul(i32::try_from(height).ok()?))
            .and_then(|cells| cells.checked_mul(self.max_cost))
            .and_then(|total| total.checked_add(1));
        if self.max_cost < 0 || total.is_none() {
            return Err(BoardError::InvalidCost {
                max_cost: self.max_cost,
                width,
                height,
            });
        }
        info!("Generating {}x{} board", width, height);
        self.width = width;
        self.height = height;
        self.starting_node = None;
        self.destination_node = None;
        self.nodes = Vec::with_capacity(width * height);
        for (y, x) in iproduct!(0..height, 0..width) {
            let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            let node_type = if border || self.rng.gen_bool(wall_probability) {
                NodeType::Wall
            } else {
                NodeType::Floor
            };
            let cost = if self.max_cost > 0 {
                self.rng.gen_range(0..=self.max_cost)
            } else {
                0
            };
            self.nodes
                .push(Node::new(node_type, x as i32, y as i32, cost));
        }
        self.link_neighbours();
        self.generate_components();
        Ok(())
    }

    fn link_neighbours(&mut self) {
        for ix in 0..self.nodes.len() {
            let neighbours = self.neighbourhood(ix);
            self.nodes[ix].neighbours = neighbours;
        }
    }

    /// The 4-connected neighbourhood (left, up, down, right) clipped to the grid.
    fn neighbourhood(&self, ix: usize) -> SmallVec<[usize; 4]> {
        let position = self.nodes[ix].position;
        [(-1, 0), (0, -1), (0, 1), (1, 0)]
            .into_iter()
            .filter_map(|(dx, dy)| self.index_of(position.x + dx, position.y + dy))
            .collect()
    }

    /// Generates a new [UnionFind] structure and links up non-wall neighbours to the same
    /// components.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.nodes.len());
        for ix in 0..self.nodes.len() {
            if self.nodes[ix].is_wall() {
                continue;
            }
            for &n in &self.nodes[ix].neighbours {
                if !self.nodes[n].is_wall() {
                    self.components.union(ix, n);
                }
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    /// Row-major grid index of a coordinate, if it lies on the board.
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }
    pub fn node(&self, x: i32, y: i32) -> Option<&Node> {
        self.index_of(x, y).map(|ix| &self.nodes[ix])
    }
    pub fn node_at(&self, ix: usize) -> &Node {
        &self.nodes[ix]
    }
    pub fn neighbours(&self, ix: usize) -> &[usize] {
        &self.nodes[ix].neighbours
    }
    pub fn starting_node(&self) -> Option<&Node> {
        self.starting_node.map(|ix| &self.nodes[ix])
    }
    pub fn destination_node(&self) -> Option<&Node> {
        self.destination_node.map(|ix| &self.nodes[ix])
    }
    pub(crate) fn starting_index(&self) -> Option<usize> {
        self.starting_node
    }
    pub(crate) fn destination_index(&self) -> Option<usize> {
        self.destination_node
    }
    /// Sum of the extra cost of every cell.
    pub fn board_cost(&self) -> i32 {
        self.nodes.iter().map(|n| n.cost).sum()
    }

    /// Checks that the coordinate is on the board and is a plain floor cell, so walls and
    /// already placed markers cannot be chosen again.
    pub fn is_coordinate_available(&self, x: i32, y: i32) -> bool {
        self.node(x, y)
            .is_some_and(|n| n.node_type == NodeType::Floor)
    }

    /// Checks if both cells are on the same connected component of non-wall cells.
    pub fn reachable(&self, a: usize, b: usize) -> bool {
        a < self.nodes.len() && b < self.nodes.len() && self.components.equiv(a, b)
    }

    fn set_node(&mut self, x: i32, y: i32, node_type: NodeType) -> usize {
        let ix = match self.index_of(x, y) {
            Some(ix) => ix,
            None => panic!(
                "({}, {}) lies outside the {}x{} board",
                x, y, self.width, self.height
            ),
        };
        self.nodes[ix].node_type = node_type;
        ix
    }

    /// Marks the cell as the start. A previous start cell keeps its marker.
    ///
    /// # Panics
    /// If the coordinate is out of bounds; validate with
    /// [is_coordinate_available](Self::is_coordinate_available) first.
    pub fn set_starting_node(&mut self, x: i32, y: i32) {
        self.starting_node = Some(self.set_node(x, y, NodeType::Start));
    }

    /// Marks the cell as the destination. A previous destination cell keeps its marker.
    ///
    /// # Panics
    /// If the coordinate is out of bounds.
    pub fn set_destination_node(&mut self, x: i32, y: i32) {
        self.destination_node = Some(self.set_node(x, y, NodeType::Destination));
    }

    /// Checked variant of [set_starting_node](Self::set_starting_node).
    pub fn place_start(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        if !self.is_coordinate_available(x, y) {
            return Err(BoardError::CoordinateUnavailable { x, y });
        }
        self.set_starting_node(x, y);
        Ok(())
    }

    /// Checked variant of [set_destination_node](Self::set_destination_node).
    pub fn place_destination(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        if !self.is_coordinate_available(x, y) {
            return Err(BoardError::CoordinateUnavailable { x, y });
        }
        self.set_destination_node(x, y);
        Ok(())
    }

    /// Marks every floor or checked cell on the path, start and destination keep their markers.
    /// Has to run after [mark_checked_nodes](Self::mark_checked_nodes) so the route wins over
    /// checked cells.
    pub fn mark_path(&mut self, path: &Path) {
        for step in path.steps() {
            let node = &mut self.nodes[step.index];
            if matches!(node.node_type, NodeType::Floor | NodeType::Checked) {
                node.node_type = NodeType::Path;
            }
        }
    }

    /// Marks every floor cell the search expanded.
    pub fn mark_checked_nodes(&mut self, path: &Path) {
        for &ix in path.closed_nodes() {
            let node = &mut self.nodes[ix];
            if node.node_type == NodeType::Floor {
                node.node_type = NodeType::Checked;
            }
        }
    }

    /// Turns path and checked markers back into floor.
    pub fn clear_marks(&mut self) {
        let mut cleared = 0;
        for node in self
            .nodes
            .iter_mut()
            .filter(|n| matches!(n.node_type, NodeType::Path | NodeType::Checked))
        {
            node.node_type = NodeType::Floor;
            cleared += 1;
        }
        debug!("Cleared {} marked cells", cleared);
    }

    /// One mark per cell, one line per row.
    pub fn render(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|n| n.node_type.mark()).collect::<String>())
            .join("\n")
    }

    /// Like [render](Self::render) but with a header of column indices, a row index in front of
    /// every row and the cells separated by spaces.
    pub fn render_with_header(&self) -> String {
        let label_width = self.height.saturating_sub(1).to_string().len();
        let header = (0..self.width).map(|x| x % 10).join(" ");
        let mut out = format!("{:label_width$} {}", "", header);
        for (y, row) in self.rows().enumerate() {
            let marks = row.iter().map(|n| n.node_type.mark()).join(" ");
            out.push_str(&format!("\n{:>label_width$} {}", y, marks));
        }
        out
    }

    fn rows(&self) -> impl Iterator<Item = &[Node]> {
        // chunks panics on a zero size, an ungenerated board simply has no rows
        self.nodes.chunks(self.width.max(1))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
