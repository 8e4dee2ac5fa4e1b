use grid_search::solver::dijkstra::DijkstraSolver;
use grid_search::{Algorithm, Board, BoardConfig, GridSolver, NodeType, SolverRegistry};

fn open_board() -> Board {
    let mut board = Board::from_layout(&["XXXXX", "X---X", "X---X", "X---X", "XXXXX"]).unwrap();
    board.place_start(1, 1).unwrap();
    board.place_destination(3, 3).unwrap();
    board
}

/// Start and destination on either side of a solid wall column.
#[test]
fn no_path_through_a_solid_wall() {
    let board = Board::from_layout(&["XXXXX", "XSX-X", "X-X-X", "X-XDX", "XXXXX"]).unwrap();
    let start = board.index_of(1, 1).unwrap();
    let goal = board.index_of(3, 3).unwrap();
    assert!(!board.reachable(start, goal));
    let mut solvers = Algorithm::ALL.map(|a| a.get_path(&board)).to_vec();
    solvers.push(DijkstraSolver::cost_ordered().get_path(&board));
    for path in solvers {
        assert!(path.steps().is_empty());
        assert_eq!(path.cost(), 0);
        // the left column is still explored
        assert_eq!(path.closed_nodes().len(), 3);
    }
}

#[test]
fn connected_corners_take_four_steps() {
    let board = open_board();
    for algorithm in [Algorithm::BreadthFirst, Algorithm::Dijkstra, Algorithm::AStar] {
        let path = algorithm.get_path(&board);
        assert_eq!(path.len(), 4, "{algorithm}");
        assert_eq!(path.cost(), 0);
        let last = path.steps().last().unwrap();
        assert_eq!((last.position.x, last.position.y), (3, 3));
    }
    assert!(Algorithm::DepthFirst.get_path(&board).len() >= 4);
}

#[test]
fn path_cost_sums_the_cells_walked() {
    let mut board = Board::from_layout(&["XXXXX", "X-12X", "X3-4X", "X56-X", "XXXXX"]).unwrap();
    board.place_start(1, 1).unwrap();
    board.place_destination(3, 3).unwrap();
    let path = Algorithm::BreadthFirst.get_path(&board);
    let summed: i32 = path.steps().iter().map(|s| s.cost).sum();
    assert_eq!(path.cost(), summed);
    assert_eq!(path.len(), 4);
    let cheapest = DijkstraSolver::cost_ordered().get_path(&board);
    // leaving the start costs 1 or 3, the centre is free, entering the corner costs 4 or 6
    assert_eq!(cheapest.cost(), 5);
}

#[test]
fn marking_after_a_search() {
    let mut board = open_board();
    let path = Algorithm::BreadthFirst.get_path(&board);
    let before = board.clone();
    board.mark_checked_nodes(&path);
    board.mark_path(&path);
    let goal = board.index_of(3, 3).unwrap();
    for step in path.steps() {
        let expected = if step.index == goal {
            NodeType::Destination
        } else {
            NodeType::Path
        };
        assert_eq!(board.node_at(step.index).node_type(), expected);
    }
    for &ix in path.closed_nodes() {
        if !path.contains_step(ix) && before.node_at(ix).node_type() == NodeType::Floor {
            assert_eq!(board.node_at(ix).node_type(), NodeType::Checked);
        }
    }
    assert_eq!(board.node(1, 1).unwrap().node_type(), NodeType::Start);
    assert_eq!(board.render(), "XXXXX\nXS~~X\nX*~~X\nX**DX\nXXXXX");
    assert_eq!(board.render(), board.render());
}

#[test]
fn marks_do_not_block_a_later_search() {
    let mut board = open_board();
    let first = Algorithm::DepthFirst.get_path(&board);
    board.mark_checked_nodes(&first);
    board.mark_path(&first);
    let second = Algorithm::BreadthFirst.get_path(&board);
    assert_eq!(second.len(), 4);
    board.clear_marks();
    assert_eq!(board.render(), "XXXXX\nXS--X\nX---X\nX--DX\nXXXXX");
}

#[test]
fn driver_flow_with_registry() {
    let registry = SolverRegistry::standard();
    let mut board = Board::from_config(&BoardConfig {
        width: 12,
        height: 8,
        wall_probability: 0.0,
        seed: Some(7),
        ..Default::default()
    })
    .unwrap();
    assert!(!board.is_coordinate_available(0, 3));
    board.place_start(1, 1).unwrap();
    assert!(board.place_destination(1, 1).is_err());
    board.place_destination(10, 6).unwrap();
    for (number, algorithm) in registry.iter() {
        assert_eq!(registry.get(number), Some(algorithm));
        let path = algorithm.get_path(&board);
        assert!(!path.is_empty(), "{algorithm}");
        board.mark_checked_nodes(&path);
        board.mark_path(&path);
        assert_eq!(board.node(10, 6).unwrap().node_type(), NodeType::Destination);
        board.clear_marks();
    }
    assert_eq!(board.board_cost(), 0);
}
