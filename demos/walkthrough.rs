use grid_search::{Board, BoardConfig, SolverRegistry};

// Generates a seeded 10x10 board, places the start and destination on the first and last free
// cells and runs every registered search on it, printing the marked board and a few numbers.
//
// Marks:
// - X wall, - floor
// - S start, D destination
// - * path, ~ checked but not on the path

fn main() {
    let registry = SolverRegistry::standard();
    let mut board = Board::from_config(&BoardConfig {
        max_cost: 3,
        seed: Some(2024),
        ..Default::default()
    })
    .expect("default board parameters are valid");

    let free = (0..board.height() as i32)
        .flat_map(|y| (0..board.width() as i32).map(move |x| (x, y)))
        .filter(|&(x, y)| board.is_coordinate_available(x, y))
        .collect::<Vec<_>>();
    let (Some(&(sx, sy)), Some(&(dx, dy))) = (free.first(), free.last()) else {
        println!("No free cells on this board.");
        return;
    };
    board.set_starting_node(sx, sy);
    board.set_destination_node(dx, dy);
    println!("{}\n", board.render_with_header());

    for (number, algorithm) in registry.iter() {
        let path = algorithm.get_path(&board);
        println!("{number} {algorithm}");
        if path.is_empty() {
            println!("No Path found.\n");
            continue;
        }
        board.mark_checked_nodes(&path);
        board.mark_path(&path);
        println!("{}", board.render_with_header());
        println!("Total cost of the board: {}", board.board_cost());
        println!("Number of checked nodes: {}", path.closed_nodes().len());
        println!("Number of steps: {}", path.len());
        println!("Total cost of the path: {}", path.cost());
        for step in path.steps() {
            println!("X: {} Y: {} Cost: {}", step.position.x, step.position.y, step.cost);
        }
        println!();
        board.clear_marks();
    }
}
