use maze_chase::{compute_step, generate_maze, Algorithm, BlockedSet};

// Generates a seeded 11x11 maze, prints it, and asks each algorithm for the
// first step of a chase between two far-apart floor cells.
fn main() {
    let level = generate_maze(11, 11, 42).unwrap();
    println!("{}", level.grid);

    let agent = level.floor_positions[0];
    let target = *level.floor_positions.last().unwrap();
    let blocked = BlockedSet::rebuild(&level.grid, &[]).unwrap();
    println!("agent at {:?}, target at {:?}", agent, target);
    for algorithm in [
        Algorithm::Dijkstra,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
    ] {
        let step = compute_step(algorithm, &level.grid, &blocked, agent, target).unwrap();
        println!("{:?} first step: {:?}", algorithm, step);
    }
}
