//! Cross-algorithm and end-to-end behaviour: optimality agreement over many
//! generated mazes, deterministic repeated decisions, and a full pursuit that
//! rebuilds its blocking snapshot every turn.

use grid_util::point::Point;
use maze_chase::{
    compute_step, generate_maze, Algorithm, AstarSolver, BlockedSet, Cell, DijkstraSolver,
    Direction, GreedySolver, GridSolver,
};

/// Spread-out sample of start/goal pairs over the floor cells of a level.
fn sample_pairs(floors: &[Point]) -> Vec<(Point, Point)> {
    let n = floors.len();
    vec![
        (floors[0], floors[n - 1]),
        (floors[n / 2], floors[0]),
        (floors[n / 3], floors[2 * n / 3]),
    ]
}

#[test]
fn astar_and_dijkstra_agree_on_path_length() {
    for seed in 0..20 {
        let level = generate_maze(11, 11, seed).unwrap();
        let blocked = BlockedSet::rebuild(&level.grid, &[]).unwrap();
        for (start, goal) in sample_pairs(&level.floor_positions) {
            let astar = AstarSolver
                .find_path(&level.grid, &blocked, start, goal)
                .unwrap()
                .unwrap_or_else(|| panic!("A* lost {start:?}->{goal:?}:\n{}", level.grid));
            let dijkstra = DijkstraSolver
                .find_path(&level.grid, &blocked, start, goal)
                .unwrap()
                .unwrap();
            assert_eq!(
                astar.len(),
                dijkstra.len(),
                "optimal lengths diverged for seed {seed} {start:?}->{goal:?}:\n{}",
                level.grid
            );
        }
    }
}

#[test]
fn greedy_is_never_shorter_than_astar() {
    for seed in 0..20 {
        let level = generate_maze(11, 11, seed).unwrap();
        let blocked = BlockedSet::rebuild(&level.grid, &[]).unwrap();
        for (start, goal) in sample_pairs(&level.floor_positions) {
            let astar = AstarSolver
                .find_path(&level.grid, &blocked, start, goal)
                .unwrap()
                .unwrap();
            let greedy = GreedySolver
                .find_path(&level.grid, &blocked, start, goal)
                .unwrap()
                .unwrap();
            assert!(greedy.len() >= astar.len());
        }
    }
}

#[test]
fn identical_inputs_yield_identical_directions() {
    let level = generate_maze(11, 11, 4).unwrap();
    let floors = &level.floor_positions;
    let agent = floors[2];
    let target = floors[floors.len() - 3];
    let others = [floors[floors.len() / 2]];
    for algorithm in [
        Algorithm::Dijkstra,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar,
    ] {
        let blocked = BlockedSet::rebuild(&level.grid, &others).unwrap();
        let first = compute_step(algorithm, &level.grid, &blocked, agent, target).unwrap();
        for _ in 0..5 {
            let fresh = BlockedSet::rebuild(&level.grid, &others).unwrap();
            let again = compute_step(algorithm, &level.grid, &fresh, agent, target).unwrap();
            assert_eq!(again, first, "{algorithm:?} flip-flopped");
        }
    }
}

#[test]
fn agent_next_to_target_steps_onto_it() {
    let level = generate_maze(11, 11, 8).unwrap();
    // Any passage cell and one of its room neighbours are adjacent floors.
    let agent = level.floor_positions[0];
    let target = *level
        .floor_positions
        .iter()
        .find(|p| (p.x - agent.x).abs() + (p.y - agent.y).abs() == 1)
        .expect("a floor cell always has a floor neighbour in a maze this size");
    let blocked = BlockedSet::rebuild(&level.grid, &[]).unwrap();
    let step = compute_step(Algorithm::AStar, &level.grid, &blocked, agent, target)
        .unwrap()
        .unwrap();
    assert_eq!(step.apply(agent), target);
}

#[test]
fn pursuit_reaches_a_static_target() {
    let level = generate_maze(15, 15, 1).unwrap();
    let floors = &level.floor_positions;
    let mut agent = floors[0];
    let target = floors[floors.len() - 1];
    let turn_limit = 2 * floors.len();
    let mut arrived = false;
    for _ in 0..turn_limit {
        let blocked = BlockedSet::rebuild(&level.grid, &[]).unwrap();
        match compute_step(Algorithm::AStar, &level.grid, &blocked, agent, target).unwrap() {
            Some(Direction::None) => {
                arrived = true;
                break;
            }
            Some(direction) => {
                agent = direction.apply(agent);
                assert_eq!(level.grid.cell(agent), Ok(Cell::Floor));
            }
            None => panic!("no path in a perfect maze:\n{}", level.grid),
        }
    }
    assert!(arrived, "agent never reached the target:\n{}", level.grid);
    assert_eq!(agent, target);
}

#[test]
fn pursuit_detours_around_another_agent() {
    // A 3x2 strip with a bystander on the straight route: the first step must
    // leave the bottom row rather than walk into the occupied cell.
    use grid_util::grid::Grid;
    let mut grid = maze_chase::MazeGrid::new(3, 2, false);
    grid.generate_components();
    let bystander = Point::new(1, 0);
    let blocked = BlockedSet::rebuild(&grid, &[bystander]).unwrap();
    let step = compute_step(
        Algorithm::AStar,
        &grid,
        &blocked,
        Point::new(0, 0),
        Point::new(2, 0),
    )
    .unwrap()
    .unwrap();
    assert_eq!(step, Direction::Up);
}
