use grid_util::point::Point;
use maze_chase::{compute_step, Algorithm, BlockedSet, Direction, MazeGrid};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn draw(grid: &MazeGrid, agent: Point, target: Point) {
    for y in (0..grid.columns() as i32).rev() {
        for x in 0..grid.rows() as i32 {
            let p = Point::new(x, y);
            if p == agent {
                print!("A");
            } else if p == target {
                print!("T");
            } else if grid.can_move_to(p) {
                print!(".");
            } else {
                print!("#");
            }
        }
        println!();
    }
    println!();
}

// An A*-driven agent chases a static target through a fresh maze, one step
// per turn, rebuilding its blocking snapshot every turn.
fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut level = maze_chase::generate_maze_with(15, 15, &mut rng).unwrap();
    let mut agent = level.take_random_floor(&mut rng).unwrap();
    let target = level.take_random_floor(&mut rng).unwrap();

    let mut turns = 0;
    loop {
        let blocked = BlockedSet::rebuild(&level.grid, &[]).unwrap();
        match compute_step(Algorithm::AStar, &level.grid, &blocked, agent, target).unwrap() {
            Some(Direction::None) => break,
            Some(direction) => {
                agent = direction.apply(agent);
                turns += 1;
            }
            None => {
                println!("no path this turn");
                return;
            }
        }
    }
    draw(&level.grid, agent, target);
    println!("caught the target in {turns} turns");
}
