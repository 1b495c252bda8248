use bomber::{Board, Direction, DirectionSolver, MOVES};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    bomber_bot_utils::run(&mut RandomBot { rng })
}

struct RandomBot {
    rng: StdRng,
}

impl DirectionSolver for RandomBot {
    fn choose_direction(&mut self, board: &Board) -> Direction {
        let me = match board.bomberman() {
            Ok(pt) => pt,
            Err(_) => return Direction::Stop,
        };
        let open: Vec<Direction> = MOVES
            .iter()
            .copied()
            .filter(|&dir| {
                let pt = me.step(dir);
                !pt.is_out_of_bounds(board.size()) && !board.is_barrier_at(pt.x, pt.y)
            })
            .collect();
        open.choose(&mut self.rng).copied().unwrap_or(Direction::Stop)
    }
}
