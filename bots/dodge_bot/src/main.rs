use std::collections::HashSet;

use bomber::{Board, Direction, DirectionSolver, Element, Point, MOVES};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    bomber_bot_utils::run(&mut DodgeBot { rng })
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Walks away from anything that can kill it next turn, and otherwise
/// wanders. No pathfinding, just one-step lookahead over the board
/// queries.
struct DodgeBot {
    rng: StdRng,
}

impl DodgeBot {
    fn score(&self, board: &Board, danger: &HashSet<Point>, pt: Point) -> i32 {
        let mut score = 0;
        if !danger.contains(&pt) {
            score += 2;
        }
        if !board.is_near(pt.x, pt.y, Element::MeatChopper) {
            score += 1;
        }
        score
    }
}

impl DirectionSolver for DodgeBot {
    fn choose_direction(&mut self, board: &Board) -> Direction {
        if board.is_my_bomberman_dead() {
            return Direction::Stop;
        }
        let me = match board.bomberman() {
            Ok(pt) => pt,
            Err(_) => return Direction::Stop,
        };

        let mut danger: HashSet<Point> = board.future_blasts().into_iter().collect();
        danger.extend(board.blasts());

        let mut top_choices: Vec<Direction> = vec![Direction::Stop];
        let mut top_score = self.score(board, &danger, me);
        for &dir in MOVES.iter() {
            let pt = me.step(dir);
            if pt.is_out_of_bounds(board.size()) || board.is_barrier_at(pt.x, pt.y) {
                continue;
            }
            let score = self.score(board, &danger, pt);
            match score.cmp(&top_score) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => top_choices.push(dir),
                std::cmp::Ordering::Greater => {
                    top_choices = vec![dir];
                    top_score = score;
                }
            }
        }

        let choice = *top_choices.choose(&mut self.rng).unwrap();
        debug!(%choice, top_score, in_danger = danger.contains(&me));
        choice
    }
}
