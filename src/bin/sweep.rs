//! Benchmark sweep: time searches across problem sizes and append the
//! results to a CSV file.
//!
//! ```text
//! sweep [puzzle] [strategy] [min_n] [max_n] [csv_path] [seed]
//! ```
//!
//! `puzzle` is `npuzzle` or `nqueens`; `strategy` is `bfs`, `dfs`, `ids`,
//! or `bds`. Each size is run three times. Rows are
//! `problem,n,strategy,seconds`.

use std::error::Error;
use std::fs::OpenOptions;
use std::io::Write;
use std::time::Instant;

use log::{debug, info};

use grid_search::core::{SearchNode, ShuffleRng};
use grid_search::games::{npuzzle, nqueens, NPuzzleRules, NQueensRules};
use grid_search::search::{run, SearchOutcome, Strategy};

const REPETITIONS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Puzzle {
    NPuzzle,
    NQueens,
}

impl Puzzle {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "npuzzle" => Some(Self::NPuzzle),
            "nqueens" => Some(Self::NQueens),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::NPuzzle => "npuzzle",
            Self::NQueens => "nqueens",
        }
    }
}

struct SweepConfig {
    puzzle: Puzzle,
    strategy: Strategy,
    min_size: usize,
    max_size: usize,
    csv_path: String,
    seed: u64,
}

fn parse_args() -> Result<SweepConfig, Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let puzzle = match args.first() {
        Some(name) => Puzzle::from_name(name).ok_or(format!("unknown puzzle: {name}"))?,
        None => Puzzle::NPuzzle,
    };
    let strategy = match args.get(1) {
        Some(name) => Strategy::from_name(name).ok_or(format!("unknown strategy: {name}"))?,
        None => Strategy::BreadthFirst,
    };
    let min_size = match args.get(2) {
        Some(raw) => raw.parse()?,
        None => 3,
    };
    let max_size = match args.get(3) {
        Some(raw) => raw.parse()?,
        None => min_size,
    };
    let csv_path = args
        .get(4)
        .cloned()
        .unwrap_or_else(|| "graph_search_results.csv".to_string());
    let seed = match args.get(5) {
        Some(raw) => raw.parse()?,
        None => 42,
    };

    if min_size == 0 || max_size < min_size {
        return Err(format!("bad size range: {min_size}..={max_size}").into());
    }

    Ok(SweepConfig {
        puzzle,
        strategy,
        min_size,
        max_size,
        csv_path,
        seed,
    })
}

fn append_csv(path: &str, line: &str) -> Result<(), Box<dyn Error>> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

fn run_once(
    config: &SweepConfig,
    size: usize,
    rng: &mut ShuffleRng,
) -> Result<SearchOutcome, Box<dyn Error>> {
    match config.puzzle {
        Puzzle::NPuzzle => {
            let rules = NPuzzleRules;
            let board = npuzzle::shuffled_board(size, &mut rng.fork())?;
            debug!("initial board:\n{board}");

            let initial = SearchNode::root(board, &rules);
            let goal = if config.strategy == Strategy::Bidirectional {
                Some(SearchNode::root(npuzzle::solved_board(size)?, &rules))
            } else {
                None
            };
            Ok(run(config.strategy, &rules, initial, goal)?)
        }
        Puzzle::NQueens => {
            let rules = NQueensRules;
            let board = nqueens::initial_board(size)?;
            debug!("initial board:\n{board}");

            if config.strategy == Strategy::Bidirectional {
                return Err("nqueens has no single goal board for bidirectional search".into());
            }
            Ok(run(config.strategy, &rules, SearchNode::root(board, &rules), None)?)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = parse_args()?;

    info!(
        "sweeping {} with {} over n = {}..={}",
        config.puzzle.name(),
        config.strategy,
        config.min_size,
        config.max_size
    );

    let mut rng = ShuffleRng::new(config.seed);

    for size in config.min_size..=config.max_size {
        for repetition in 1..=REPETITIONS {
            let start = Instant::now();
            let outcome = run_once(&config, size, &mut rng)?;
            let seconds = start.elapsed().as_secs_f64();

            match (&outcome.cost, &outcome.solution) {
                (Some(cost), Some(solution)) => {
                    info!(
                        "n={size} rep={repetition}: solved at cost {cost} in {seconds:.4}s"
                    );
                    debug!("solution board:\n{solution}");
                }
                _ => info!("n={size} rep={repetition}: no solution ({seconds:.4}s)"),
            }

            let row = format!(
                "{},{},{},{}\n",
                config.puzzle.name(),
                size,
                config.strategy,
                seconds
            );
            append_csv(&config.csv_path, &row)?;
        }
    }

    Ok(())
}
