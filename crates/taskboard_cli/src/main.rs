//! Command-line front end for the taskboard core.
//!
//! # Responsibility
//! - Render the shuffled flat list or the quadrant matrix to stdout.
//! - Exercise positional reordering against one quadrant.

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use taskboard_core::{
    default_log_level, init_logging, load_board_file, sample_board, Board, BoardView, Category,
    Quadrant, RngSource,
};

#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(author, version, about = "Eisenhower task board viewer", long_about = None)]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "TASKBOARD_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every task as one shuffled, plain-text list.
    List {
        #[command(flatten)]
        board: BoardArgs,

        /// Seed for a reproducible order.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the four quadrants with their raw labels.
    Matrix {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Move one task within a quadrant and print that quadrant.
    Reorder {
        #[command(flatten)]
        board: BoardArgs,

        #[arg(short, long)]
        quadrant: Quadrant,

        /// Zero-based index of the dragged task.
        #[arg(long)]
        from: usize,

        /// Zero-based index of the drop target.
        #[arg(long)]
        to: usize,
    },
}

#[derive(Args, Debug)]
struct BoardArgs {
    /// Board JSON document; the built-in sample board is used when unset.
    #[arg(short, long)]
    board: Option<PathBuf>,
}

impl BoardArgs {
    fn load(&self) -> Result<Board, Box<dyn Error>> {
        match &self.board {
            Some(path) => Ok(load_board_file(path)?),
            None => Ok(sample_board()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let dir = dir.to_str().ok_or("log dir must be valid UTF-8")?;
        init_logging(level, dir)?;
    }

    match cli.command {
        Command::List { board, seed } => {
            let board = board.load()?;
            let view = match seed {
                Some(seed) => BoardView::load(board, &mut RngSource(StdRng::seed_from_u64(seed))),
                None => BoardView::load(board, &mut RngSource(rand::rng())),
            };
            for label in view.flat_list() {
                writeln!(out, "- {label}")?;
            }
        }
        Command::Matrix { board } => {
            for category in board.load()?.categories() {
                write_category(out, category)?;
            }
        }
        Command::Reorder {
            board,
            quadrant,
            from,
            to,
        } => {
            let mut board = board.load()?;
            let outcome = board.move_task(quadrant, from, to);
            log::info!("event=cli_reorder module=cli status=ok moved={}", outcome.is_moved());
            write_category(out, board.category(quadrant))?;
        }
    }
    Ok(())
}

fn write_category(out: &mut impl Write, category: &Category) -> std::io::Result<()> {
    writeln!(out, "{} [{}]", category.title, category.quadrant)?;
    for (index, task) in category.tasks.iter().enumerate() {
        writeln!(out, "  {index:>2}. {}", task.label)?;
    }
    Ok(())
}
