use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use primaze::{Maze, generators::random_maze};
use tracing::Level;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};

#[derive(Parser, Debug)]
#[command(version, about, name = "primaze")]
struct Args {
    /// Grid height, outer walls included
    #[arg(long, default_value_t = 21)]
    height: usize,
    /// Grid width, outer walls included
    #[arg(long, default_value_t = 41)]
    width: usize,
    /// Seed for reproducible mazes; picked at random when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the built-in demo maze instead of generating one
    #[arg(long)]
    demo: bool,
    /// Clear the terminal before printing
    #[arg(long)]
    clear: bool,
    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. The returned guard must outlive all logging.
fn init_logging(args: &Args) -> io::Result<Option<WorkerGuard>> {
    let level = log_level(args.verbose);
    let Some(path) = &args.log_file else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "log file path has no file name")
    })?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(io::Error::other)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let maze = if args.demo {
        Maze::demo()
    } else {
        let seed = args.seed.unwrap_or_else(rand::random);
        tracing::info!(
            "[main] generating {}x{} maze with seed {}",
            args.height,
            args.width,
            seed
        );
        match random_maze(args.height, args.width, Some(seed)) {
            Ok(maze) => maze,
            Err(e) => {
                tracing::error!("[main] {e}");
                eprintln!("{e}");
                return ExitCode::from(2);
            }
        }
    };
    tracing::debug!("[main] openings at {:?}", maze.openings());

    let mut stdout = io::stdout();
    let printed = if args.clear {
        maze.render(&mut stdout)
    } else {
        writeln!(stdout, "{maze}")
    };
    if let Err(e) = printed {
        eprintln!("Failed to print maze: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
