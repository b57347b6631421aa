use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use dirsum::hash::{ExcludeList, HashMode, HashRun, DEFAULT_MAX_CHUNKS};

#[derive(Parser)]
#[command(name = "dirsum")]
#[command(about = "Calculate xxHash fingerprints for files in a directory")]
#[command(version)]
struct Args {
    /// Directory to hash (default: current directory)
    #[arg(long = "dir_path", default_value = ".")]
    dir_path: PathBuf,

    /// Single file to hash (overrides dir_path if specified)
    #[arg(long = "file_path")]
    file_path: Option<PathBuf>,

    /// Hashing mode: full or partial
    #[arg(long = "hash_mode", default_value_t = HashMode::Full)]
    hash_mode: HashMode,

    /// Maximum 1 MiB chunks to read for partial hashing
    #[arg(long = "max_chunks", default_value_t = DEFAULT_MAX_CHUNKS)]
    max_chunks: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let excludes = ExcludeList::with_defaults();

    println!("Excluding files matching:");
    for pattern in excludes.patterns() {
        println!("  - {}", pattern);
    }
    println!();

    let run = HashRun::new()
        .with_mode(args.hash_mode)
        .with_max_chunks(args.max_chunks)
        .with_excludes(excludes);

    let result = match args.file_path {
        Some(ref file_path) => run.run_single_file(file_path),
        None => run.run_directory(&args.dir_path),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // All report text goes to stdout, errors included
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
