// Run engine module
// Drives directory-wide and single-file hash runs and prints the report

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use super::error::DirsumError;
use super::exclude::ExcludeList;
use super::hash::{FileHash, HashComputer, HashMode, DEFAULT_MAX_CHUNKS};
use super::walk;

/// Statistics collected during a hash run
#[derive(Debug, Clone)]
pub struct RunStats {
    pub files_found: usize,
    pub files_hashed: usize,
    pub files_excluded: usize,
    pub files_failed: usize,
    pub duration: Duration,
}

/// Outcome of hashing one candidate file list
#[derive(Debug)]
pub struct HashPass {
    pub hashes: Vec<FileHash>,
    pub files_excluded: usize,
    pub files_failed: usize,
    pub duration: Duration,
}

/// Engine for hashing a directory's files or a single file
///
/// All configuration is fixed before the run starts; the run itself is
/// strictly sequential, one open file at a time. Report text goes to
/// stdout; the progress bar draws to stderr and clears before the report.
pub struct HashRun {
    computer: HashComputer,
    mode: HashMode,
    max_chunks: usize,
    excludes: ExcludeList,
}

impl HashRun {
    /// Create a new HashRun with default settings (full mode, default exclusions)
    pub fn new() -> Self {
        Self {
            computer: HashComputer::new(),
            mode: HashMode::Full,
            max_chunks: DEFAULT_MAX_CHUNKS,
            excludes: ExcludeList::with_defaults(),
        }
    }

    /// Set the hashing mode
    pub fn with_mode(mut self, mode: HashMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the chunk cap for partial mode
    pub fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.max_chunks = max_chunks;
        self
    }

    /// Set the exclusion list
    pub fn with_excludes(mut self, excludes: ExcludeList) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn excludes(&self) -> &ExcludeList {
        &self.excludes
    }

    /// Hash a candidate file list in order, applying the exclusion filter
    ///
    /// Per-file read failures are reported and skipped so one unreadable
    /// file does not abort the batch. Output order equals input order.
    pub fn hash_files(&self, files: &[PathBuf]) -> HashPass {
        let start_time = Instant::now();

        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)")
                .unwrap()
                .progress_chars("=>-"),
        );

        let mut hashes: Vec<FileHash> = Vec::new();
        let mut files_excluded = 0;
        let mut files_failed = 0;

        for path in files {
            if self.excludes.should_exclude(path) {
                files_excluded += 1;
                pb.inc(1);
                continue;
            }

            match self.computer.hash_with_mode(path, self.mode, self.max_chunks) {
                Ok(digest) => {
                    hashes.push(FileHash {
                        path: path.clone(),
                        digest,
                    });
                }
                Err(e) => {
                    pb.suspend(|| println!("Warning: Failed to hash {}: {}", path.display(), e));
                    files_failed += 1;
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();

        HashPass {
            hashes,
            files_excluded,
            files_failed,
            duration: start_time.elapsed(),
        }
    }

    /// Hash every non-excluded regular file in a directory and print the report
    pub fn run_directory(&self, dir: &Path) -> Result<RunStats, DirsumError> {
        let target = walk::absolutize(dir);
        let files = walk::list_files(&target)?;

        println!("Found {} files in: {}", files.len(), target.display());
        println!("Hash mode: {}", self.mode);
        if self.mode == HashMode::Partial {
            println!("Max chunks: {}", self.max_chunks);
        }
        println!("\nRunning xxHash pass...");

        let pass = self.hash_files(&files);

        println!("\nFile Hashes:");
        for file_hash in &pass.hashes {
            println!("{} : {}", file_hash.digest, walk::file_name_lossy(&file_hash.path));
        }

        println!("\nxxHash total time: {:.6} seconds", pass.duration.as_secs_f64());
        println!("Files processed: {}", pass.hashes.len());
        println!("Files excluded: {}", pass.files_excluded);
        if pass.files_failed > 0 {
            println!("Files failed: {}", pass.files_failed);
        }

        Ok(RunStats {
            files_found: files.len(),
            files_hashed: pass.hashes.len(),
            files_excluded: pass.files_excluded,
            files_failed: pass.files_failed,
            duration: pass.duration,
        })
    }

    /// Hash exactly one file and print the report
    ///
    /// An excluded target is skipped with a message, not an error.
    pub fn run_single_file(&self, path: &Path) -> Result<RunStats, DirsumError> {
        let target = walk::absolutize(path);

        if self.excludes.should_exclude(&target) {
            println!("Skipping excluded file: {}", target.display());
            return Ok(RunStats {
                files_found: 1,
                files_hashed: 0,
                files_excluded: 1,
                files_failed: 0,
                duration: Duration::ZERO,
            });
        }

        println!("Hashing single file: {}", target.display());
        println!("Hash mode: {}", self.mode);
        if self.mode == HashMode::Partial {
            println!("Max chunks: {}", self.max_chunks);
        }

        let metadata = fs::metadata(&target).map_err(|e| {
            DirsumError::from_io_error(e, "reading", Some(target.clone()))
        })?;
        if !metadata.is_file() {
            return Err(DirsumError::NotAFile { path: target });
        }

        let start_time = Instant::now();
        let digest = self
            .computer
            .hash_with_mode(&target, self.mode, self.max_chunks)?;
        let duration = start_time.elapsed();

        println!("File: {}", walk::file_name_lossy(&target));
        println!("Hash: {}", digest);
        println!("Time: {:.6} seconds", duration.as_secs_f64());

        Ok(RunStats {
            files_found: 1,
            files_hashed: 1,
            files_excluded: 0,
            files_failed: 0,
            duration,
        })
    }
}

impl Default for HashRun {
    fn default() -> Self {
        Self::new()
    }
}
