// Hash computation module
// Streams file contents through an XXH3-64 accumulator in fixed-size chunks

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use xxhash_rust::xxh3::Xxh3;

use super::error::DirsumError;

/// Chunk size for streaming reads (1 MiB)
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Default cap on chunks consumed in partial mode
pub const DEFAULT_MAX_CHUNKS: usize = 25;

/// Hashing mode selected for a whole run
///
/// Partial mode hashes only the first `max_chunks * chunk_size` bytes of
/// each file. Two files identical in that prefix but differing afterward
/// get the same partial digest; callers choosing partial mode accept the
/// approximation in exchange for large-file throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMode {
    Full,
    Partial,
}

impl HashMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
        }
    }
}

impl FromStr for HashMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("full") {
            Ok(Self::Full)
        } else if s.eq_ignore_ascii_case("partial") {
            Ok(Self::Partial)
        } else {
            Err(format!("Invalid hash mode '{s}'. Expected one of: full, partial"))
        }
    }
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A computed digest paired with the file it came from
#[derive(Debug, Clone)]
pub struct FileHash {
    pub path: PathBuf,
    pub digest: String,
}

/// Hash computer with streaming I/O
///
/// Working memory stays at one chunk regardless of file size; one file
/// handle is open at a time and closes on scope exit.
pub struct HashComputer {
    chunk_size: usize,
}

impl HashComputer {
    /// Create a new HashComputer with the default chunk size (1 MiB)
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a new HashComputer with a custom chunk size
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Compute the XXH3-64 digest of a file's entire contents
    pub fn hash_full(&self, path: &Path) -> Result<String, DirsumError> {
        let mut file = File::open(path).map_err(|e| {
            DirsumError::from_io_error(e, "reading", Some(path.to_path_buf()))
        })?;

        let mut hasher = Xxh3::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let bytes_read = file.read(&mut buffer).map_err(|e| {
                DirsumError::from_io_error(e, "reading", Some(path.to_path_buf()))
            })?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(format_digest(hasher.digest()))
    }

    /// Compute the XXH3-64 digest of a file's first `max_chunks * chunk_size` bytes
    ///
    /// Files shorter than the cap hash in their entirety, so the result
    /// equals `hash_full` for them. Short reads reduce the bytes consumed
    /// per iteration but never the overall cap.
    pub fn hash_partial(&self, path: &Path, max_chunks: usize) -> Result<String, DirsumError> {
        let mut file = File::open(path).map_err(|e| {
            DirsumError::from_io_error(e, "reading", Some(path.to_path_buf()))
        })?;

        let mut hasher = Xxh3::new();
        let mut buffer = vec![0u8; self.chunk_size];
        let mut bytes_remaining = max_chunks as u64 * self.chunk_size as u64;

        while bytes_remaining > 0 {
            let to_read = std::cmp::min(bytes_remaining, self.chunk_size as u64) as usize;
            let bytes_read = file.read(&mut buffer[..to_read]).map_err(|e| {
                DirsumError::from_io_error(e, "reading", Some(path.to_path_buf()))
            })?;
            if bytes_read == 0 {
                break; // End of file
            }
            hasher.update(&buffer[..bytes_read]);
            bytes_remaining -= bytes_read as u64;
        }

        Ok(format_digest(hasher.digest()))
    }

    /// Dispatch to full or partial hashing based on the run's mode
    pub fn hash_with_mode(
        &self,
        path: &Path,
        mode: HashMode,
        max_chunks: usize,
    ) -> Result<String, DirsumError> {
        match mode {
            HashMode::Full => self.hash_full(path),
            HashMode::Partial => self.hash_partial(path, max_chunks),
        }
    }
}

impl Default for HashComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a 64-bit digest as 16 lowercase hex characters
fn format_digest(digest: u64) -> String {
    format!("{:016x}", digest)
}
