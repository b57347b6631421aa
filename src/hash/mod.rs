// Hash Core Library
// Chunked XXH3 hashing, exclusion filtering, directory listing, run engine

pub mod error;
pub mod exclude;
pub mod hash;
pub mod run;
pub mod walk;

// Re-export commonly used types for convenience
pub use error::DirsumError;
pub use exclude::{ExcludeList, DEFAULT_EXCLUSIONS, DOTFILE_WILDCARD};
pub use hash::{FileHash, HashComputer, HashMode, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_CHUNKS};
pub use run::{HashPass, HashRun, RunStats};
pub use walk::list_files;
