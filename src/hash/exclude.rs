//! Exclusion pattern matching for hash runs.
//!
//! Two pattern kinds only: the dotfile wildcard sentinel `".*"` and
//! literal exact-basename matches. Not a glob engine.

use std::path::Path;

/// Sentinel matching any basename that starts with a dot.
pub const DOTFILE_WILDCARD: &str = ".*";

/// Default patterns to exclude from hash runs.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    DOTFILE_WILDCARD,
    "README.md",
    "LICENSE",
];

/// Pattern matching for file exclusion.
///
/// The list is fixed once built; each pattern is checked independently,
/// so match order never changes the verdict.
#[derive(Debug, Clone)]
pub struct ExcludeList {
    patterns: Vec<String>,
}

impl Default for ExcludeList {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ExcludeList {
    /// Create a new empty exclude list.
    pub fn new() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Create with the default exclusion patterns.
    pub fn with_defaults() -> Self {
        Self::from_patterns(DEFAULT_EXCLUSIONS)
    }

    /// Create from a list of patterns.
    pub fn from_patterns(patterns: &[&str]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Check if a path should be excluded, judged by its basename.
    pub fn should_exclude(&self, path: &Path) -> bool {
        let name = match path.file_name().map(|n| n.to_string_lossy()) {
            Some(name) => name,
            None => return false,
        };

        // Dotfile wildcard is special-cased, not a general glob
        if name.starts_with('.') && self.patterns.iter().any(|p| p == DOTFILE_WILDCARD) {
            return true;
        }

        // Exact basename matches, case-sensitive
        self.patterns.iter().any(|p| p == name.as_ref())
    }

    /// Get the list of patterns.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exclusions() {
        let excludes = ExcludeList::with_defaults();

        assert!(excludes.should_exclude(Path::new(".env")));
        assert!(excludes.should_exclude(Path::new(".hidden")));
        assert!(excludes.should_exclude(Path::new("README.md")));
        assert!(excludes.should_exclude(Path::new("LICENSE")));

        assert!(!excludes.should_exclude(Path::new("main.py")));
        assert!(!excludes.should_exclude(Path::new("src.rs")));
    }

    #[test]
    fn test_basename_only_matching() {
        let excludes = ExcludeList::with_defaults();

        // The directory part plays no role in the verdict
        assert!(excludes.should_exclude(Path::new("/some/dir/.hidden")));
        assert!(excludes.should_exclude(Path::new("docs/README.md")));
        assert!(!excludes.should_exclude(Path::new(".config/main.py")));
    }

    #[test]
    fn test_literal_patterns_are_not_globs() {
        let excludes = ExcludeList::from_patterns(&["*.txt"]);

        // "*.txt" is a literal basename here, not a wildcard
        assert!(!excludes.should_exclude(Path::new("notes.txt")));
        assert!(excludes.should_exclude(Path::new("*.txt")));
    }

    #[test]
    fn test_without_dotfile_wildcard() {
        let excludes = ExcludeList::from_patterns(&["README.md"]);

        assert!(!excludes.should_exclude(Path::new(".env")));
        assert!(excludes.should_exclude(Path::new("README.md")));
    }

    #[test]
    fn test_case_sensitive() {
        let excludes = ExcludeList::with_defaults();

        assert!(!excludes.should_exclude(Path::new("readme.md")));
        assert!(!excludes.should_exclude(Path::new("license")));
    }
}
