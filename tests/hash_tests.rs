// Tests for the chunked hasher

use std::fs;
use std::path::Path;
use std::str::FromStr;

use dirsum::hash::{DirsumError, HashComputer, HashMode};

#[test]
fn test_full_hash_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.bin");
    fs::write(&file, b"hello world").unwrap();

    let computer = HashComputer::new();
    let first = computer.hash_full(&file).unwrap();
    let second = computer.hash_full(&file).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 16); // 64-bit digest, 16 hex characters
    assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_equal_content_gives_equal_digest() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.bin");
    let b = dir.path().join("b.bin");
    fs::write(&a, b"same bytes").unwrap();
    fs::write(&b, b"same bytes").unwrap();

    let computer = HashComputer::new();
    assert_eq!(
        computer.hash_full(&a).unwrap(),
        computer.hash_full(&b).unwrap()
    );
}

#[test]
fn test_empty_file_digest_matches_xxh3_vector() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("empty");
    fs::write(&file, b"").unwrap();

    let computer = HashComputer::new();

    // XXH3-64 of empty input
    assert_eq!(computer.hash_full(&file).unwrap(), "2d06800538d394c2");
}

#[test]
fn test_streaming_across_chunk_boundaries() {
    // File larger than the chunk size so the loop runs several times
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("large.bin");
    let content: Vec<u8> = (0..10_000u32).flat_map(|i| i.to_le_bytes()).collect();
    fs::write(&file, &content).unwrap();

    let chunked = HashComputer::with_chunk_size(1024);
    let whole = HashComputer::with_chunk_size(content.len() + 1);

    // Chunk size must not change the digest
    assert_eq!(
        chunked.hash_full(&file).unwrap(),
        whole.hash_full(&file).unwrap()
    );
}

#[test]
fn test_partial_hash_depends_only_on_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let computer = HashComputer::with_chunk_size(1024);
    let cap = 2 * 1024; // max_chunks = 2

    let mut content = vec![0xabu8; 4096];
    let a = dir.path().join("a.bin");
    fs::write(&a, &content).unwrap();

    // Change a byte past the cap: partial digest must not move
    content[3000] = 0xcd;
    let b = dir.path().join("b.bin");
    fs::write(&b, &content).unwrap();

    let digest_a = computer.hash_partial(&a, 2).unwrap();
    let digest_b = computer.hash_partial(&b, 2).unwrap();
    assert_eq!(digest_a, digest_b);

    // Change a byte inside the cap: partial digest must move
    content[100] = 0xef;
    let c = dir.path().join("c.bin");
    fs::write(&c, &content).unwrap();

    let digest_c = computer.hash_partial(&c, 2).unwrap();
    assert_ne!(digest_a, digest_c);

    assert!(content.len() > cap);
}

#[test]
fn test_partial_equals_full_under_cap() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("small.bin");
    fs::write(&file, b"well under one chunk").unwrap();

    let computer = HashComputer::new();
    assert_eq!(
        computer.hash_partial(&file, 25).unwrap(),
        computer.hash_full(&file).unwrap()
    );
}

#[test]
fn test_appending_past_cap_keeps_partial_digest() {
    let dir = tempfile::tempdir().unwrap();
    let computer = HashComputer::with_chunk_size(512);

    let base = vec![7u8; 512 * 3];
    let file = dir.path().join("grow.bin");
    fs::write(&file, &base).unwrap();
    let before = computer.hash_partial(&file, 3).unwrap();

    let mut grown = base.clone();
    grown.extend_from_slice(&[9u8; 4096]);
    fs::write(&file, &grown).unwrap();
    let after = computer.hash_partial(&file, 3).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_missing_file_error() {
    let computer = HashComputer::new();
    let result = computer.hash_full(Path::new("no_such_file_anywhere.bin"));

    assert!(result.is_err());
    match result {
        Err(DirsumError::FileNotFound { .. }) => {}
        Err(DirsumError::IoError { .. }) => {}
        _ => panic!("Expected FileNotFound or IoError"),
    }
}

#[test]
fn test_hash_mode_parsing() {
    assert_eq!(HashMode::from_str("full").unwrap(), HashMode::Full);
    assert_eq!(HashMode::from_str("partial").unwrap(), HashMode::Partial);
    assert_eq!(HashMode::from_str("FULL").unwrap(), HashMode::Full);
    assert!(HashMode::from_str("fast").is_err());

    assert_eq!(HashMode::Full.to_string(), "full");
    assert_eq!(HashMode::Partial.to_string(), "partial");
}

#[test]
fn test_hash_with_mode_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.bin");
    fs::write(&file, b"dispatch me").unwrap();

    let computer = HashComputer::new();
    let full = computer.hash_with_mode(&file, HashMode::Full, 25).unwrap();
    let partial = computer.hash_with_mode(&file, HashMode::Partial, 25).unwrap();

    // Small file, so both modes agree
    assert_eq!(full, partial);
}
