//! Test utilities for writing transcripts to disk and generating large ones.
//!
//! This module is only compiled for tests and with the `test-utils` feature (benchmarks).

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A short session: `/` holds `a` (94853) and `d` (24933642), `a` holds `e` (584).
pub const SAMPLE_TRANSCRIPT: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

/// A transcript file inside a temporary directory.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTranscript {
    dir: TempDir,
    path: PathBuf,
}

impl TestTranscript {
    /// Write `contents` to `transcript.txt` in a fresh temporary directory.
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("transcript.txt");
        fs::write(&path, contents).expect("Failed to write transcript");
        Self { dir, path }
    }

    /// Path to the transcript file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The temporary directory holding the transcript.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Generate a transcript that walks a complete tree.
///
/// Every directory has `fanout` subdirectories down to `depth` levels and
/// `files_per_dir` files of 1000, 2000, ... bytes. Each
/// directory is listed once and left with `cd ..`.
pub fn synthetic_transcript(depth: usize, fanout: usize, files_per_dir: usize) -> String {
    let mut out = String::from("$ cd /\n");
    write_listing(&mut out, depth, fanout, files_per_dir);
    out
}

fn write_listing(out: &mut String, depth: usize, fanout: usize, files_per_dir: usize) {
    out.push_str("$ ls\n");
    if depth > 0 {
        for d in 0..fanout {
            let _ = writeln!(out, "dir d{}", d);
        }
    }
    for f in 0..files_per_dir {
        let _ = writeln!(out, "{} f{}.dat", (f + 1) * 1000, f);
    }
    if depth == 0 {
        return;
    }
    for d in 0..fanout {
        let _ = writeln!(out, "$ cd d{}", d);
        write_listing(out, depth - 1, fanout, files_per_dir);
        out.push_str("$ cd ..\n");
    }
}

/// Total bytes in a transcript produced by [`synthetic_transcript`].
pub fn synthetic_total_size(depth: usize, fanout: usize, files_per_dir: usize) -> u64 {
    let per_dir: u64 = (1..=files_per_dir as u64).map(|n| n * 1000).sum();
    let dirs: u64 = (0..=depth as u32).map(|level| (fanout as u64).pow(level)).sum();
    per_dir * dirs
}
