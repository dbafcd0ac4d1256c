//! Loading transcripts into trees
//!
//! Ties the tokenizer to the builder and attaches 1-based line numbers to
//! any record error.

use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TranscriptError};
use crate::record::{Record, parse_line};
use crate::tree::{Directory, TreeBuilder};

/// Path argument that means "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Tokenize a whole transcript, skipping blank lines.
pub fn parse_transcript(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let record = parse_line(line).map_err(|source| TranscriptError::Line {
            line: index + 1,
            source,
        })?;
        records.extend(record);
    }
    Ok(records)
}

/// Tokenize and build in a single pass, stopping at the first bad line.
pub fn build_tree(text: &str) -> Result<Directory> {
    let mut builder = TreeBuilder::new();
    let mut count = 0usize;

    for (index, line) in text.lines().enumerate() {
        let at_line = |source| TranscriptError::Line {
            line: index + 1,
            source,
        };
        if let Some(record) = parse_line(line).map_err(at_line)? {
            builder.process(record).map_err(at_line)?;
            count += 1;
        }
    }

    debug!(records = count, "transcript replayed");
    Ok(builder.finish())
}

/// Read a transcript from a file, or from stdin for `None` / `-`.
pub fn read_transcript(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new(STDIN_PATH) => {
            debug!(path = %p.display(), "reading transcript");
            Ok(std::fs::read_to_string(p)?)
        }
        _ => {
            debug!("reading transcript from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
