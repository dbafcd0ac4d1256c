//! Transcript records and the line tokenizer
//!
//! A transcript is a recorded shell session: `$ cd` / `$ ls` commands
//! interleaved with `ls` output (`dir <name>` or `<size> <name>`).
//! Each non-blank line maps to exactly one `Record`.

use crate::error::RecordError;

/// One step of a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `$ cd ..`
    NavigateUp,
    /// `$ cd /`
    NavigateToRoot,
    /// `$ cd <name>`; creates the child if it was never listed
    NavigateInto(String),
    /// `$ ls`
    BeginListing,
    /// `dir <name>`
    DeclareSubdirectory(String),
    /// `<size> <name>`
    DeclareFile { name: String, size: u64 },
}

/// Marker that starts a command line.
const COMMAND_PROMPT: &str = "$";

/// Tokenize a single transcript line.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Record>, RecordError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let record = if first == COMMAND_PROMPT {
        let command = words.next().ok_or_else(|| RecordError::malformed(line))?;
        match command {
            "cd" => {
                let target = words.next().ok_or_else(|| RecordError::malformed(line))?;
                match target {
                    "/" => Record::NavigateToRoot,
                    ".." => Record::NavigateUp,
                    name => Record::NavigateInto(name.to_string()),
                }
            }
            "ls" => Record::BeginListing,
            other => {
                return Err(RecordError::UnknownCommand {
                    command: other.to_string(),
                });
            }
        }
    } else if first == "dir" {
        let name = words.next().ok_or_else(|| RecordError::malformed(line))?;
        Record::DeclareSubdirectory(name.to_string())
    } else {
        let size: u64 = first.parse().map_err(|_| RecordError::malformed(first))?;
        let name = words.next().ok_or_else(|| RecordError::malformed(line))?;
        Record::DeclareFile {
            name: name.to_string(),
            size,
        }
    };

    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("$ cd /"), Ok(Some(Record::NavigateToRoot)));
        assert_eq!(parse_line("$ cd .."), Ok(Some(Record::NavigateUp)));
        assert_eq!(
            parse_line("$ cd a"),
            Ok(Some(Record::NavigateInto("a".to_string())))
        );
        assert_eq!(parse_line("$ ls"), Ok(Some(Record::BeginListing)));
    }

    #[test]
    fn test_parse_listing_entries() {
        assert_eq!(
            parse_line("dir e"),
            Ok(Some(Record::DeclareSubdirectory("e".to_string())))
        );
        assert_eq!(
            parse_line("14848514 b.txt"),
            Ok(Some(Record::DeclareFile {
                name: "b.txt".to_string(),
                size: 14848514,
            }))
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("\r"), Ok(None));
    }

    #[test]
    fn test_trailing_carriage_return() {
        assert_eq!(parse_line("$ ls\r"), Ok(Some(Record::BeginListing)));
        assert_eq!(
            parse_line("584 i\r"),
            Ok(Some(Record::DeclareFile {
                name: "i".to_string(),
                size: 584,
            }))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("$ rm -rf d"),
            Err(RecordError::UnknownCommand {
                command: "rm".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_size() {
        assert_eq!(
            parse_line("12ab c.dat"),
            Err(RecordError::MalformedRecord {
                token: "12ab".to_string()
            })
        );
        // Negative sizes are not byte counts
        assert!(matches!(
            parse_line("-5 c.dat"),
            Err(RecordError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        assert!(matches!(
            parse_line("$"),
            Err(RecordError::MalformedRecord { .. })
        ));
        assert!(matches!(
            parse_line("$ cd"),
            Err(RecordError::MalformedRecord { .. })
        ));
        assert!(matches!(
            parse_line("dir"),
            Err(RecordError::MalformedRecord { .. })
        ));
        assert!(matches!(
            parse_line("100"),
            Err(RecordError::MalformedRecord { .. })
        ));
    }
}
