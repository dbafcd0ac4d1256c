//! Tree construction from transcript records

use tracing::{debug, trace};

use crate::error::RecordError;
use crate::record::Record;

use super::node::{Directory, ROOT_NAME};

/// Builds a `Directory` tree by replaying records in order.
///
/// The current location is kept as a stack of child indices leading from
/// the root; an empty stack means the root itself. Navigation therefore
/// never holds a borrow into the tree between records.
///
/// `total` is the sum of every file added so far. Keeping it within `u64`
/// bounds every directory size, since no directory holds more than the root.
#[derive(Debug)]
pub struct TreeBuilder {
    root: Directory,
    location: Vec<usize>,
    total: u64,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            root: Directory::root(),
            location: Vec::new(),
            total: 0,
        }
    }

    /// Depth of the current location (root = 0).
    pub fn depth(&self) -> usize {
        self.location.len()
    }

    /// Sum of all file sizes added so far.
    pub fn total_size(&self) -> u64 {
        self.total
    }

    /// Slash-separated path of the current location, e.g. `/a/e`.
    pub fn current_path(&self) -> String {
        let mut path = String::from(ROOT_NAME);
        let mut dir = &self.root;
        for (i, &index) in self.location.iter().enumerate() {
            dir = &dir.subdirectories()[index];
            if i > 0 {
                path.push('/');
            }
            path.push_str(dir.name());
        }
        path
    }

    /// Apply one record to the tree.
    pub fn process(&mut self, record: Record) -> Result<(), RecordError> {
        match record {
            Record::NavigateUp => {
                if self.location.pop().is_none() {
                    return Err(RecordError::NavigationUnderflow);
                }
                debug!(path = %self.current_path(), "cd ..");
            }
            Record::NavigateToRoot => {
                self.location.clear();
                debug!("cd /");
            }
            Record::NavigateInto(name) => {
                let (index, created) = self.current_mut().ensure_subdirectory(&name);
                if created {
                    debug!(name = %name, "implicitly created directory on cd");
                }
                self.location.push(index);
                debug!(path = %self.current_path(), "cd");
            }
            Record::BeginListing => {}
            Record::DeclareSubdirectory(name) => {
                let (_, created) = self.current_mut().ensure_subdirectory(&name);
                if created {
                    debug!(name = %name, "new directory");
                } else {
                    trace!(name = %name, "directory already known");
                }
            }
            Record::DeclareFile { name, size } => {
                if self.current_mut().file(&name).is_some() {
                    trace!(name = %name, size, "duplicate file ignored");
                    return Ok(());
                }
                self.total = self
                    .total
                    .checked_add(size)
                    .ok_or_else(|| RecordError::SizeOverflow { name: name.clone() })?;
                self.current_mut().ensure_file(&name, size);
                trace!(name = %name, size, "new file");
            }
        }
        Ok(())
    }

    /// Apply every record in order, stopping at the first failure.
    pub fn process_all<I>(&mut self, records: I) -> Result<(), RecordError>
    where
        I: IntoIterator<Item = Record>,
    {
        for record in records {
            self.process(record)?;
        }
        Ok(())
    }

    /// Hand out the completed tree.
    pub fn finish(self) -> Directory {
        self.root
    }

    fn current_mut(&mut self) -> &mut Directory {
        let mut dir = &mut self.root;
        for &index in &self.location {
            // Indices on the stack were produced by `ensure_subdirectory` and
            // directories are never removed, so every step resolves.
            dir = match dir.subdirectory_at_mut(index) {
                Some(child) => child,
                None => unreachable!("navigation stack points at a missing directory"),
            };
        }
        dir
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a tree from an in-memory record sequence.
pub fn build<I>(records: I) -> Result<Directory, RecordError>
where
    I: IntoIterator<Item = Record>,
{
    let mut builder = TreeBuilder::new();
    builder.process_all(records)?;
    Ok(builder.finish())
}
