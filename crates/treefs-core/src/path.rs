//! Path parsing.
//!
//! Paths are `/`-delimited. Parsing only splits and classifies segments;
//! `.` and `..` are interpreted later by whoever walks the tree, so the
//! same segment list feeds both resolution and wildcard matching.

use crate::error::{NamespaceError, Result};

/// Path separator.
pub const SEPARATOR: char = '/';

/// Segment that matches any single directory name.
pub const WILDCARD: &str = "*";

/// A single component of a parsed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// `.`
    Current,
    /// `..`
    Parent,
    /// `*`
    Wildcard,
    /// Any other name.
    Name(&'a str),
}

impl<'a> Segment<'a> {
    fn classify(part: &'a str) -> Self {
        match part {
            "." => Segment::Current,
            ".." => Segment::Parent,
            WILDCARD => Segment::Wildcard,
            name => Segment::Name(name),
        }
    }
}

/// Split a path into segments, dropping empty ones.
///
/// `//`, leading and trailing separators all collapse, so `"/a//b/"`
/// parses the same as `"a/b"`. Use [`is_absolute`] to recover the origin.
pub fn parse_path(path: &str) -> Vec<Segment<'_>> {
    path.split(SEPARATOR)
        .filter(|part| !part.is_empty())
        .map(Segment::classify)
        .collect()
}

/// Check whether a path starts at the root.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Split a path at its final separator into `(directory, leaf)`.
///
/// Without a separator the directory part is empty, meaning the current
/// directory. A leaf directly under the root yields `"/"` as directory.
pub fn split_leaf(path: &str) -> (&str, &str) {
    match path.rfind(SEPARATOR) {
        None => ("", path),
        Some(0) => ("/", &path[1..]),
        Some(idx) => (&path[..idx], &path[idx + 1..]),
    }
}

/// Check that `name` can be used for a new node.
pub fn validate_name(name: &str, max_len: usize) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name == "." || name == ".." {
        "name is reserved for navigation"
    } else if name == WILDCARD {
        "wildcard is reserved"
    } else if name.contains(SEPARATOR) {
        "name contains a separator"
    } else if name.len() > max_len {
        "name is too long"
    } else {
        return Ok(());
    };
    Err(NamespaceError::invalid_name(name, reason))
}
