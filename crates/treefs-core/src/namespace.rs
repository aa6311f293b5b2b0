//! The namespace: a node tree plus a working directory.

use tracing::{debug, trace};

use crate::config::NamespaceConfig;
use crate::error::{NamespaceError, Result};
use crate::glob::PatternMatcher;
use crate::node::{Node, NodeId};
use crate::path::{self, Segment, WILDCARD};
use crate::tree::{NodeSnapshot, NodeTree, TreeStats, join_path};

/// Outcome of applying one segment to a cursor.
enum Step<'p> {
    /// The cursor moved (or stayed, for `.` and `..` at the root).
    Moved(NodeId),
    /// The named child does not exist.
    Missing(&'p str),
    /// The cursor is a file, so nothing can be below it.
    BlockedByFile,
}

/// In-memory hierarchical namespace.
///
/// Owns the whole tree and tracks a current directory that relative paths
/// are resolved against. The current directory is always a directory and
/// only changes through [`Namespace::chdir`].
#[derive(Debug, Clone)]
pub struct Namespace {
    tree: NodeTree,
    current: NodeId,
    config: NamespaceConfig,
}

impl Namespace {
    /// Create an empty namespace with default configuration.
    pub fn new() -> Self {
        Self::with_config(NamespaceConfig::default())
    }

    /// Create an empty namespace.
    pub fn with_config(config: NamespaceConfig) -> Self {
        let tree = NodeTree::new();
        let current = tree.root();
        Self {
            tree,
            current,
            config,
        }
    }

    /// Configuration in effect.
    pub fn config(&self) -> &NamespaceConfig {
        &self.config
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.tree.get(id)
    }

    /// Absolute path of a node, or `None` for an id this namespace never issued.
    pub fn path_of(&self, id: NodeId) -> Option<String> {
        self.tree.get(id).map(|_| self.tree.full_path(id))
    }

    /// Id of the current directory.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Create a directory and any missing parents, like `mkdir -p`.
    ///
    /// Succeeds if the path already exists.
    pub fn mkdir(&mut self, path: &str) -> bool {
        self.try_mkdir(path).is_ok()
    }

    /// Create a directory and any missing parents, reporting why it failed.
    ///
    /// Directories created before a failing segment are kept.
    pub fn try_mkdir(&mut self, path: &str) -> Result<NodeId> {
        let result = self.navigate_create(path);
        match &result {
            Ok(id) => debug!(path, resolved = %self.tree.full_path(*id), "mkdir"),
            Err(err) => debug!(path, error = %err, "mkdir rejected"),
        }
        result
    }

    /// Change the current directory.
    pub fn chdir(&mut self, path: &str) -> bool {
        self.try_chdir(path).is_ok()
    }

    /// Change the current directory, reporting why it failed.
    ///
    /// On failure the current directory is unchanged.
    pub fn try_chdir(&mut self, path: &str) -> Result<NodeId> {
        let target = self.lookup(path).and_then(|id| {
            if self.tree.node(id).is_dir() {
                Ok(id)
            } else {
                Err(NamespaceError::not_a_directory(self.tree.full_path(id)))
            }
        });

        match target {
            Ok(id) => {
                self.current = id;
                debug!(path, cwd = %self.current_path(), "chdir");
                Ok(id)
            }
            Err(err) => {
                debug!(path, error = %err, "chdir rejected");
                Err(err)
            }
        }
    }

    /// Absolute path of the current directory.
    pub fn current_path(&self) -> String {
        self.tree.full_path(self.current)
    }

    /// Names in the current directory, sorted.
    pub fn list_current(&self) -> Vec<String> {
        self.tree.child_names(self.current)
    }

    /// Create an empty file. Parent directories must already exist.
    ///
    /// A path without a separator names a file in the current directory,
    /// never the root.
    pub fn create_file(&mut self, path: &str) -> bool {
        self.try_create_file(path).is_ok()
    }

    /// Create an empty file, reporting why it failed.
    ///
    /// A path without a separator names a file in the current directory.
    pub fn try_create_file(&mut self, path: &str) -> Result<NodeId> {
        let result = self.create_file_inner(path);
        match &result {
            Ok(id) => debug!(path, resolved = %self.tree.full_path(*id), "file created"),
            Err(err) => debug!(path, error = %err, "create_file rejected"),
        }
        result
    }

    fn create_file_inner(&mut self, path: &str) -> Result<NodeId> {
        if path.is_empty() {
            return Err(NamespaceError::EmptyPath);
        }

        let (dir, leaf) = path::split_leaf(path);
        path::validate_name(leaf, self.config.max_name_len)?;

        let parent = if dir.is_empty() {
            self.current
        } else {
            self.lookup(dir)?
        };
        if !self.tree.node(parent).is_dir() {
            return Err(NamespaceError::not_a_directory(self.tree.full_path(parent)));
        }

        self.check_depth(self.tree.depth(parent) + 1, parent, leaf)?;
        self.tree.add_file(parent, leaf)
    }

    /// Check whether a path resolves to any node.
    pub fn path_exists(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// Check whether a path resolves to a directory.
    pub fn is_dir(&self, path: &str) -> bool {
        self.resolve(path)
            .is_some_and(|id| self.tree.node(id).is_dir())
    }

    /// Check whether a path resolves to a file.
    pub fn is_file(&self, path: &str) -> bool {
        self.resolve(path)
            .is_some_and(|id| self.tree.node(id).is_file())
    }

    /// Resolve a path without creating anything.
    pub fn resolve(&self, path: &str) -> Option<NodeId> {
        self.lookup(path).ok()
    }

    /// Expand a pattern whose segments may be `*`.
    ///
    /// Matches come back in depth-first, by-name order. They are absolute
    /// when the pattern is absolute and relative to the current directory
    /// otherwise. Only directories match unless the namespace is configured
    /// with `match_files`.
    pub fn get_files(&self, pattern: &str) -> Vec<String> {
        let segments = path::parse_path(pattern);
        if segments.is_empty() {
            return Vec::new();
        }

        let absolute = path::is_absolute(pattern);
        let start = self.origin(pattern);
        let matcher = PatternMatcher::new(&self.tree, &segments, self.config.match_files);
        let mut matches = matcher.find_matches(start);

        if absolute {
            for found in &mut matches {
                found.insert(0, '/');
            }
        }

        debug!(pattern, count = matches.len(), "pattern expanded");
        matches
    }

    /// Summary counts for the whole tree.
    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }

    /// Owned copy of the whole tree.
    pub fn snapshot(&self) -> NodeSnapshot {
        self.tree.snapshot(self.tree.root())
    }

    fn origin(&self, path: &str) -> NodeId {
        if path::is_absolute(path) {
            self.tree.root()
        } else {
            self.current
        }
    }

    fn step<'p>(&self, cursor: NodeId, segment: Segment<'p>) -> Step<'p> {
        let name = match segment {
            Segment::Current => return Step::Moved(cursor),
            Segment::Parent => return Step::Moved(self.tree.parent(cursor).unwrap_or(cursor)),
            Segment::Wildcard => WILDCARD,
            Segment::Name(name) => name,
        };

        if self.tree.node(cursor).is_file() {
            return Step::BlockedByFile;
        }
        match self.tree.get_child(cursor, name) {
            Some(child) => Step::Moved(child),
            None => Step::Missing(name),
        }
    }

    /// Walk `path` without creating anything.
    fn lookup(&self, path: &str) -> Result<NodeId> {
        if path.is_empty() {
            return Err(NamespaceError::EmptyPath);
        }

        let mut cursor = self.origin(path);
        for segment in path::parse_path(path) {
            trace!(?segment, at = %self.tree.full_path(cursor), "resolve");
            cursor = match self.step(cursor, segment) {
                Step::Moved(next) => next,
                Step::Missing(name) => {
                    return Err(NamespaceError::not_found(join_path(
                        &self.tree.full_path(cursor),
                        name,
                    )));
                }
                Step::BlockedByFile => {
                    return Err(NamespaceError::not_a_directory(self.tree.full_path(cursor)));
                }
            };
        }
        Ok(cursor)
    }

    /// Walk `path`, creating every missing segment as a directory.
    fn navigate_create(&mut self, path: &str) -> Result<NodeId> {
        if path.is_empty() {
            return Err(NamespaceError::EmptyPath);
        }

        let mut cursor = self.origin(path);
        let mut depth = self.tree.depth(cursor);
        for segment in path::parse_path(path) {
            cursor = match self.step(cursor, segment) {
                Step::Moved(next) => {
                    depth = match segment {
                        Segment::Current => depth,
                        Segment::Parent => depth.saturating_sub(1),
                        Segment::Wildcard | Segment::Name(_) => depth + 1,
                    };
                    next
                }
                Step::Missing(name) => {
                    path::validate_name(name, self.config.max_name_len)?;
                    self.check_depth(depth + 1, cursor, name)?;
                    let created = self.tree.add_directory(cursor, name)?;
                    depth += 1;
                    trace!(path = %self.tree.full_path(created), "directory created");
                    created
                }
                Step::BlockedByFile => {
                    return Err(NamespaceError::not_a_directory(self.tree.full_path(cursor)));
                }
            };
        }
        Ok(cursor)
    }

    /// Check that a child `name` of `parent`, landing at `depth`, may be created.
    fn check_depth(&self, depth: u32, parent: NodeId, name: &str) -> Result<()> {
        if self.config.allows_depth(depth) {
            return Ok(());
        }
        Err(NamespaceError::DepthExceeded {
            path: join_path(&self.tree.full_path(parent), name),
            max_depth: self.config.effective_max_depth(),
        })
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}
