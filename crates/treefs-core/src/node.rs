//! File and directory node types.

use std::collections::BTreeMap;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Name reserved for the root directory.
pub const ROOT_NAME: &str = "/";

/// Unique identifier for a node within a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Identifier of the root directory of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from a u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Type of namespace node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Regular file. Files never have children.
    File,
    /// Directory.
    Directory {
        /// Children keyed by name, iterated in name order.
        children: BTreeMap<CompactString, NodeId>,
    },
}

impl NodeKind {
    /// An empty directory.
    pub fn directory() -> Self {
        NodeKind::Directory {
            children: BTreeMap::new(),
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory { .. })
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// A single file or directory in the namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Identifier of this node.
    pub id: NodeId,

    /// File/directory name (not full path).
    pub name: CompactString,

    /// Node type and its children, if any.
    pub kind: NodeKind,

    /// Containing directory; `None` only for the root.
    pub parent: Option<NodeId>,
}

impl Node {
    /// Create a new file node.
    pub fn new_file(id: NodeId, name: impl Into<CompactString>, parent: Option<NodeId>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: NodeKind::File,
            parent,
        }
    }

    /// Create a new, empty directory node.
    pub fn new_directory(
        id: NodeId,
        name: impl Into<CompactString>,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: NodeKind::directory(),
            parent,
        }
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if this node is the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Look up a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        match &self.kind {
            NodeKind::Directory { children } => children.get(name).copied(),
            NodeKind::File => None,
        }
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        match &self.kind {
            NodeKind::Directory { children } => children.len(),
            NodeKind::File => 0,
        }
    }

    /// Iterate over `(name, id)` pairs of direct children in name order.
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        let children = match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File => None,
        };
        children
            .into_iter()
            .flat_map(|map| map.iter().map(|(name, id)| (name.as_str(), *id)))
    }
}
