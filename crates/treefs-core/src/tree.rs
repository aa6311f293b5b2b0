//! Arena-backed node tree, statistics and snapshots.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::{NamespaceError, Result};
use crate::node::{Node, NodeId, NodeKind, ROOT_NAME};

/// Summary statistics for a namespace tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of files.
    pub total_files: u64,
    /// Total number of directories, not counting the root.
    pub total_dirs: u64,
    /// Maximum depth reached (root is 0).
    pub max_depth: u32,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file at the given depth.
    pub fn record_file(&mut self, depth: u32) {
        self.total_files += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a directory at the given depth.
    pub fn record_dir(&mut self, depth: u32) {
        self.total_dirs += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Kind of a snapshot entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// Owned, serializable copy of a subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Node name; `/` for the root.
    pub name: CompactString,
    /// File or directory.
    pub kind: EntryKind,
    /// Children in name order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

/// Tree of nodes owned by a single arena.
///
/// The arena is the only owner of nodes. Parent links and child maps hold
/// [`NodeId`]s, so there are no ownership cycles and dropping the tree
/// frees every node at once. Nodes are never removed, which keeps every
/// issued id valid for the lifetime of the tree.
///
/// Methods taking a [`NodeId`] expect ids issued by this tree; the public
/// surface goes through [`Namespace`](crate::Namespace), which only hands
/// out its own ids.
#[derive(Debug, Clone)]
pub(crate) struct NodeTree {
    nodes: Vec<Node>,
}

impl NodeTree {
    /// Create a tree containing only an empty root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new_directory(NodeId::ROOT, ROOT_NAME, None)],
        }
    }

    /// Identifier of the root directory.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a node by an id issued by this tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Parent of a node; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Look up a direct child by exact name.
    pub fn get_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent).child(name)
    }

    /// Direct children of a node, in name order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.node(id).children().map(move |(_, child)| self.node(child))
    }

    /// Names of the direct children of a node, in name order.
    pub fn child_names(&self, id: NodeId) -> Vec<String> {
        self.node(id)
            .children()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Insert a new empty directory under `parent`.
    pub fn add_directory(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        self.add_child(parent, name, NodeKind::directory())
    }

    /// Insert a new file under `parent`.
    pub fn add_file(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        self.add_child(parent, name, NodeKind::File)
    }

    /// Link a new node under `parent`.
    ///
    /// Fails if `parent` is a file or already has a child called `name`;
    /// the tree is unchanged on failure.
    fn add_child(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> Result<NodeId> {
        let id = NodeId::new(self.nodes.len() as u64);

        match &self.nodes[parent.index()].kind {
            NodeKind::File => {
                return Err(NamespaceError::not_a_directory(self.full_path(parent)));
            }
            NodeKind::Directory { children } if children.contains_key(name) => {
                return Err(NamespaceError::AlreadyExists {
                    path: join_path(&self.full_path(parent), name),
                });
            }
            NodeKind::Directory { .. } => {}
        }

        if let NodeKind::Directory { children } = &mut self.nodes[parent.index()].kind {
            children.insert(CompactString::from(name), id);
        }
        self.nodes.push(Node {
            id,
            name: CompactString::from(name),
            kind,
            parent: Some(parent),
        });
        Ok(id)
    }

    /// Absolute path of a node, rebuilt from parent links.
    pub fn full_path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut cursor = id;
        while let Some(parent) = self.parent(cursor) {
            names.push(self.node(cursor).name.as_str());
            cursor = parent;
        }

        if names.is_empty() {
            return ROOT_NAME.to_string();
        }

        names.iter().rev().fold(String::new(), |mut path, name| {
            path.push('/');
            path.push_str(name);
            path
        })
    }

    /// Distance from the root (root is 0).
    pub fn depth(&self, id: NodeId) -> u32 {
        let mut depth = 0;
        let mut cursor = id;
        while let Some(parent) = self.parent(cursor) {
            depth += 1;
            cursor = parent;
        }
        depth
    }

    /// Count files and directories in the whole tree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::new();
        for node in self.nodes.iter().filter(|node| !node.is_root()) {
            let depth = self.depth(node.id);
            match node.kind {
                NodeKind::File => stats.record_file(depth),
                NodeKind::Directory { .. } => stats.record_dir(depth),
            }
        }
        stats
    }

    /// Take an owned copy of the subtree rooted at `id`.
    ///
    /// Recurses once per level; creation depth is capped at
    /// [`MAX_DEPTH_LIMIT`](crate::MAX_DEPTH_LIMIT) so this stays shallow.
    pub fn snapshot(&self, id: NodeId) -> NodeSnapshot {
        let node = self.node(id);
        let kind = if node.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        NodeSnapshot {
            name: node.name.clone(),
            kind,
            children: node
                .children()
                .map(|(_, child)| self.snapshot(child))
                .collect(),
        }
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `name` to an absolute directory path.
pub(crate) fn join_path(dir: &str, name: &str) -> String {
    if dir == ROOT_NAME {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}
