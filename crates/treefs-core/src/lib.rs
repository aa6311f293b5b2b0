//! Core namespace tree for treefs.
//!
//! This crate models the structure and resolution semantics of a
//! filesystem without touching disk: an arena of file and directory
//! nodes, a working directory, `.`/`..` aware path resolution,
//! `mkdir -p` style creation and whole-segment `*` pattern expansion.
//!
//! # Example
//!
//! ```rust
//! use treefs_core::Namespace;
//!
//! let mut ns = Namespace::new();
//! assert!(ns.mkdir("/a/b/DC"));
//! assert!(ns.mkdir("/a/c/DC"));
//!
//! assert_eq!(ns.get_files("/a/*/DC"), ["/a/b/DC", "/a/c/DC"]);
//!
//! assert!(ns.chdir("/a/b"));
//! assert!(ns.chdir(".."));
//! assert_eq!(ns.current_path(), "/a");
//! ```

mod config;
mod error;
mod glob;
mod namespace;
mod node;
pub mod path;
mod tree;

pub use config::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_NAME_LEN, MAX_DEPTH_LIMIT, NamespaceConfig,
    NamespaceConfigBuilder,
};
pub use error::{NamespaceError, Result};
pub use namespace::Namespace;
pub use node::{Node, NodeId, NodeKind, ROOT_NAME};
pub use tree::{EntryKind, NodeSnapshot, TreeStats};
