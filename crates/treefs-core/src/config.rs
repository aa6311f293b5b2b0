//! Namespace configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default limit on the length of a single name.
pub const DEFAULT_MAX_NAME_LEN: usize = 255;

/// Default deepest level at which nodes may be created.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Hard ceiling on `max_depth`. Snapshots, their serialization and
/// printing are recursive over depth, so trees never grow past this.
pub const MAX_DEPTH_LIMIT: u32 = 512;

/// Configuration for a [`Namespace`](crate::Namespace).
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct NamespaceConfig {
    /// Longest name, in bytes, accepted for new files and directories.
    #[builder(default = "DEFAULT_MAX_NAME_LEN")]
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,

    /// Deepest level at which nodes may be created. The root is at
    /// depth 0. Values above [`MAX_DEPTH_LIMIT`] are clamped to it.
    #[builder(default = "DEFAULT_MAX_DEPTH")]
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Let pattern segments match files as well as directories.
    #[builder(default = "false")]
    #[serde(default)]
    pub match_files: bool,
}

fn default_max_name_len() -> usize {
    DEFAULT_MAX_NAME_LEN
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

impl NamespaceConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_name_len == Some(0) {
            return Err("Maximum name length must be greater than zero".to_string());
        }
        if self.max_depth.is_some_and(|depth| depth > MAX_DEPTH_LIMIT) {
            return Err(format!("Maximum depth cannot exceed {MAX_DEPTH_LIMIT}"));
        }
        Ok(())
    }
}

impl NamespaceConfig {
    /// Create a new config builder.
    pub fn builder() -> NamespaceConfigBuilder {
        NamespaceConfigBuilder::default()
    }

    /// Check whether a node may be created at `depth`.
    pub fn allows_depth(&self, depth: u32) -> bool {
        depth <= self.effective_max_depth()
    }

    /// `max_depth` clamped to [`MAX_DEPTH_LIMIT`].
    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
            match_files: false,
        }
    }
}
