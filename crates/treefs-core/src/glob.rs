//! Whole-segment wildcard expansion.

use tracing::trace;

use crate::node::NodeId;
use crate::path::Segment;
use crate::tree::NodeTree;

/// Depth-first expansion of a parsed pattern over a tree.
///
/// `*` matches any one child directory; literal names match one child
/// directory exactly. Files only match when `match_files` is set.
/// `.` and `..` move without contributing to the produced path.
pub(crate) struct PatternMatcher<'a> {
    tree: &'a NodeTree,
    segments: &'a [Segment<'a>],
    match_files: bool,
}

impl<'a> PatternMatcher<'a> {
    pub(crate) fn new(tree: &'a NodeTree, segments: &'a [Segment<'a>], match_files: bool) -> Self {
        Self {
            tree,
            segments,
            match_files,
        }
    }

    /// Collect every path matched from `start`, relative to it.
    ///
    /// Works from an explicit stack of `(node, segment index, path)`
    /// branches, so pattern length never grows the call stack. Children
    /// are pushed in reverse so they pop in name order.
    pub(crate) fn find_matches(&self, start: NodeId) -> Vec<String> {
        let mut results = Vec::new();
        let mut pending = vec![(start, 0, String::new())];

        while let Some((node, index, path)) = pending.pop() {
            let Some(segment) = self.segments.get(index) else {
                trace!(path = %path, "pattern matched");
                results.push(path);
                continue;
            };

            match *segment {
                Segment::Wildcard => {
                    let children: Vec<_> = self
                        .tree
                        .children(node)
                        .filter(|child| self.matchable(child.id))
                        .collect();
                    for child in children.into_iter().rev() {
                        pending.push((child.id, index + 1, extend(&path, &child.name)));
                    }
                }
                Segment::Current => pending.push((node, index + 1, path)),
                Segment::Parent => {
                    let target = self.tree.parent(node).unwrap_or(node);
                    pending.push((target, index + 1, path));
                }
                Segment::Name(name) => match self.tree.get_child(node, name) {
                    Some(child) if self.matchable(child) => {
                        pending.push((child, index + 1, extend(&path, name)));
                    }
                    _ => trace!(name, "pattern branch pruned"),
                },
            }
        }
        results
    }

    fn matchable(&self, id: NodeId) -> bool {
        self.match_files || self.tree.node(id).is_dir()
    }
}

fn extend(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}/{name}")
    }
}
