// src/tree.rs

use std::{
    collections::HashSet,
    fmt,
    io::{self, Write},
};

use crate::{
    param::{ParamExt, ParamKind},
    Hash40,
};

const EXPANDED: char = '▾';
const COLLAPSED: char = '▸';
const LEAF: char = '•';

/// How a node is reached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeName {
    Root,
    /// Key of a struct child.
    Struct(Hash40),
    /// Index of a list child.
    List(usize),
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeName::Root => f.write_str("root"),
            NodeName::Struct(hash) => write!(f, "{}", hash),
            NodeName::List(index) => write!(f, "{}", index),
        }
    }
}

/// Expand/collapse state plus rendering options for a param tree.
///
/// Nodes shallower than `depth` start expanded; a toggled path flips its
/// node's default. Paths are child names joined by `/`, the root being the
/// empty path.
#[derive(Debug, Clone)]
pub struct TreeView {
    depth: Option<usize>,
    show_values: bool,
    toggled: HashSet<String>,
}

impl Default for TreeView {
    fn default() -> Self {
        Self {
            depth: Some(1),
            show_values: true,
            toggled: HashSet::new(),
        }
    }
}

impl TreeView {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` expands everything.
    pub fn with_depth(mut self, depth: Option<usize>) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    /// Flip the expansion of the node at `path`.
    pub fn toggle(&mut self, path: &str) {
        let path = normalize(path);
        if !self.toggled.remove(&path) {
            self.toggled.insert(path);
        }
    }

    pub fn is_expanded(&self, path: &str, level: usize, node: &ParamKind) -> bool {
        if !can_expand(node) {
            return false;
        }
        let by_default = self.depth.map_or(true, |d| level < d);
        by_default != self.toggled.contains(path)
    }

    pub fn render<W: Write>(&self, root: &ParamKind, out: &mut W) -> io::Result<()> {
        self.render_node(root, NodeName::Root, "", 0, out)
    }

    fn render_node<W: Write>(
        &self,
        node: &ParamKind,
        name: NodeName,
        path: &str,
        level: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let indent = "  ".repeat(level);
        if !can_expand(node) {
            return match (node.children_len(), node.value_string()) {
                (Some(n), _) => writeln!(out, "{}{} {} [{}]", indent, LEAF, name, n),
                (None, Some(value)) if self.show_values => {
                    writeln!(out, "{}{} {} = {}", indent, LEAF, name, value)
                }
                _ => writeln!(out, "{}{} {}", indent, LEAF, name),
            };
        }

        let expanded = self.is_expanded(path, level, node);
        let caret = if expanded { EXPANDED } else { COLLAPSED };
        let count = node.children_len().unwrap_or(0);
        writeln!(out, "{}{} {} [{}]", indent, caret, name, count)?;
        if !expanded {
            return Ok(());
        }

        match node {
            ParamKind::Struct(children) => {
                for (hash, child) in children.0.iter() {
                    let name = NodeName::Struct(*hash);
                    let child_path = join(path, &name);
                    self.render_node(child, name, &child_path, level + 1, out)?;
                }
            }
            ParamKind::List(children) => {
                for (index, child) in children.0.iter().enumerate() {
                    let name = NodeName::List(index);
                    let child_path = join(path, &name);
                    self.render_node(child, name, &child_path, level + 1, out)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn render_to_string(&self, root: &ParamKind) -> String {
        let mut buf = Vec::new();
        // writes into a Vec cannot fail
        let _ = self.render(root, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Only non-empty lists and structs can expand.
fn can_expand(node: &ParamKind) -> bool {
    node.children_len().map_or(false, |n| n > 0)
}

fn join(parent: &str, name: &NodeName) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

fn normalize(path: &str) -> String {
    path.trim().trim_matches('/').to_string()
}
