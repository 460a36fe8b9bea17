//! Graphviz snapshots of a [`Tree`].
//!
//! Every node is named after its value. Edges to children carry an `L` or `R` label and a
//! missing child is drawn as a point-shaped `nullL<id>` / `nullR<id>` terminal. When a value
//! occurs more than once, later occurrences are named `"<value>#<n>"` and labelled with the
//! plain value, so duplicated values never share a graph node.

use std::collections::HashMap;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::binary_tree::{Node, Tree};
use crate::error::ExportError;

/// Emits the left edge, the whole left subtree, then the right edge, node by node.
pub fn to_dot(tree: &Tree) -> String {
    let mut dot = String::from("digraph BST {\n");
    dot.push_str("    node [fontname=\"Arial\"];\n");

    let mut ids = Ids::default();
    let mut pending: Vec<Step<'_>> = Vec::new();
    if let Some(root) = tree.root() {
        let id = ids.assign(&mut dot, root.value);
        pending.push(Step::Left(root, id));
    }

    while let Some(step) = pending.pop() {
        let (side, child, id) = match step {
            Step::Left(node, id) => {
                pending.push(Step::Right(node, id.clone()));
                ("L", node.left.as_deref(), id)
            }
            Step::Right(node, id) => ("R", node.right.as_deref(), id),
        };
        match child {
            Some(child) => {
                let child_id = ids.assign(&mut dot, child.value);
                let _ = writeln!(
                    dot,
                    "    {} -> {} [label=\"{side}\"];",
                    quote(&id),
                    quote(&child_id)
                );
                pending.push(Step::Left(child, child_id));
            }
            None => {
                let terminal = quote(&format!("null{side}{id}"));
                let _ = writeln!(dot, "    {terminal} [shape=point];");
                let _ = writeln!(dot, "    {} -> {terminal};", quote(&id));
            }
        }
    }

    dot.push_str("}\n");
    dot
}

/// Which edge of a node is written next.
enum Step<'a> {
    Left(&'a Node, String),
    Right(&'a Node, String),
}

/// Writes [`to_dot`] of `tree` to `path`.
pub fn write_dot(tree: &Tree, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    fs::write(path, to_dot(tree)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "DOT file saved");
    Ok(())
}

#[derive(Default)]
struct Ids {
    seen: HashMap<i32, usize>,
}

impl Ids {
    fn assign(&mut self, dot: &mut String, value: i32) -> String {
        let count = self.seen.entry(value).or_insert(0);
        *count += 1;
        if *count == 1 {
            return value.to_string();
        }
        let id = format!("{value}#{}", *count - 1);
        let _ = writeln!(dot, "    {} [label=\"{value}\"];", quote(&id));
        id
    }
}

/// Identifiers that are not plain DOT ids or integers get double quotes.
fn quote(id: &str) -> String {
    let is_name = id
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    let digits = id.strip_prefix('-').unwrap_or(id);
    let is_integer = !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());

    if is_name || is_integer {
        id.to_string()
    } else {
        format!("\"{id}\"")
    }
}
