use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::error::TreeError;

/// Unbalanced binary search tree of integers. Values smaller than a node go to its left
/// subtree, everything else (duplicates included) goes to its right subtree.
pub struct Tree {
    root: Link,
    len: usize,
}

pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

pub(crate) type Link = Option<Box<Node>>;

pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

/// Depth of every node, pre-order.
struct Depths<'a> {
    pending: Vec<(&'a Node, usize)>,
}

impl Tree {
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    pub fn insert(&mut self, value: i32) {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            cur = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cur = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    pub fn contains(&self, value: i32) -> bool {
        self.find(value).is_some()
    }

    /// Removes one node holding `value`. A node with two children takes over the value of
    /// its in-order successor, which is then removed from the right subtree instead.
    pub fn remove(&mut self, value: i32) -> Result<(), TreeError> {
        match find_slot(&mut self.root, value) {
            Some(slot) => {
                unlink(slot);
                self.len -= 1;
                Ok(())
            }
            None => {
                debug!(value, "remove: not found");
                Err(TreeError::NotFound(value))
            }
        }
    }

    /// Smallest value in the right subtree of the node holding `value`, if it has one.
    pub fn successor(&self, value: i32) -> Result<Option<i32>, TreeError> {
        let node = self.find(value).ok_or(TreeError::NotFound(value))?;
        Ok(node.right.as_deref().map(Node::leftmost))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Sum of the depths of all nodes, the root being at depth 0.
    pub fn internal_path_length(&self) -> usize {
        self.depths().sum()
    }

    pub fn height(&self) -> usize {
        self.depths().map(|depth| depth + 1).max().unwrap_or(0)
    }

    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    fn depths(&self) -> Depths<'_> {
        Depths {
            pending: self.root().into_iter().map(|root| (root, 0)).collect(),
        }
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    fn find(&self, value: i32) -> Option<&Node> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }
}

/// The link owning the first node on the search path that holds `value`.
fn find_slot(mut cur: &mut Link, value: i32) -> Option<&mut Link> {
    loop {
        let ordering = value.cmp(&cur.as_ref()?.value);
        match ordering {
            Ordering::Less => cur = &mut cur.as_mut()?.left,
            Ordering::Equal => return Some(cur),
            Ordering::Greater => cur = &mut cur.as_mut()?.right,
        }
    }
}

/// Removes the node owned by `slot`. With two children the node keeps its place and takes
/// the value of its in-order successor, whose own node is spliced out instead.
fn unlink(slot: &mut Link) {
    let Some(node) = slot else {
        return;
    };
    if node.left.is_some() {
        if let Some(successor) = pop_leftmost(&mut node.right) {
            node.value = successor;
            return;
        }
    }
    let child = node.left.take().or_else(|| node.right.take());
    *slot = child;
}

/// Splices out the leftmost node under `cur` and returns its value.
fn pop_leftmost(mut cur: &mut Link) -> Option<i32> {
    while cur.as_ref()?.left.is_some() {
        cur = &mut cur.as_mut()?.left;
    }
    let Node { value, right, .. } = *cur.take()?;
    *cur = right;
    Some(value)
}

impl Node {
    fn new(value: i32) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    fn leftmost(&self) -> i32 {
        let mut cur = self;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        cur.value
    }
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.value)
    }
}

impl Iterator for Depths<'_> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.pending.pop()?;
        for child in [node.right.as_deref(), node.left.as_deref()].into_iter().flatten() {
            self.pending.push((child, depth + 1));
        }
        Some(depth)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl Drop for Tree {
    // Boxes dropped one at a time, a list-shaped tree would otherwise recurse once per node.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                fmt.write_str(" ")?;
            }
            write!(fmt, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
