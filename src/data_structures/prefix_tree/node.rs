//! Node implementation for the prefix tree.
//!
//! This module provides the `PrefixTreeNode` structure used by `PrefixTree`.
//! Each node owns its children directly, so the whole tree is a single
//! ownership hierarchy rooted at the tree's start node.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use super::error::{PrefixTreeError, PrefixTreeResult};

/// A node in the prefix tree.
///
/// Each node represents one symbol on the path from the root. Terminal nodes
/// mark the end of an inserted string. Children are kept in symbol order so
/// that enumeration is deterministic.
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack, so
/// arbitrarily deep paths are handled without recursion.
pub struct PrefixTreeNode {
    /// Symbol this node represents, `None` for the start node
    symbol: Option<char>,

    /// Map of symbols to owned child nodes
    children: BTreeMap<char, PrefixTreeNode>,

    /// Whether an inserted string ends at this node
    terminal: bool,
}

impl PrefixTreeNode {
    /// Creates a new non-terminal node for the given symbol.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol: Some(symbol),
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    /// Creates the start node that sits at the root of a tree.
    pub(crate) fn start() -> Self {
        Self {
            symbol: None,
            children: BTreeMap::new(),
            terminal: false,
        }
    }

    /// Returns the symbol of this node, or `None` for the start node.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Returns `true` if an inserted string ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn mark_terminal(&mut self) {
        self.terminal = true;
    }

    /// Returns the number of distinct child symbols.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has a child for `symbol`.
    pub fn has_child(&self, symbol: char) -> bool {
        self.children.contains_key(&symbol)
    }

    /// Returns the child for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns `PrefixTreeError::ChildNotFound` if no such child exists.
    pub fn get_child(&self, symbol: char) -> PrefixTreeResult<&PrefixTreeNode> {
        self.children
            .get(&symbol)
            .ok_or(PrefixTreeError::ChildNotFound(symbol))
    }

    /// Mutable counterpart of [`PrefixTreeNode::get_child`].
    pub(crate) fn get_child_mut(&mut self, symbol: char) -> PrefixTreeResult<&mut PrefixTreeNode> {
        self.children
            .get_mut(&symbol)
            .ok_or(PrefixTreeError::ChildNotFound(symbol))
    }

    /// Attaches `node` as the child for `symbol` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `PrefixTreeError::DuplicateChild` if `symbol` already has a child.
    /// Callers are expected to check [`PrefixTreeNode::has_child`] first.
    pub fn add_child(
        &mut self,
        symbol: char,
        node: PrefixTreeNode,
    ) -> PrefixTreeResult<&mut PrefixTreeNode> {
        debug_assert_eq!(node.symbol, Some(symbol), "child keyed under a different symbol");
        match self.children.entry(symbol) {
            btree_map::Entry::Occupied(_) => Err(PrefixTreeError::DuplicateChild(symbol)),
            btree_map::Entry::Vacant(entry) => Ok(entry.insert(node)),
        }
    }

    /// Copies this node without its children.
    fn shallow_copy(&self) -> Self {
        Self {
            symbol: self.symbol,
            children: BTreeMap::new(),
            terminal: self.terminal,
        }
    }

    /// Detaches and yields every child of this node.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = PrefixTreeNode> {
        std::mem::take(&mut self.children).into_values()
    }

    /// Iterates over the children in ascending symbol order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &PrefixTreeNode)> {
        self.children.iter().map(|(symbol, child)| (*symbol, child))
    }
}

impl Clone for PrefixTreeNode {
    fn clone(&self) -> Self {
        let mut copy = self.shallow_copy();
        let mut top_level = self.children.iter();
        // Post-order: a copy is attached to its parent once its own subtree is done.
        let mut stack: Vec<(btree_map::Iter<'_, char, PrefixTreeNode>, PrefixTreeNode)> = Vec::new();

        loop {
            let next = match stack.last_mut() {
                Some((children, _)) => children.next(),
                None => top_level.next(),
            };

            match next {
                Some((_, child)) => stack.push((child.children.iter(), child.shallow_copy())),
                None => match stack.pop() {
                    Some((_, finished)) => {
                        let parent = match stack.last_mut() {
                            Some((_, parent)) => parent,
                            None => &mut copy,
                        };
                        if let Some(symbol) = finished.symbol {
                            parent.children.insert(symbol, finished);
                        }
                    }
                    None => return copy,
                },
            }
        }
    }
}

impl PartialEq for PrefixTreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((left, right)) = stack.pop() {
            if left.symbol != right.symbol
                || left.terminal != right.terminal
                || left.children.len() != right.children.len()
            {
                return false;
            }
            for ((left_symbol, left_child), (right_symbol, right_child)) in
                left.children.iter().zip(&right.children)
            {
                if left_symbol != right_symbol {
                    return false;
                }
                stack.push((left_child, right_child));
            }
        }

        true
    }
}

impl Eq for PrefixTreeNode {}

impl Drop for PrefixTreeNode {
    fn drop(&mut self) {
        // Detached nodes are dropped with no children left, so this never nests.
        let mut pending: Vec<PrefixTreeNode> = self.take_children().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}

impl fmt::Debug for PrefixTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixTreeNode")
            .field("symbol", &self.symbol)
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for PrefixTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(symbol) => write!(f, "({symbol})"),
            None => f.write_str("()"),
        }
    }
}
