//! Prefix Tree Implementation
//!
//! This module provides a multi-way prefix tree (trie) that stores strings as
//! paths of `char` symbols from a start node. Membership tests and prefix
//! completion cost time proportional to the length of the query and the size of
//! the result, independent of how many strings the tree holds.
//!
//! # Example
//!
//! ```
//! use prefix_tree::data_structures::PrefixTree;
//!
//! let tree = PrefixTree::from_strings(["ABC", "ABD", "A", "XYZ"]);
//! assert!(tree.contains("A"));
//! assert!(!tree.contains("AB"));
//! assert_eq!(tree.complete("AB"), vec!["ABC", "ABD"]);
//! ```

mod error;
mod node;

use std::fmt;

pub use error::{PrefixTreeError, PrefixTreeResult};
pub use node::PrefixTreeNode;

/// Counters describing the work done by a single completion query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Child lookups made while following the prefix from the root
    pub lookups: usize,

    /// Nodes visited while enumerating the matching subtree
    pub nodes_visited: usize,
}

/// A multi-way prefix tree over strings.
///
/// Key features:
/// * Insertion, membership and completion walk only the matched path
/// * Deterministic enumeration order (ascending by symbol at every level)
/// * Iterative traversal, so very long strings never exhaust the call stack
/// * Empty string support: it is stored by marking the start node terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTree {
    /// The start node; its symbol is the reserved start marker
    root: PrefixTreeNode,

    /// Number of edges (non-start nodes) created by insertion
    size: usize,

    /// Number of distinct strings stored
    len: usize,
}

impl PrefixTree {
    /// Creates a new empty `PrefixTree`.
    pub fn new() -> Self {
        Self {
            root: PrefixTreeNode::start(),
            size: 0,
            len: 0,
        }
    }

    /// Creates a tree and inserts every string from `strings` in order.
    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        tree.extend(strings);
        tree
    }

    /// Returns the number of edges in the tree.
    ///
    /// This counts nodes created by insertion, not stored strings: inserting a
    /// string only adds the edges its path did not already have. Use
    /// [`PrefixTree::len`] for the number of strings.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of distinct strings stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no edges have been created.
    ///
    /// A tree holding only the empty string has no edges and is therefore
    /// still considered empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the start node of the tree.
    pub fn root(&self) -> &PrefixTreeNode {
        &self.root
    }

    /// Inserts a string into the tree.
    ///
    /// Inserting a string that is already present changes nothing. The empty
    /// string marks the start node terminal.
    ///
    /// # Returns
    ///
    /// The number of edges this call created.
    ///
    /// # Panics
    ///
    /// Panics if the tree's internal structure is found to be inconsistent,
    /// which cannot happen through the public API.
    pub fn insert<S>(&mut self, string: S) -> usize
    where
        S: AsRef<str>,
    {
        let string = string.as_ref();
        match self.try_insert(string) {
            Ok(created) => {
                tracing::trace!(string, created, size = self.size, "inserted string");
                created
            }
            Err(err) => {
                tracing::error!(error = %err, string, "prefix tree invariant violated during insert");
                panic!("prefix tree invariant violated while inserting {string:?}: {err}");
            }
        }
    }

    fn try_insert(&mut self, string: &str) -> PrefixTreeResult<usize> {
        let mut created = 0;
        let mut node = &mut self.root;

        for symbol in string.chars() {
            node = if node.has_child(symbol) {
                node.get_child_mut(symbol)?
            } else {
                created += 1;
                node.add_child(symbol, PrefixTreeNode::new(symbol))?
            };
        }

        if !node.is_terminal() {
            node.mark_terminal();
            self.len += 1;
        }
        self.size += created;

        Ok(created)
    }

    /// Returns `true` if `string` was inserted into the tree.
    ///
    /// Prefixes and extensions of stored strings are not contained unless they
    /// were inserted themselves.
    pub fn contains<S>(&self, string: S) -> bool
    where
        S: AsRef<str>,
    {
        self.find_node(string)
            .is_some_and(PrefixTreeNode::is_terminal)
    }

    /// Returns the node reached by following `prefix` from the start node, or
    /// `None` if the path does not exist.
    pub fn find_node<S>(&self, prefix: S) -> Option<&PrefixTreeNode>
    where
        S: AsRef<str>,
    {
        self.walk(prefix.as_ref(), &mut TraversalStats::default())
    }

    /// Follows `prefix` from the start node, counting each child lookup.
    fn walk(&self, prefix: &str, stats: &mut TraversalStats) -> Option<&PrefixTreeNode> {
        prefix.chars().try_fold(&self.root, |node, symbol| {
            stats.lookups += 1;
            node.get_child(symbol).ok()
        })
    }

    /// Returns every stored string that starts with `prefix`.
    ///
    /// Results are in depth-first order with children taken in ascending
    /// symbol order. A prefix with no matches yields an empty vector.
    pub fn complete<S>(&self, prefix: S) -> Vec<String>
    where
        S: AsRef<str>,
    {
        let (completions, stats) = self.complete_with_stats(prefix);
        tracing::trace!(
            matches = completions.len(),
            lookups = stats.lookups,
            nodes_visited = stats.nodes_visited,
            "completed prefix"
        );
        completions
    }

    /// Same as [`PrefixTree::complete`], also reporting how much of the tree
    /// the query touched.
    pub fn complete_with_stats<S>(&self, prefix: S) -> (Vec<String>, TraversalStats)
    where
        S: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut stats = TraversalStats::default();

        let completions = match self.walk(prefix, &mut stats) {
            Some(node) => Self::collect_terminals(node, prefix, &mut stats),
            None => Vec::new(),
        };
        (completions, stats)
    }

    /// Returns every string stored in the tree.
    pub fn strings(&self) -> Vec<String> {
        self.complete("")
    }

    /// Collects the paths of all terminal nodes below `start`, each prefixed
    /// with `prefix`, in pre-order.
    fn collect_terminals(
        start: &PrefixTreeNode,
        prefix: &str,
        stats: &mut TraversalStats,
    ) -> Vec<String> {
        let mut completions = Vec::new();
        let mut path = String::from(prefix);
        let mut stack = vec![(start, path.len(), None)];

        while let Some((node, parent_len, symbol)) = stack.pop() {
            stats.nodes_visited += 1;

            path.truncate(parent_len);
            if let Some(symbol) = symbol {
                path.push(symbol);
            }
            if node.is_terminal() {
                completions.push(path.clone());
            }

            // Reversed so the smallest symbol is popped first.
            let len = path.len();
            stack.extend(
                node.children()
                    .rev()
                    .map(|(symbol, child)| (child, len, Some(symbol))),
            );
        }

        completions
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Extend<S> for PrefixTree
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, strings: I) {
        for string in strings {
            self.insert(string);
        }
    }
}

impl<S> FromIterator<S> for PrefixTree
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(strings: I) -> Self {
        Self::from_strings(strings)
    }
}

impl fmt::Display for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrefixTree({:?})", self.strings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(strings: Vec<String>) -> HashSet<String> {
        strings.into_iter().collect()
    }

    #[test]
    fn test_tree_basic_operations() {
        let mut tree = PrefixTree::new();

        // Test initial state
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.len(), 0);

        // Test insertion
        assert_eq!(tree.insert("hello"), 5);
        assert_eq!(tree.size(), 5);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());

        // Test membership
        assert!(tree.contains("hello"));
        assert!(!tree.contains("hell"));
        assert!(!tree.contains("hello!"));
        assert!(!tree.contains("world"));

        // Shared prefix only adds the new edges
        assert_eq!(tree.insert("help"), 1);
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_reference_scenario() {
        let tree = PrefixTree::from_strings(["ABC", "ABD", "A", "XYZ"]);

        assert_eq!(tree.complete("ABC"), vec!["ABC"]);
        assert_eq!(tree.complete("ABD"), vec!["ABD"]);
        assert_eq!(tree.complete("AB"), vec!["ABC", "ABD"]);
        assert!(tree.complete("BC").is_empty());
        assert!(tree.contains("A"));
        assert!(!tree.contains("AB"));
        assert_eq!(
            as_set(tree.strings()),
            as_set(vec!["ABC".into(), "ABD".into(), "A".into(), "XYZ".into()])
        );

        // A, B, C, D, X, Y, Z
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_enumeration_order_is_preorder_by_symbol() {
        let tree = PrefixTree::from_strings(["XYZ", "ABD", "A", "ABC", "B"]);
        assert_eq!(tree.strings(), vec!["A", "ABC", "ABD", "B", "XYZ"]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = PrefixTree::new();
        assert!(tree.is_empty());
        assert!(tree.strings().is_empty());
        assert!(!tree.contains(""));
        assert!(tree.complete("").is_empty());
        assert!(tree.complete("A").is_empty());
    }

    #[test]
    fn test_empty_string() {
        let mut tree = PrefixTree::new();
        assert_eq!(tree.insert(""), 0);

        assert!(tree.contains(""));
        assert_eq!(tree.strings(), vec![""]);
        assert!(tree.root().is_terminal());
        // No edges were created, so the tree still reports empty.
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);

        tree.insert("A");
        assert_eq!(tree.strings(), vec!["", "A"]);
        assert_eq!(tree.complete("A"), vec!["A"]);
    }

    #[test]
    fn test_idempotent_insert() {
        let mut tree = PrefixTree::from_strings(["car", "cart"]);
        let size = tree.size();
        let strings = tree.strings();

        assert_eq!(tree.insert("car"), 0);
        assert_eq!(tree.insert("cart"), 0);
        assert_eq!(tree.size(), size);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.strings(), strings);
    }

    #[test]
    fn test_prefix_of_existing_string_adds_no_edges() {
        let mut tree = PrefixTree::from_strings(["seashells"]);
        assert_eq!(tree.insert("sea"), 0);
        assert!(tree.contains("sea"));
        assert_eq!(tree.complete("sea"), vec!["sea", "seashells"]);
    }

    #[test]
    fn test_find_node() {
        let tree = PrefixTree::from_strings(["ABC", "ABD"]);

        let node = tree.find_node("AB").expect("path exists");
        assert_eq!(node.symbol(), Some('B'));
        assert_eq!(node.child_count(), 2);
        assert!(!node.is_terminal());

        assert!(tree.find_node("AC").is_none());
        assert_eq!(tree.find_node("").map(PrefixTreeNode::symbol), Some(None));
    }

    #[test]
    fn test_completion_stats() {
        let tree = PrefixTree::from_strings(["ABC", "ABD", "A", "XYZ"]);

        let (completions, stats) = tree.complete_with_stats("AB");
        assert_eq!(completions, vec!["ABC", "ABD"]);
        assert_eq!(stats.lookups, 2);
        // B, C, D
        assert_eq!(stats.nodes_visited, 3);

        let (completions, stats) = tree.complete_with_stats("AQZ");
        assert!(completions.is_empty());
        assert_eq!(stats.lookups, 2);
        assert_eq!(stats.nodes_visited, 0);
    }

    #[test]
    fn test_non_ascii_symbols() {
        let tree = PrefixTree::from_strings(["café", "cafés", "caña"]);
        assert!(tree.contains("café"));
        assert_eq!(tree.complete("caf"), vec!["café", "cafés"]);
        assert_eq!(tree.complete("ca").len(), 3);
    }

    #[test]
    fn test_long_string_does_not_overflow() {
        let long = "a".repeat(200_000);
        let mut tree = PrefixTree::new();
        tree.insert(&long);

        assert!(tree.contains(&long));
        assert_eq!(tree.size(), 200_000);
        assert_eq!(tree.strings(), vec![long]);
    }

    #[test]
    fn test_long_string_clone_compare_and_subtree_drop() {
        let long = "a".repeat(200_000);
        let tree = PrefixTree::from_strings([&long]);

        let copy = tree.clone();
        assert_eq!(copy, tree);
        assert!(copy.contains(&long));

        let rebuilt = PrefixTree::from_strings([&long]);
        assert_eq!(rebuilt, tree);

        let mut longer = rebuilt.clone();
        longer.insert(format!("{long}b"));
        assert_ne!(longer, tree);

        // Formatting stays shallow no matter how deep the tree is.
        assert!(format!("{tree:?}").contains("children: ['a']"));

        let subtree = tree.find_node("a").cloned();
        assert_eq!(subtree.as_ref().map(PrefixTreeNode::child_count), Some(1));
        drop(subtree);
        drop(longer);
        drop(copy);
    }

    #[test]
    fn test_collect_and_display() {
        let tree: PrefixTree = vec!["b", "a"].into_iter().collect();
        assert_eq!(tree.to_string(), r#"PrefixTree(["a", "b"])"#);
        assert_eq!(PrefixTree::default().to_string(), "PrefixTree([])");
    }
}
