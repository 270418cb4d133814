//! Integration tests for the public prefix tree API and the word list loader.

use prefix_tree::data_structures::{PrefixTree, PrefixTreeError, PrefixTreeNode};
use prefix_tree::loader::{load_words_file, read_words};
use std::collections::HashSet;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::thread;

/// Test the reference scenario through the public API
#[test]
fn test_reference_scenario() {
    let tree = PrefixTree::from_strings(["ABC", "ABD", "A", "XYZ"]);

    assert_eq!(tree.complete("ABC"), vec!["ABC"]);
    assert_eq!(tree.complete("ABD"), vec!["ABD"]);
    let completions: HashSet<String> = tree.complete("AB").into_iter().collect();
    assert_eq!(completions, HashSet::from(["ABC".to_string(), "ABD".to_string()]));
    assert!(tree.complete("BC").is_empty());
    assert!(tree.contains("A"));
    assert!(!tree.contains("AB"));

    let all: HashSet<String> = tree.strings().into_iter().collect();
    let expected: HashSet<String> = ["ABC", "ABD", "A", "XYZ"].iter().map(|s| s.to_string()).collect();
    assert_eq!(all, expected);
}

/// Test building nodes by hand through the public node API
#[test]
fn test_node_api() {
    let mut node = PrefixTreeNode::new('s');
    node.add_child('e', PrefixTreeNode::new('e')).unwrap();

    assert!(node.has_child('e'));
    assert_eq!(node.child_count(), 1);
    assert_eq!(
        node.add_child('e', PrefixTreeNode::new('e')).unwrap_err(),
        PrefixTreeError::DuplicateChild('e')
    );
    assert_eq!(
        node.get_child('x').unwrap_err(),
        PrefixTreeError::ChildNotFound('x')
    );
}

/// Test loading a word list from a file on disk
#[test]
fn test_load_words_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "sea\nseashells\nsells\nshore\n").unwrap();

    let tree = load_words_file(&path).unwrap();
    assert_eq!(tree.complete("se"), vec!["sea", "seashells", "sells"]);
    assert_eq!(tree.len(), 4);
}

/// Test that a tree can be shared between threads behind an external lock
#[test]
fn test_externally_synchronized_use() {
    let tree = Arc::new(Mutex::new(read_words(Cursor::new("seed\n")).unwrap()));
    let mut handles = Vec::new();

    for t in 0..4 {
        let tree = Arc::clone(&tree);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                tree.lock().unwrap().insert(format!("t{t}_{i}"));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let tree = tree.lock().unwrap();
    assert_eq!(tree.len(), 201);
    assert_eq!(tree.complete("t3_").len(), 50);
    assert!(tree.contains("seed"));
}
