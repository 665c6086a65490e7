//! Loading the compiled grammar into the tree-sitter runtime.

use std::collections::HashSet;
use std::thread;

use tree_sitter::{Parser, LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION};
use tree_sitter_parol::{language, parser};

#[test]
fn can_load_grammar() {
    let mut parser = Parser::new();
    parser
        .set_language(language())
        .expect("Error loading Parol grammar");
    assert!(language().node_kind_count() > 0);
}

#[test]
fn parser_helper_loads_grammar() {
    if let Err(err) = parser() {
        panic!("{err}");
    }
}

#[test]
fn language_is_stable_across_calls() {
    let first = language();
    for _ in 0..16 {
        assert_eq!(language(), first);
    }
}

#[test]
fn language_is_shared_across_threads() {
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(language)).collect();
    let languages: HashSet<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(languages.len(), 1);
    assert!(languages.contains(&language()));
}

#[test]
fn threads_can_parse_with_their_own_parser() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let mut parser = parser().unwrap();
                let source = format!("%start S{i}\n%%\nS{i}: \"x\";\n");
                let tree = parser.parse(&source, None).unwrap();
                !tree.root_node().has_error()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn abi_version_is_supported() {
    let version = language().version();
    assert!(
        (MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION).contains(&version),
        "unsupported language version {version}"
    );
}
