//! Tree-sitter language bindings for parol grammar files.
//!
//! The parse tables are generated from `tree-sitter/grammar.js` ahead of time
//! and linked into this crate by the build script. [`language`] hands out the
//! resulting [`Language`] so it can be registered with a [`Parser`] or used to
//! compile queries.

use tree_sitter::{Language, Parser};

mod error;
mod node_types;

pub use error::LoadError;
pub use node_types::{node_types, ChildType, NodeType, NodeTypeRef};

extern "C" {
    fn tree_sitter_tree_sitter_parol() -> Language;
}

/// Returns the tree-sitter [`Language`] for parol grammar files.
///
/// The handle refers to statically compiled, read-only tables: every call
/// returns an equal value and it can be shared between threads.
pub fn language() -> Language {
    unsafe { tree_sitter_tree_sitter_parol() }
}

/// Creates a [`Parser`] with [`language`] already assigned.
pub fn parser() -> Result<Parser, LoadError> {
    let language = language();
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(LoadError::Incompatible)?;
    if language.node_kind_count() == 0 {
        return Err(LoadError::Empty);
    }
    Ok(parser)
}

/// Returns the JSON description of the node types.
pub fn node_types_json() -> &'static str {
    include_str!("../../../tree-sitter/src/node-types.json")
}

/// Returns the grammar in tree-sitter's JSON form.
pub fn grammar_json() -> &'static str {
    include_str!("../../../tree-sitter/src/grammar.json")
}

/// Returns the syntax highlighting query.
pub fn highlights_query() -> &'static str {
    include_str!("../../../tree-sitter/queries/highlights.scm")
}
