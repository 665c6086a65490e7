//! Error types for loading the parol grammar.

use thiserror::Error;

/// Raised when the tree-sitter runtime refuses the compiled grammar.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The grammar was generated for an ABI the linked runtime does not support.
    #[error("Error loading Parol grammar")]
    Incompatible(#[source] tree_sitter::LanguageError),

    /// The runtime accepted the handle but it describes no node kinds.
    ///
    /// Only a corrupt or truncated `parser.c` artifact produces this.
    #[error("Error loading Parol grammar")]
    Empty,
}
