//! Aggregate error for the generator pipeline.

use msg2stack_core::AliasIndexError;
use msg2stack_msg::{DefinitionError, TypeError};

/// Error returned by [`Generator`](crate::Generator) operations.
///
/// The variants keep the underlying taxonomy visible because callers map
/// them to distinct process exit codes: definition syntax errors are
/// reported differently from type-token and I/O failures.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The alias index contains a malformed entry.
    #[error(transparent)]
    AliasIndex(#[from] AliasIndexError),

    /// The root type token does not resolve.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// The definition file does not parse.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}
