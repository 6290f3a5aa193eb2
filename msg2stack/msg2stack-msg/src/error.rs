//! Error types for token resolution and definition parsing.
//!
//! The two kinds are kept distinct because the CLI maps them to different
//! process exit codes: an unrecognized line is a definition syntax error,
//! while a field whose type token cannot be resolved aborts through the
//! type-error path.

/// Error raised while resolving a single type token.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    /// The token is neither a builtin nor exactly `identifier/identifier`
    /// after alias substitution.
    #[error("bad type: {token}")]
    Malformed { token: String },
}

/// Error raised while parsing a message definition file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DefinitionError {
    /// A non-empty line is neither a constant nor a `type name` field.
    /// Carries the comment-stripped line text for the caller to report.
    #[error("unrecognized line {line_no}: {line}")]
    UnrecognizedLine { line_no: usize, line: String },

    /// A field line names a type that does not resolve.
    #[error("line {line_no}: {source}")]
    BadFieldType {
        line_no: usize,
        #[source]
        source: TypeError,
    },
}
