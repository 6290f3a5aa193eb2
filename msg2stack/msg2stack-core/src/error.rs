//! Error type for alias-index loading.

/// Error raised while loading the alias index.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AliasIndexError {
    /// An index line is not of the form `package/name` with identifier-syntax
    /// parts.
    #[error("bad alias index entry: {line}")]
    BadEntry { line: String },
}
