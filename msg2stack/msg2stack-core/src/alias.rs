//! The short-name → `package/name` alias index.
//!
//! The index is loaded once per generator run from a newline-delimited list
//! of `package/name` entries and is read-only afterwards. It is passed
//! explicitly into the token resolver rather than living in module state, so
//! every resolution within one run sees the same table.

use std::collections::HashMap;

use crate::error::AliasIndexError;

/// Read-once mapping from bare message name to its `(package, name)` pair.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, (String, String)>,
}

impl AliasTable {
    /// An empty table; bare compound references will fail to resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse index text, one `package/name` entry per line.
    ///
    /// Blank lines are skipped. Anything else that is not exactly
    /// `identifier/identifier` is fatal. A later entry for the same short
    /// name overwrites the earlier one.
    pub fn parse(text: &str) -> Result<Self, AliasIndexError> {
        let mut entries = HashMap::new();
        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let Some((package, name)) = line.split_once('/') else {
                return Err(AliasIndexError::BadEntry { line: line.into() });
            };
            if !is_identifier(package) || !is_identifier(name) {
                return Err(AliasIndexError::BadEntry { line: line.into() });
            }
            entries.insert(name.to_string(), (package.to_string(), name.to_string()));
        }
        Ok(Self { entries })
    }

    /// Look up the `(package, name)` pair for a bare message name.
    pub fn lookup(&self, short_name: &str) -> Option<(&str, &str)> {
        self.entries
            .get(short_name)
            .map(|(p, n)| (p.as_str(), n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
