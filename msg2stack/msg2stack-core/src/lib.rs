//! Core type model for the msg2stack glue generator.
//!
//! Key components:
//! - [`type_spec`] — resolved type specifications and message definitions
//! - [`alias`] — the read-once short-name → `package/name` index
//!
//! Parsing lives in `msg2stack-msg`; code emission in `msg2stack-codegen`.
//! This crate only describes what those two exchange.

mod alias;
mod error;
mod type_spec;

pub use alias::AliasTable;
pub use error::AliasIndexError;
pub use type_spec::{ArraySize, Builtin, Field, MessageDefinition, TypeName, TypeSpec};
