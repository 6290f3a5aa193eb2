//! ROS message definition → stack-table glue generator.
//!
//! # Pipeline
//!
//! ```text
//! alias index file
//!   └─ Generator::load_index      – read-once AliasTable
//!       └─ Generator::compile     – resolve root token, parse definition
//!           └─ CompiledMessage::emit – one Artifact per invocation mode
//! ```
//!
//! Each generator run is independent: the only state is the alias table
//! loaded at construction, and it is read-only afterwards. Parallel runs as
//! separate processes share nothing.

mod error;
mod generator;

pub use error::GeneratorError;
pub use generator::{CompiledMessage, Generator};
pub use msg2stack_codegen as codegen;
pub use msg2stack_codegen::Artifact;
pub use msg2stack_core as core;
pub use msg2stack_msg as msg;
