//! Parsing front end for the msg2stack glue generator.
//!
//! # Pipeline
//!
//! ```text
//! alias index text ── AliasTable::parse (msg2stack-core)
//!                         │
//! type token ───────── resolve_type ──► TypeSpec
//!                         │
//! definition text ──── parse_definition ──► MessageDefinition
//! ```
//!
//! [`resolve_type`] handles a single token such as `geometry_msgs/Point`,
//! `string[12]`, or `uint8[]`; [`parse_definition`] drives it over a whole
//! definition file. Both take the [`AliasTable`](msg2stack_core::AliasTable)
//! explicitly — there is no ambient resolver state.

mod error;
mod parser;
mod token;

pub use error::{DefinitionError, TypeError};
pub use parser::parse_definition;
pub use token::resolve_type;
