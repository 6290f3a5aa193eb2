//! C++ artifact emission for the msg2stack glue generator.
//!
//! Each [`Artifact`] turns a resolved root type and its field list into one
//! self-contained text fragment. The fragments are assembled into aggregate
//! source files by an external build step that invokes the generator once
//! per known message type, so everything emitted here must be valid at any
//! concatenation position:
//!
//! - [`Artifact::Header`] — forward declarations only
//! - [`Artifact::SerializerSource`] — `write__<type>` body plus the
//!   asynchronous delivery callback that feeds subscriptions
//! - [`Artifact::DeserializerSource`] — `read__<type>` body
//! - the three snippet artifacts — one `else if` dispatch branch each,
//!   keyed on the full type name string
//!
//! Generated functions return `bool` and never throw; every failure path
//! prints a diagnostic prefixed with the function's own name so host logs
//! stay attributable. Builtin leaf `write__`/`read__` primitives are
//! provided by the host support layer, not emitted here.

mod callback;
mod deserialize;
mod header;
mod naming;
mod registry;
mod serialize;
mod source;

pub use source::SourceWriter;

use msg2stack_core::{MessageDefinition, TypeSpec};

/// The selectable output artifacts, one per generator invocation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Header,
    SerializerSource,
    DeserializerSource,
    AdvertiseSnippet,
    PublishSnippet,
    SubscribeSnippet,
}

impl Artifact {
    /// Emit this artifact for `root` with its resolved `def`.
    ///
    /// The snippet and header artifacts only depend on the root type; they
    /// accept the definition anyway so every mode is driven the same way.
    pub fn generate(self, root: &TypeSpec, def: &MessageDefinition) -> String {
        match self {
            Self::Header => header::emit(root),
            Self::SerializerSource => {
                let mut out = serialize::emit(root, def);
                out.push('\n');
                out.push_str(&callback::emit(root));
                out
            }
            Self::DeserializerSource => deserialize::emit(root, def),
            Self::AdvertiseSnippet => registry::emit_advertise(root),
            Self::PublishSnippet => registry::emit_publish(root),
            Self::SubscribeSnippet => registry::emit_subscribe(root),
        }
    }
}
