//! Generated function names and C++ signatures.
//!
//! The `write__`/`read__`/`ros_callback__` prefixes plus the normalized
//! type suffix form the recursive naming scheme: a compound field's
//! serializer call resolves to whatever this generator emits when invoked
//! on that field's type, and builtin suffixes land on the host-provided
//! primitive layer.

use msg2stack_core::TypeSpec;

pub(crate) fn writer_name(spec: &TypeSpec) -> String {
    format!("write__{}", spec.normalized())
}

pub(crate) fn reader_name(spec: &TypeSpec) -> String {
    format!("read__{}", spec.normalized())
}

pub(crate) fn callback_name(spec: &TypeSpec) -> String {
    format!("ros_callback__{}", spec.normalized())
}

pub(crate) fn writer_signature(spec: &TypeSpec) -> String {
    format!(
        "bool {}(const {}& msg, int stack)",
        writer_name(spec),
        spec.cxx_decl()
    )
}

pub(crate) fn reader_signature(spec: &TypeSpec) -> String {
    format!("bool {}(int stack, {} *msg)", reader_name(spec), spec.cxx_decl())
}

pub(crate) fn callback_signature(spec: &TypeSpec) -> String {
    format!(
        "void {}(const boost::shared_ptr<{} const>& msg, SubscriberProxy *proxy)",
        callback_name(spec),
        spec.cxx_decl()
    )
}
