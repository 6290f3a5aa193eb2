//! Forward declarations for one message type.

use msg2stack_core::TypeSpec;

use crate::naming;
use crate::source::SourceWriter;

pub(crate) fn emit(root: &TypeSpec) -> String {
    let mut w = SourceWriter::new();
    w.line(format!("{};", naming::writer_signature(root)));
    w.line(format!("{};", naming::reader_signature(root)));
    w.line(format!("{};", naming::callback_signature(root)));
    w.finish()
}
