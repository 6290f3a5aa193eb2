//! Asynchronous delivery callback emission.
//!
//! The callback bridges an arriving native message into a script callback:
//! it owns a transient stack for the duration of one delivery and releases
//! it on every exit path, including serialization or invocation failure.
//! The `do { } while(0)` scope is the single bail-out point that keeps the
//! release unconditional. No thread affinity is assumed; the delivery
//! thread need not be the one that created the subscription.

use msg2stack_core::TypeSpec;

use crate::naming;
use crate::source::SourceWriter;

pub(crate) fn emit(root: &TypeSpec) -> String {
    let func = naming::callback_name(root);
    let mut w = SourceWriter::new();

    w.line(naming::callback_signature(root));
    w.open();
    w.line("int stack = simCreateStack();");
    w.line("if(stack != -1)");
    w.open();
    w.line("do");
    w.open();
    w.line(format!("if(!{}(*msg, stack))", naming::writer_name(root)));
    w.open();
    w.line("break;");
    w.close();
    w.line(
        "if(simCallScriptFunctionEx(proxy->topicCallback.scriptId, proxy->topicCallback.name.c_str(), stack) == -1)",
    );
    w.open();
    w.diagnostic(&func, "\"call script failed.\"");
    w.line("break;");
    w.close();
    w.close();
    w.line("while(0);");
    w.line("simReleaseStack(stack);");
    w.close();
    w.close();
    w.finish()
}
