//! Dispatch-branch snippets for the host's registration chains.
//!
//! Each snippet is one `else if` branch keyed on the exact full type name.
//! The host build concatenates one branch per known message type into its
//! publish/advertise/subscribe dispatch functions, so the fragments carry
//! the surrounding indentation and reference only names the enclosing
//! functions provide (`topicType`, `topicName`, `queueSize`, `latch`, the
//! proxy pointers, and `nh`).

use msg2stack_core::TypeSpec;

use crate::naming;
use crate::source::SourceWriter;

/// Branch for the outbound-channel creation chain.
pub(crate) fn emit_advertise(root: &TypeSpec) -> String {
    let mut w = SourceWriter::new();
    w.open_snippet();
    w.line(format!("else if(topicType == \"{}\")", root.full_name()));
    w.open();
    w.line(format!(
        "publisherProxy->publisher = nh->advertise<{}>(topicName, queueSize, latch);",
        root.cxx_decl()
    ));
    w.close();
    w.finish()
}

/// Branch for the script-publish chain: table in, native message out.
pub(crate) fn emit_publish(root: &TypeSpec) -> String {
    let mut w = SourceWriter::new();
    w.open_snippet();
    w.line(format!(
        "else if(publisherProxy->topicType == \"{}\")",
        root.full_name()
    ));
    w.open();
    w.line(format!("{} msg;", root.cxx_decl()));
    w.line(format!("if(!{}(p->stackID, &msg))", naming::reader_name(root)));
    w.open();
    w.line("simSetLastError(\"simExtROS_publish\", \"invalid message format (check stderr)\");");
    w.line("return;");
    w.close();
    w.line("publisherProxy->publisher.publish(msg);");
    w.close();
    w.finish()
}

/// Branch for the inbound-channel creation chain, routing deliveries
/// through the generated callback.
pub(crate) fn emit_subscribe(root: &TypeSpec) -> String {
    let mut w = SourceWriter::new();
    w.open_snippet();
    w.line(format!("else if(topicType == \"{}\")", root.full_name()));
    w.open();
    w.line(format!(
        "subscriberProxy->subscriber = nh->subscribe<{}>(topicName, queueSize, boost::bind({}, _1, subscriberProxy));",
        root.cxx_decl(),
        naming::callback_name(root)
    ));
    w.close();
    w.finish()
}
