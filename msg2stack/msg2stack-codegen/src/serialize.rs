//! Serializer emission: native record → stack table.
//!
//! The writer pushes one table, then one key/value pair per field in file
//! order. Array fields nest a second table keyed by 1-based integer index.
//! Element serialization recurses through `write__<normalized>`, which is
//! either another generated writer or a host primitive.

use msg2stack_core::{Field, MessageDefinition, TypeSpec};

use crate::naming;
use crate::source::SourceWriter;

pub(crate) fn emit(root: &TypeSpec, def: &MessageDefinition) -> String {
    let func = naming::writer_name(root);
    let decl = root.cxx_decl();
    let mut w = SourceWriter::new();

    w.line(naming::writer_signature(root));
    w.open();
    w.guard(
        "simPushTableOntoStack(stack) == -1",
        &func,
        "\"push table failed.\"",
    );

    for field in def.fields() {
        w.blank();
        if field.ty.is_array() {
            emit_array_field(&mut w, &func, &decl, field);
        } else {
            emit_scalar_field(&mut w, &func, &decl, field);
        }
    }

    w.blank();
    w.line("return true;");
    w.close();
    w.finish()
}

fn emit_scalar_field(w: &mut SourceWriter, func: &str, decl: &str, field: &Field) {
    let n = &field.name;
    let qualified = format!("{decl}::{n}");
    w.guard(
        &format!("simPushStringOntoStack(stack, \"{n}\", 0) == -1"),
        func,
        &format!("\"push table key (\" << \"{qualified}\" << \") failed.\""),
    );
    w.guard(
        &format!("!{}(msg.{n}, stack)", naming::writer_name(&field.ty)),
        func,
        &format!(
            "\"push table field \" << \"{qualified}\" << \" of type \" << \"{}\" << \" failed.\"",
            field.ty
        ),
    );
    w.guard(
        "simInsertDataIntoStackTable(stack) == -1",
        func,
        &format!("\"insert table pair \" << \"{qualified}\" << \" failed.\""),
    );
}

fn emit_array_field(w: &mut SourceWriter, func: &str, decl: &str, field: &Field) {
    let n = &field.name;
    let qualified = format!("{decl}::{n}");
    w.guard(
        &format!("simPushStringOntoStack(stack, \"{n}\", 0) == -1"),
        func,
        &format!("\"push table key (\" << \"{qualified}\" << \") failed.\""),
    );
    w.guard(
        "simPushTableOntoStack(stack) == -1",
        func,
        &format!("\"push array table (\" << \"{qualified}\" << \") failed.\""),
    );
    w.line(format!("for(int i = 0; i < msg.{n}.size(); i++)"));
    w.open();
    w.guard(
        "!write__int32(i + 1, stack)",
        func,
        &format!("\"push array table key \" << i << \" (\" << \"{qualified}\" << \") failed.\""),
    );
    w.guard(
        &format!("!{}(msg.{n}[i], stack)", naming::writer_name(&field.ty)),
        func,
        &format!("\"push array table value (\" << \"{qualified}\" << \") failed.\""),
    );
    w.guard(
        "simInsertDataIntoStackTable(stack) == -1",
        func,
        &format!("\"insert array table pair (\" << \"{qualified}\" << \") failed.\""),
    );
    w.close();
    w.guard(
        "simInsertDataIntoStackTable(stack) == -1",
        func,
        &format!("\"insert table pair (\" << \"{qualified}\" << \") failed.\""),
    );
}
