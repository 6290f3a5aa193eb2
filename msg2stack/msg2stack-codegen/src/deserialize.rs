//! Deserializer emission: stack table → native record.
//!
//! The reader requires a map-shaped table, unfolds it to flat key/value
//! pairs, and dispatches each key through a closed `strcmp` chain — an
//! unknown key is fatal, never skipped. Every `read__<t>` call, generated
//! or primitive, consumes the value it reads from the top of the stack, so
//! the loops below stay balanced without explicit pops beyond the key.
//!
//! Array values are themselves tables. Fixed-size arrays store each element
//! at its recovered numeric index (1-based on the wire); dynamic arrays
//! append in arrival order, which is traversal order, not index order.

use msg2stack_core::{Field, MessageDefinition, TypeSpec};

use crate::naming;
use crate::source::SourceWriter;

pub(crate) fn emit(root: &TypeSpec, def: &MessageDefinition) -> String {
    let func = naming::reader_name(root);
    let mut w = SourceWriter::new();

    w.line(naming::reader_signature(root));
    w.open();
    w.line("int info;");
    w.guard(
        "(info = simGetStackTableInfo(stack, 0)) != sim_stack_table_map",
        &func,
        "\"expected a table (simGetStackTableInfo returned \" << info << \").\"",
    );
    w.blank();
    w.line("int sz = simGetStackSize(stack);");
    w.line("simUnfoldStackTable(stack);");
    w.line("int numItems = (simGetStackSize(stack) - sz + 1) / 2;");
    w.blank();
    w.line("char *str;");
    w.line("int strSz;");
    w.blank();
    w.line("while(numItems >= 1)");
    w.open();
    w.line("simMoveStackItemToTop(stack, simGetStackSize(stack) - 2); // move key to top");
    w.line("if((str = simGetStackStringValue(stack, &strSz)) != NULL && strSz > 0)");
    w.open();
    w.line("simPopStackItem(stack, 1); // now stack top is value");
    w.blank();
    w.line("if(0) {}");

    for field in def.fields() {
        if field.ty.is_array() {
            emit_array_branch(&mut w, &func, field);
        } else {
            emit_scalar_branch(&mut w, &func, field);
        }
    }

    w.line("else");
    w.open();
    w.diagnostic(&func, "\"unexpected key: \" << str << \".\"");
    w.line("return false;");
    w.close();
    w.blank();
    w.line("simReleaseBuffer(str);");
    w.close();
    w.line("else");
    w.open();
    w.diagnostic(&func, "\"malformed table (bad key type).\"");
    w.line("return false;");
    w.close();
    w.blank();
    w.line("numItems = (simGetStackSize(stack) - sz + 1) / 2;");
    w.close();
    w.blank();
    w.line("return true;");
    w.close();
    w.finish()
}

fn emit_scalar_branch(w: &mut SourceWriter, func: &str, field: &Field) {
    let n = &field.name;
    w.line(format!("else if(strcmp(str, \"{n}\") == 0)"));
    w.open();
    w.guard(
        &format!("!{}(stack, &(msg->{n}))", naming::reader_name(&field.ty)),
        func,
        &format!(
            "\"value is not \" << \"{}\" << \" for key: \" << str << \".\"",
            field.ty
        ),
    );
    w.close();
}

fn emit_array_branch(w: &mut SourceWriter, func: &str, field: &Field) {
    let n = &field.name;
    w.line(format!("else if(strcmp(str, \"{n}\") == 0)"));
    w.open();
    w.line("int info1;");
    w.guard(
        "(info1 = simGetStackTableInfo(stack, 0)) < 0",
        func,
        "\"expected an array-table (simGetStackTableInfo returned \" << info1 << \").\"",
    );
    w.line("int sz1 = simGetStackSize(stack);");
    w.line("simUnfoldStackTable(stack);");
    w.line("int numItems1 = (simGetStackSize(stack) - sz1 + 1) / 2;");
    w.line("for(int k = 0; k < numItems1; k++)");
    w.open();
    w.line("simMoveStackItemToTop(stack, simGetStackSize(stack) - 2); // move key to top");
    w.line("int j;");
    w.guard(
        "!read__int32(stack, &j)",
        func,
        "\"array-table key is not int32 (\" << str << \").\"",
    );
    w.line(format!("{} v;", field.ty.cxx_decl()));
    w.guard(
        &format!("!{}(stack, &v)", naming::reader_name(&field.ty)),
        func,
        &format!(
            "\"value is not \" << \"{}\" << \" for key: \" << str << \".\"",
            field.ty
        ),
    );
    match field.ty.fixed_size() {
        Some(size) => {
            w.guard(
                &format!("j < 1 || j > {size}"),
                func,
                "\"array index \" << j << \" out of range (\" << str << \").\"",
            );
            w.line(format!("msg->{n}[j - 1] = v;"));
        }
        None => {
            w.line(format!("msg->{n}.push_back(v);"));
        }
    }
    w.close();
    w.close();
}
