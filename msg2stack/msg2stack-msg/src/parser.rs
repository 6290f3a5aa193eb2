//! Line-driven message definition parser.

use msg2stack_core::{AliasTable, MessageDefinition};

use crate::error::DefinitionError;
use crate::token::resolve_type;

/// Parse definition text into an ordered field list.
///
/// Per line: everything from the first `#` is dropped, surrounding
/// whitespace is trimmed, and empty results are skipped. Spaces are inserted
/// around `=` before tokenizing so that `int32 X=5` and `int32 X = 5` read
/// the same. Exactly four tokens with `=` third form a constant, which is
/// ignored without resolving its type; exactly two tokens form a field;
/// anything else is fatal and reports the comment-stripped line.
pub fn parse_definition(
    text: &str,
    aliases: &AliasTable,
) -> Result<MessageDefinition, DefinitionError> {
    let mut def = MessageDefinition::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;

        let line = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let spaced = line.replace('=', " = ");
        let tokens: Vec<&str> = spaced.split_whitespace().collect();

        match tokens.as_slice() {
            [_ty, _name, "=", _value] => {
                // constant definition: ignore
            }
            [ty, name] => {
                let spec = resolve_type(ty, aliases)
                    .map_err(|source| DefinitionError::BadFieldType { line_no, source })?;
                def.push_field(*name, spec);
            }
            _ => {
                return Err(DefinitionError::UnrecognizedLine {
                    line_no,
                    line: line.to_string(),
                });
            }
        }
    }

    Ok(def)
}
