//! Single type-token resolution.
//!
//! Resolution order matters and mirrors the definition language:
//! the array suffix is stripped first, then the alias index is consulted on
//! the element name, then the deprecated scalar aliases are applied, and
//! only then is the name classified as builtin or compound. An alias-index
//! entry therefore shadows a deprecated alias of the same name.

use msg2stack_core::{AliasTable, ArraySize, Builtin, TypeName, TypeSpec};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char},
    combinator::{all_consuming, recognize},
    multi::many0,
    sequence::{pair, separated_pair},
};

use crate::error::TypeError;

/// Resolve a type token such as `Header`, `geometry_msgs/Point`, or
/// `string[12]` into a [`TypeSpec`].
pub fn resolve_type(token: &str, aliases: &AliasTable) -> Result<TypeSpec, TypeError> {
    let (base, array) = split_array_suffix(token);

    if let Some((package, name)) = aliases.lookup(base) {
        return Ok(TypeSpec {
            name: TypeName::Compound {
                package: package.to_string(),
                name: name.to_string(),
            },
            array,
        });
    }

    let base = match base {
        "byte" => "int8",
        "char" => "uint8",
        other => other,
    };

    if let Some(builtin) = Builtin::from_name(base) {
        return Ok(TypeSpec {
            name: TypeName::Builtin(builtin),
            array,
        });
    }

    match compound(base) {
        Ok((_, (package, name))) => Ok(TypeSpec {
            name: TypeName::Compound {
                package: package.to_string(),
                name: name.to_string(),
            },
            array,
        }),
        Err(_) => Err(TypeError::Malformed {
            token: token.to_string(),
        }),
    }
}

/// Strip one trailing `[...]` group whose bracket content is all digits
/// (possibly empty). Anything else — letters inside the brackets, a second
/// trailing group's remainder — is left on the name and fails classification
/// later.
fn split_array_suffix(token: &str) -> (&str, Option<ArraySize>) {
    let Some(body) = token.strip_suffix(']') else {
        return (token, None);
    };
    let Some(open) = body.rfind('[') else {
        return (token, None);
    };
    let digits = &body[open + 1..];
    if digits.is_empty() {
        return (&body[..open], Some(ArraySize::Dynamic));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return (token, None);
    }
    match digits.parse::<usize>() {
        Ok(n) => (&body[..open], Some(ArraySize::Fixed(n))),
        Err(_) => (token, None),
    }
}

/// Parse an identifier (alphanumeric + underscore, must start with alpha or _)
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

/// Parse a fully-qualified compound name: exactly `identifier/identifier`.
fn compound(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(identifier, char('/'), identifier))(input)
}
