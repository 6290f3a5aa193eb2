use msg2stack_core::{AliasTable, ArraySize, Builtin, TypeName, TypeSpec};
use msg2stack_msg::{DefinitionError, parse_definition};

fn empty() -> AliasTable {
    AliasTable::new()
}

#[test]
fn parse_basic_fields_in_order() {
    let text = r#"
int32 x
float64 y
string name
"#;
    let def = parse_definition(text, &empty()).unwrap();
    assert_eq!(def.len(), 3);
    let names: Vec<&str> = def.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["x", "y", "name"]);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let text = "# leading comment\n\nint32 x # trailing comment\n   \n# int32 ghost\n";
    let def = parse_definition(text, &empty()).unwrap();
    assert_eq!(def.len(), 1);
    assert_eq!(def.fields()[0].name, "x");
}

#[test]
fn constants_are_ignored() {
    let def = parse_definition("int32 count = 5", &empty()).unwrap();
    assert!(def.is_empty());

    // `=` without surrounding spaces tokenizes the same way.
    let def = parse_definition("int32 count=5", &empty()).unwrap();
    assert!(def.is_empty());
}

#[test]
fn constant_types_are_never_resolved() {
    // The constant path skips type resolution entirely, so an unresolvable
    // type token in a constant line is not an error.
    let def = parse_definition("no_such_type X = 1", &empty()).unwrap();
    assert!(def.is_empty());
}

#[test]
fn three_tokens_are_a_syntax_error() {
    let err = parse_definition("int32 a b", &empty()).unwrap_err();
    match err {
        DefinitionError::UnrecognizedLine { line_no, line } => {
            assert_eq!(line_no, 1);
            assert_eq!(line, "int32 a b");
        }
        other => panic!("expected UnrecognizedLine, got {other:?}"),
    }
}

#[test]
fn syntax_error_reports_comment_stripped_text() {
    let err = parse_definition("int32 x\none two three four # note\n", &empty()).unwrap_err();
    match err {
        DefinitionError::UnrecognizedLine { line_no, line } => {
            assert_eq!(line_no, 2);
            assert_eq!(line, "one two three four");
        }
        other => panic!("expected UnrecognizedLine, got {other:?}"),
    }
}

#[test]
fn string_constant_with_spaces_is_rejected() {
    // Five tokens after `=` spacing; the definition language has no quoted
    // values, so this stays fatal.
    let err = parse_definition("string GREETING = hello world", &empty()).unwrap_err();
    assert!(matches!(err, DefinitionError::UnrecognizedLine { .. }));
}

#[test]
fn bad_field_type_carries_line_number() {
    let err = parse_definition("int32 x\nnot_a_type y\n", &empty()).unwrap_err();
    match err {
        DefinitionError::BadFieldType { line_no, source } => {
            assert_eq!(line_no, 2);
            assert_eq!(source.to_string(), "bad type: not_a_type");
        }
        other => panic!("expected BadFieldType, got {other:?}"),
    }
}

#[test]
fn duplicate_field_last_type_wins() {
    let def = parse_definition("int32 a\nstring b\nfloat64 a\n", &empty()).unwrap();
    assert_eq!(def.len(), 2);
    assert_eq!(def.fields()[0].name, "a");
    assert_eq!(def.fields()[0].ty, TypeSpec::builtin(Builtin::Float64));
}

#[test]
fn alias_resolution_inside_definition() {
    let aliases = AliasTable::parse("geometry_msgs/Point\nstd_msgs/Header").unwrap();
    let def = parse_definition("Header header\nPoint[] points\n", &aliases).unwrap();

    assert_eq!(def.fields()[0].ty.full_name(), "std_msgs/Header");
    let points = &def.fields()[1].ty;
    assert_eq!(points.full_name(), "geometry_msgs/Point");
    assert_eq!(points.array, Some(ArraySize::Dynamic));
}

#[test]
fn mixed_field_shapes() {
    let text = "bool flag\nuint8[16] digest\nfloat64[] samples\ngeometry_msgs/Point origin\n";
    let def = parse_definition(text, &empty()).unwrap();

    assert_eq!(def.fields()[0].ty, TypeSpec::builtin(Builtin::Bool));
    assert_eq!(def.fields()[1].ty.fixed_size(), Some(16));
    assert_eq!(def.fields()[2].ty.array, Some(ArraySize::Dynamic));
    assert!(matches!(
        def.fields()[3].ty.name,
        TypeName::Compound { .. }
    ));
}

#[test]
fn crlf_definitions_parse() {
    let def = parse_definition("int32 x\r\nstring s\r\n", &empty()).unwrap();
    assert_eq!(def.len(), 2);
}
