use msg2stack::{Artifact, Generator, GeneratorError};
use msg2stack_core::AliasTable;
use msg2stack_msg::DefinitionError;

const INDEX: &str = "geometry_msgs/Point\nstd_msgs/Header\n";

fn generator() -> Generator {
    Generator::new(AliasTable::parse(INDEX).unwrap())
}

#[test]
fn full_pipeline_emits_every_artifact() {
    let generator = generator();
    let compiled = generator
        .compile(
            "nav_msgs/Path",
            "Header header\nPoint[] poses\nfloat64[9] covariance\nstring frame_id\n",
        )
        .unwrap();

    for artifact in [
        Artifact::Header,
        Artifact::SerializerSource,
        Artifact::DeserializerSource,
        Artifact::AdvertiseSnippet,
        Artifact::PublishSnippet,
        Artifact::SubscribeSnippet,
    ] {
        let out = compiled.emit(artifact);
        assert!(!out.is_empty(), "{artifact:?} emitted nothing");
    }

    assert_eq!(compiled.root().full_name(), "nav_msgs/Path");
    assert_eq!(compiled.definition().len(), 4);
}

#[test]
fn recursive_names_match_across_invocations() {
    // The serializer of a message with a compound field calls the function
    // a separate generator invocation on that field's type would define.
    let generator = generator();

    let outer = generator.compile("nav_msgs/Path", "Point[] poses\n").unwrap();
    let inner = generator
        .compile("Point", "float64 x\nfloat64 y\nfloat64 z\n")
        .unwrap();

    let outer_src = outer.emit(Artifact::SerializerSource);
    let inner_header = inner.emit(Artifact::Header);

    assert!(outer_src.contains("write__geometry_msgs__Point(msg.poses[i], stack)"));
    assert!(inner_header.contains("bool write__geometry_msgs__Point(const geometry_msgs::Point& msg, int stack);"));
    assert!(inner_header.contains("bool read__geometry_msgs__Point(int stack, geometry_msgs::Point *msg);"));
}

#[test]
fn emission_is_deterministic() {
    let generator = generator();
    let compiled = generator.compile("std_msgs/Header", "uint32 seq\nstring frame_id\n").unwrap();
    let a = compiled.emit(Artifact::DeserializerSource);
    let b = compiled.emit(Artifact::DeserializerSource);
    assert_eq!(a, b);
}

#[test]
fn compile_file_reads_the_definition() {
    let path = std::env::temp_dir().join("msg2stack_compile_file_test.msg");
    std::fs::write(&path, "int32 x # comment\nstring s\n").unwrap();

    let compiled = generator().compile_file("test_msgs/OnDisk", &path).unwrap();
    assert_eq!(compiled.definition().len(), 2);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_index_file_is_a_read_error() {
    let err = Generator::load_index("/nonexistent/msg2stack.index").unwrap_err();
    match err {
        GeneratorError::Read { path, .. } => {
            assert!(path.contains("msg2stack.index"));
        }
        other => panic!("expected Read, got {other:?}"),
    }
}

#[test]
fn malformed_index_entry_fails_at_load() {
    let err = AliasTable::parse("geometry_msgs/Point\nnot-an-entry\n").unwrap_err();
    assert!(err.to_string().contains("not-an-entry"));
}

#[test]
fn unresolvable_root_token_is_a_type_error() {
    let err = generator().compile("NoSuchMessage", "int32 x\n").unwrap_err();
    match err {
        GeneratorError::Type(source) => {
            assert_eq!(source.to_string(), "bad type: NoSuchMessage");
        }
        other => panic!("expected Type, got {other:?}"),
    }
}

#[test]
fn definition_syntax_error_surfaces_the_line() {
    let err = generator()
        .compile("test_msgs/Broken", "int32 x\nint32 a b\n")
        .unwrap_err();
    match err {
        GeneratorError::Definition(DefinitionError::UnrecognizedLine { line_no, line }) => {
            assert_eq!(line_no, 2);
            assert_eq!(line, "int32 a b");
        }
        other => panic!("expected UnrecognizedLine, got {other:?}"),
    }
}
