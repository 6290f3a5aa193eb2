//! Resolved type specifications and message definitions.
//!
//! A [`TypeSpec`] describes one occurrence of a type reference in a message
//! definition, after alias substitution and builtin classification. All
//! derived forms used by the code generator (full name, normalized function
//! suffix, C++ declaration) are computed here so nothing downstream has to
//! re-parse a token.

use std::fmt;

/// Builtin scalar kinds of the message definition language.
///
/// The C++ mapping is a wire contract: generated code pairs each kind with a
/// `write__<name>`/`read__<name>` primitive whose bit width must match the
/// host table's value tagging, which is why `bool` maps to `uint8_t` rather
/// than a native boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    String,
    Time,
    Duration,
}

impl Builtin {
    /// Look up a builtin by its definition-language name.
    ///
    /// Deprecated aliases (`byte`, `char`) are not handled here; the token
    /// resolver normalizes them before classification.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bool" => Self::Bool,
            "int8" => Self::Int8,
            "uint8" => Self::UInt8,
            "int16" => Self::Int16,
            "uint16" => Self::UInt16,
            "int32" => Self::Int32,
            "uint32" => Self::UInt32,
            "int64" => Self::Int64,
            "uint64" => Self::UInt64,
            "float32" => Self::Float32,
            "float64" => Self::Float64,
            "string" => Self::String,
            "time" => Self::Time,
            "duration" => Self::Duration,
            _ => return None,
        })
    }

    /// The definition-language name, which is also the normalized function
    /// suffix for builtin types.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Time => "time",
            Self::Duration => "duration",
        }
    }

    /// The C++ declaration used in generated signatures and element slots.
    pub fn cxx_decl(self) -> &'static str {
        match self {
            Self::Bool => "uint8_t",
            Self::Int8 => "int8_t",
            Self::UInt8 => "uint8_t",
            Self::Int16 => "int16_t",
            Self::UInt16 => "uint16_t",
            Self::Int32 => "int32_t",
            Self::UInt32 => "uint32_t",
            Self::Int64 => "int64_t",
            Self::UInt64 => "uint64_t",
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::String => "std::string",
            Self::Time => "ros::Time",
            Self::Duration => "ros::Duration",
        }
    }
}

/// Element type of a [`TypeSpec`]: a builtin scalar or a `package/Name`
/// compound reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Builtin(Builtin),
    Compound { package: String, name: String },
}

/// Array shape of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArraySize {
    /// `T[]` — dynamically sized, deserialized by appending.
    Dynamic,
    /// `T[n]` — declared element count, deserialized by index assignment.
    Fixed(usize),
}

/// One resolved occurrence of a type reference, e.g. `geometry_msgs/Point`,
/// `string[12]`, or `uint8[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: TypeName,
    /// `None` for scalars.
    pub array: Option<ArraySize>,
}

impl TypeSpec {
    /// Scalar builtin shorthand used in a few emitter-internal spots.
    pub fn builtin(b: Builtin) -> Self {
        Self {
            name: TypeName::Builtin(b),
            array: None,
        }
    }

    pub fn is_array(&self) -> bool {
        self.array.is_some()
    }

    /// Declared element count for fixed-size arrays.
    pub fn fixed_size(&self) -> Option<usize> {
        match self.array {
            Some(ArraySize::Fixed(n)) => Some(n),
            _ => None,
        }
    }

    /// `package/name` for compound types, the bare name for builtins.
    pub fn full_name(&self) -> String {
        match &self.name {
            TypeName::Builtin(b) => b.name().to_string(),
            TypeName::Compound { package, name } => format!("{package}/{name}"),
        }
    }

    /// Function-name suffix: `package__name` for compound types, the bare
    /// name for builtins. Generated functions for compound fields are looked
    /// up under this suffix, so it must match what this same generator
    /// produces when invoked on that type.
    pub fn normalized(&self) -> String {
        match &self.name {
            TypeName::Builtin(b) => b.name().to_string(),
            TypeName::Compound { package, name } => format!("{package}__{name}"),
        }
    }

    /// C++ declaration of the element type (arrays share the element decl;
    /// the container is chosen by the native message struct).
    pub fn cxx_decl(&self) -> String {
        match &self.name {
            TypeName::Builtin(b) => b.cxx_decl().to_string(),
            TypeName::Compound { package, name } => format!("{package}::{name}"),
        }
    }
}

impl fmt::Display for TypeSpec {
    /// Diagnostic form embedded in generated error messages: the full name,
    /// with a bare `[]` for arrays regardless of declared size.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())?;
        if self.is_array() {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

/// A named field of a message definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeSpec,
}

/// An ordered field list parsed from one definition file.
///
/// Constructed once per generator invocation and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDefinition {
    fields: Vec<Field>,
}

impl MessageDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, in file order. A repeated name overwrites the earlier
    /// field's type but keeps the earlier position (last write wins).
    pub fn push_field(&mut self, name: impl Into<String>, ty: TypeSpec) {
        let name = name.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.ty = ty,
            None => self.fields.push(Field { name, ty }),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
