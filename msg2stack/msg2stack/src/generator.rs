//! Generator orchestration: alias index in, compiled messages out.

use std::{fs, path::Path};

use msg2stack_codegen::Artifact;
use msg2stack_core::{AliasTable, MessageDefinition, TypeSpec};
use msg2stack_msg::{parse_definition, resolve_type};

use crate::error::GeneratorError;

/// Owns the read-once alias table and drives the parse/resolve pipeline.
#[derive(Debug)]
pub struct Generator {
    aliases: AliasTable,
}

impl Generator {
    /// Build a generator around an already-parsed alias table.
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    /// Load the alias index from a newline-delimited `package/name` file.
    pub fn load_index(path: impl AsRef<Path>) -> Result<Self, GeneratorError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GeneratorError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(AliasTable::parse(&text)?))
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Resolve the root type token and parse definition text.
    pub fn compile(
        &self,
        root_token: &str,
        definition: &str,
    ) -> Result<CompiledMessage, GeneratorError> {
        let root = resolve_type(root_token, &self.aliases)?;
        let def = parse_definition(definition, &self.aliases)?;
        Ok(CompiledMessage { root, def })
    }

    /// Read a definition file and compile it.
    pub fn compile_file(
        &self,
        root_token: &str,
        path: impl AsRef<Path>,
    ) -> Result<CompiledMessage, GeneratorError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GeneratorError::Read {
            path: path.display().to_string(),
            source,
        })?;
        self.compile(root_token, &text)
    }
}

/// A resolved root type with its parsed field list, ready for emission.
///
/// Immutable once built; each artifact can be emitted any number of times
/// against the same compilation.
#[derive(Debug)]
pub struct CompiledMessage {
    root: TypeSpec,
    def: MessageDefinition,
}

impl CompiledMessage {
    pub fn root(&self) -> &TypeSpec {
        &self.root
    }

    pub fn definition(&self) -> &MessageDefinition {
        &self.def
    }

    /// Emit one artifact for this message.
    pub fn emit(&self, artifact: Artifact) -> String {
        artifact.generate(&self.root, &self.def)
    }
}
