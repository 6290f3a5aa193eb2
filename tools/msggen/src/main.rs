use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use msg2stack::msg::DefinitionError;
use msg2stack::{Artifact, Generator, GeneratorError};

// Exit codes are part of the tool contract: the invoking build step tells
// usage mistakes (42) apart from definition syntax errors (3); everything
// else exits 1.
const EXIT_USAGE: i32 = 42;
const EXIT_SYNTAX: i32 = 3;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum Mode {
    Header,
    SerializerSource,
    DeserializerSource,
    AdvertiseSnippet,
    PublishSnippet,
    SubscribeSnippet,
}

impl From<Mode> for Artifact {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Header => Artifact::Header,
            Mode::SerializerSource => Artifact::SerializerSource,
            Mode::DeserializerSource => Artifact::DeserializerSource,
            Mode::AdvertiseSnippet => Artifact::AdvertiseSnippet,
            Mode::PublishSnippet => Artifact::PublishSnippet,
            Mode::SubscribeSnippet => Artifact::SubscribeSnippet,
        }
    }
}

#[derive(Parser)]
#[command(name = "msggen", about = "Emit stack-table glue code for one message type")]
struct Cli {
    /// Artifact to emit
    #[arg(value_enum)]
    mode: Mode,

    /// Path to the message definition file
    definition: PathBuf,

    /// Root type token, e.g. geometry_msgs/Point
    root_type: String,

    /// Path to the alias index (one package/name per line)
    index: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            std::process::exit(code);
        }
    };

    match run(&cli) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            if let Some(GeneratorError::Definition(DefinitionError::UnrecognizedLine {
                line, ..
            })) = err.downcast_ref::<GeneratorError>()
            {
                eprintln!("error: unrecognized line:");
                eprintln!("{line}");
                std::process::exit(EXIT_SYNTAX);
            }
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    tracing::debug!(index = %cli.index.display(), "loading alias index");
    let generator = Generator::load_index(&cli.index)?;

    tracing::debug!(
        aliases = generator.aliases().len(),
        root = %cli.root_type,
        "compiling definition"
    );
    let compiled = generator.compile_file(&cli.root_type, &cli.definition)?;

    Ok(compiled.emit(cli.mode.into()))
}
