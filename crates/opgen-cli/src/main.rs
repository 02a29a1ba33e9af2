//! opgen CLI entry point.

use clap::{Parser, Subcommand, ValueEnum};
use opgen_ir::{BlankLines, EnumSchema, GenerateOptions, ParseOptions, generate_header, validate};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "opgen")]
#[command(about = "Regenerates the VM opcode header from the compiler's enum source")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum BlankLinePolicy {
    /// Drop blank lines inside the enum block
    Ignore,
    /// Fail on blank lines inside the enum block
    Deny,
}

impl From<BlankLinePolicy> for BlankLines {
    fn from(policy: BlankLinePolicy) -> Self {
        match policy {
            BlankLinePolicy::Ignore => BlankLines::Ignore,
            BlankLinePolicy::Deny => BlankLines::Deny,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the C header from the enum source
    Generate {
        /// Enum source file
        #[arg(default_value = "src/Compilation/Opcodes.ts")]
        source: String,

        /// Header file to overwrite
        #[arg(default_value = "VM/opcodes.h")]
        out: String,

        /// Also emit the value-to-name lookup function
        #[arg(long)]
        lookup: bool,

        /// Blank lines inside the enum block
        #[arg(long, value_enum, default_value = "ignore")]
        blank_lines: BlankLinePolicy,
    },

    /// Parse and validate the enum source without writing anything
    Check {
        /// Enum source file
        #[arg(default_value = "src/Compilation/Opcodes.ts")]
        source: String,

        /// Blank lines inside the enum block
        #[arg(long, value_enum, default_value = "ignore")]
        blank_lines: BlankLinePolicy,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("opgen=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            source,
            out,
            lookup,
            blank_lines,
        } => {
            let schema = generate(&source, &out, lookup, blank_lines.into())?;
            info!("wrote {} enumerators to {}", schema.len(), out);
            println!("{} -> {}", source, out);
        }

        Commands::Check {
            source,
            blank_lines,
        } => {
            let schema = load(&source, blank_lines.into())?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
            println!("{}: {} enumerators, ok", source, schema.len());
        }
    }

    Ok(())
}

/// Parse and validate the source.
fn load(source: &str, blank_lines: BlankLines) -> Result<EnumSchema, Box<dyn std::error::Error>> {
    let schema = EnumSchema::from_file(source, &ParseOptions { blank_lines })?;
    validate(&schema)?;
    info!("parsed enum {} with {} enumerators", schema.name, schema.len());
    Ok(schema)
}

/// Full pipeline: parse, validate, emit, overwrite the destination.
fn generate(
    source: &str,
    out: &str,
    lookup: bool,
    blank_lines: BlankLines,
) -> Result<EnumSchema, Box<dyn std::error::Error>> {
    let schema = load(source, blank_lines)?;

    // Echo of the parsed list before writing, for operator inspection only.
    // Not part of the generated-file contract.
    println!("{}", serde_json::to_string(schema.names())?);

    let header = generate_header(&schema, &GenerateOptions { lookup })?;
    std::fs::write(out, &header)?;
    Ok(schema)
}
