//! C header generation from a parsed enum schema.
//!
//! Output is deterministic: the same schema always produces byte-identical
//! text, so regenerating an unchanged source rewrites an identical header.

use crate::schema::EnumSchema;
use std::fmt::Write as FmtWrite;

/// Code generation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Also emit the value-to-name lookup function.
    pub lookup: bool,
}

/// Generate the C header text for a schema.
pub fn generate_header(
    schema: &EnumSchema,
    options: &GenerateOptions,
) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(&mut output, "enum {} {{", schema.name)?;
    for name in schema.names() {
        writeln!(&mut output, "    {},", name)?;
    }
    writeln!(&mut output, "}};")?;

    if options.lookup {
        writeln!(&mut output)?;
        generate_lookup_function(&mut output, schema)?;
    }

    Ok(output)
}

/// Emit the exhaustive value-to-name switch.
///
/// The trailing `return "UNKNOWN";` sits after the switch so every path
/// returns even for values matching no case.
fn generate_lookup_function(
    output: &mut String,
    schema: &EnumSchema,
) -> Result<(), std::fmt::Error> {
    let value = lower_first(&schema.name);

    writeln!(
        output,
        "char* {}ToString(enum {} {}) {{",
        value, schema.name, value
    )?;
    writeln!(output, "    switch ({}) {{", value)?;
    for name in schema.names() {
        writeln!(output, "        case {}:", name)?;
        writeln!(output, "            return \"{}\";", name)?;
    }
    writeln!(output, "    }}")?;
    writeln!(output, "    return \"UNKNOWN\";")?;
    writeln!(output, "}}")?;

    Ok(())
}

/// Lowercase the first character: `Opcode` -> `opcode`, `TokenKind` -> `tokenKind`.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
