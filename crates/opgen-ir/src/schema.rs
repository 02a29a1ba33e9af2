//! Enum source parsing.
//!
//! The source format is line-oriented by contract: an opening delimiter line
//! containing `{`, one enumerator per interior line (optionally followed by a
//! trailing comma), and a closing delimiter line starting with `}`. The
//! delimiters are matched by pattern rather than by position, so blank lines
//! around the block can never shift which lines get treated as delimiters.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or parsing an enum source.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no opening delimiter: expected a line containing '{{'")]
    MissingOpenDelimiter,

    #[error("no closing delimiter: expected a final line starting with '}}'")]
    MissingCloseDelimiter,

    #[error("blank line {line} inside the enum block")]
    BlankLine { line: usize },
}

/// Policy for blank lines between the delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    /// Drop blank interior lines silently.
    #[default]
    Ignore,
    /// Treat a blank interior line as malformed source.
    Deny,
}

/// Parsing options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// How to treat blank lines inside the enum block.
    pub blank_lines: BlankLines,
}

/// A parsed enum block: the declared name plus its enumerators in declaration
/// order. Order is significant, it fixes the integer value of each entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSchema {
    /// Name of the enum type.
    pub name: String,
    /// Enumerator names, in declaration order.
    pub enumerators: Vec<String>,
}

/// Declaration keywords that may precede the enum name on the opening line.
const DECLARATION_KEYWORDS: &[&str] = &["export", "declare", "const", "enum"];

/// Extract the enum name from the opening delimiter line.
///
/// Takes the last identifier before the brace that is not a declaration
/// keyword. A bare `{` opener yields `Opcode`, the only name the generated
/// header has ever used.
fn enum_name(open_line: &str) -> String {
    let head = open_line.split('{').next().unwrap_or("");
    head.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .filter(|token| !DECLARATION_KEYWORDS.contains(token))
        .next_back()
        .unwrap_or("Opcode")
        .to_string()
}

/// Normalize one enumerator line: surrounding whitespace goes, and a single
/// trailing comma goes.
fn normalize(line: &str) -> &str {
    let line = line.trim();
    line.strip_suffix(',').unwrap_or(line).trim_end()
}

impl EnumSchema {
    /// Parse an enum block from source text.
    pub fn parse(source: &str, options: &ParseOptions) -> Result<Self, SchemaError> {
        let lines: Vec<&str> = source.lines().collect();

        let open = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .ok_or(SchemaError::MissingOpenDelimiter)?;
        if !lines[open].contains('{') {
            return Err(SchemaError::MissingOpenDelimiter);
        }

        let close = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .ok_or(SchemaError::MissingCloseDelimiter)?;
        if close == open || !lines[close].trim_start().starts_with('}') {
            return Err(SchemaError::MissingCloseDelimiter);
        }

        let mut enumerators = Vec::new();
        for (idx, line) in lines.iter().enumerate().take(close).skip(open + 1) {
            if line.trim().is_empty() {
                match options.blank_lines {
                    BlankLines::Ignore => continue,
                    BlankLines::Deny => {
                        return Err(SchemaError::BlankLine { line: idx + 1 });
                    }
                }
            }
            enumerators.push(normalize(line).to_string());
        }

        Ok(Self {
            name: enum_name(lines[open]),
            enumerators,
        })
    }

    /// Read and parse an enum source file.
    pub fn from_file<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents, options)
    }

    /// Number of enumerators.
    pub fn len(&self) -> usize {
        self.enumerators.len()
    }

    /// Returns true if the block declared no enumerators.
    pub fn is_empty(&self) -> bool {
        self.enumerators.is_empty()
    }

    /// Enumerator names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.enumerators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let source = "export enum Opcode {\n    ADD,\n    SUB,\n    JUMP\n}\n";
        let schema = EnumSchema::parse(source, &ParseOptions::default()).unwrap();

        assert_eq!(schema.name, "Opcode");
        assert_eq!(schema.names(), ["ADD", "SUB", "JUMP"]);
    }

    #[test]
    fn test_trailing_comma_stripped_once() {
        let source = "enum Opcode {\n    ADD,\n    SUB ,\n}\n";
        let schema = EnumSchema::parse(source, &ParseOptions::default()).unwrap();

        assert_eq!(schema.names(), ["ADD", "SUB"]);
    }

    #[test]
    fn test_enum_name_variants() {
        for (line, expected) in [
            ("export enum Opcode {", "Opcode"),
            ("export const enum Opcode {", "Opcode"),
            ("enum TokenKind {", "TokenKind"),
            ("{", "Opcode"),
        ] {
            let source = format!("{}\nADD\n}}\n", line);
            let schema = EnumSchema::parse(&source, &ParseOptions::default()).unwrap();
            assert_eq!(schema.name, expected, "opening line: {:?}", line);
        }
    }

    #[test]
    fn test_empty_block() {
        let source = "enum Opcode {\n}\n";
        let schema = EnumSchema::parse(source, &ParseOptions::default()).unwrap();

        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
    }

    #[test]
    fn test_blank_lines_around_block_never_shift_delimiters() {
        let source = "\n\nenum Opcode {\n    ADD,\n}\n\n";
        let schema = EnumSchema::parse(source, &ParseOptions::default()).unwrap();

        assert_eq!(schema.names(), ["ADD"]);
    }

    #[test]
    fn test_blank_interior_line_ignored_by_default() {
        let source = "enum Opcode {\n    ADD,\n\n    SUB,\n}\n";
        let schema = EnumSchema::parse(source, &ParseOptions::default()).unwrap();

        assert_eq!(schema.names(), ["ADD", "SUB"]);
    }

    #[test]
    fn test_blank_interior_line_denied() {
        let source = "enum Opcode {\n    ADD,\n\n    SUB,\n}\n";
        let options = ParseOptions {
            blank_lines: BlankLines::Deny,
        };
        let err = EnumSchema::parse(source, &options).unwrap_err();

        assert!(matches!(err, SchemaError::BlankLine { line: 3 }));
    }

    #[test]
    fn test_missing_open_delimiter() {
        let err = EnumSchema::parse("ADD\nSUB\n}\n", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingOpenDelimiter));

        let err = EnumSchema::parse("", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingOpenDelimiter));
    }

    #[test]
    fn test_missing_close_delimiter() {
        let err = EnumSchema::parse("enum Opcode {\nADD\n", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingCloseDelimiter));

        // A single line is never both delimiters.
        let err = EnumSchema::parse("enum Opcode {}\n", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, SchemaError::MissingCloseDelimiter));
    }

    #[test]
    fn test_from_file_missing() {
        let err = EnumSchema::from_file("no/such/Opcodes.ts", &ParseOptions::default())
            .unwrap_err();
        match err {
            SchemaError::Io { path, .. } => assert!(path.contains("Opcodes.ts")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
