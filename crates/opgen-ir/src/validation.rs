//! Enumerator validation.
//!
//! The parser does not care what the interior lines contain; this pass does.
//! Only syntactically valid, non-keyword, unique C identifiers may reach the
//! generated header, so a malformed source fails the run with the offending
//! entry named instead of propagating broken text into the artifact.

use crate::EnumSchema;
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur during validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("enumerator {position} ({name:?}) is not a valid C identifier")]
    InvalidIdentifier { position: usize, name: String },

    #[error("enumerator {position} ({name:?}) is a C keyword")]
    Keyword { position: usize, name: String },

    #[error("enumerator {position} ({name:?}) duplicates an earlier entry")]
    Duplicate { position: usize, name: String },
}

/// C reserved keywords that cannot name an enumerator.
fn c_keywords() -> HashSet<&'static str> {
    [
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a schema before code generation.
///
/// Positions in errors are 1-based declaration positions.
pub fn validate(schema: &EnumSchema) -> Result<(), ValidationError> {
    let keywords = c_keywords();
    let mut seen = HashSet::new();

    for (idx, name) in schema.names().iter().enumerate() {
        let position = idx + 1;

        if !is_identifier(name) {
            return Err(ValidationError::InvalidIdentifier {
                position,
                name: name.clone(),
            });
        }
        if keywords.contains(name.as_str()) {
            return Err(ValidationError::Keyword {
                position,
                name: name.clone(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::Duplicate {
                position,
                name: name.clone(),
            });
        }
    }

    Ok(())
}
