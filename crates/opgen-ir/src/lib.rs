//! Opcode enum schema and C header generation.
//!
//! The compiler front end declares the VM's opcode list as a TypeScript-style
//! enum block:
//!
//! ```text
//! export enum Opcode {
//!     ADDI,
//!     SUBI,
//! }
//! ```
//!
//! This crate parses that block into an [`EnumSchema`], validates the
//! enumerator names, and regenerates the matching C declaration (plus an
//! optional value-to-name lookup function) consumed by the VM back end.
//! Declaration order is preserved end to end, since it fixes the integer
//! value of each enumerator on both sides.

pub mod codegen;
pub mod schema;
pub mod validation;

pub use codegen::{GenerateOptions, generate_header};
pub use schema::{BlankLines, EnumSchema, ParseOptions, SchemaError};
pub use validation::{ValidationError, validate};
