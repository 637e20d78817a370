//! Generates syntax tree node types and visitors from a grammar description.
//!
//! ```text
//! grammar (.ast or GrammarSpec)
//!   -> GrammarModel::load   validate, resolve types
//!   -> emit                 types, visitor, acceptor per category
//!   -> CodeWriter           join fragments, expand tabs, write atomically
//! ```
//!
//! Generation is a pure function of the grammar and [`GenConfig`]:
//! the same inputs always produce the same bytes.

use std::path::Path;

pub mod config;
pub mod emit;
pub mod error;
pub mod grammar;
pub mod writer;

pub use config::{GenConfig, Indirection};
pub use error::{Error, Result};
pub use grammar::{GrammarModel, GrammarSpec, TypeSpec, VariantSpec};
pub use writer::CodeWriter;

/// Render a validated grammar into Rust source.
pub fn generate(model: &GrammarModel, config: &GenConfig) -> String {
    emit::emit(model, config).finish()
}

/// Parse, validate and render the contents of an `.ast` file.
pub fn generate_str(src: &str, config: &GenConfig) -> Result<String> {
    let spec = grammar::parse(src)?;
    let model = GrammarModel::load(spec)?;
    Ok(generate(&model, config))
}

pub fn load_file(path: &Path) -> Result<GrammarModel> {
    let src = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    GrammarModel::load(grammar::parse(&src)?)
}

/// Generate `output` from the grammar at `input`.
///
/// Nothing is written unless the whole grammar is valid.
pub fn generate_file(input: &Path, output: &Path, config: &GenConfig) -> Result<()> {
    let model = load_file(input)?;
    emit::emit(&model, config).write_to(output)
}
