//! Errors that abort a generation run.

use std::path::PathBuf;

/// Any failure while loading a grammar or writing the generated output.
///
/// Every variant is fatal: generation never produces partial output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two variants of one category share a name, or canonicalize to the
    /// same visitor operation.
    #[error("duplicate variant `{variant}` in category `{category}`")]
    DuplicateVariantName { category: String, variant: String },

    /// Two fields of one variant share a name.
    #[error("duplicate field `{field}` in `{category}::{variant}`")]
    DuplicateFieldName {
        category: String,
        variant: String,
        field: String,
    },

    /// A field refers to a type that is neither a primitive, an external
    /// type, a category nor a variant.
    #[error("unresolved type `{name}` in field `{category}::{variant}::{field}`")]
    UnresolvedTypeReference {
        category: String,
        variant: String,
        field: String,
        name: String,
    },

    /// A name is used by more than one category, variant or external type.
    #[error("type name `{name}` is declared more than once")]
    DuplicateTypeName { name: String },

    #[error("malformed declaration: {message}\n  {declaration}")]
    MalformedVariantDeclaration {
        declaration: String,
        message: String,
    },

    #[error("cannot access `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(declaration: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedVariantDeclaration {
            declaration: declaration.into(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
