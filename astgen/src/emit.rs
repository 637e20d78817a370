//! Rendering of a [`GrammarModel`] into Rust source.
//!
//! Output order:
//! - header
//! - imports
//! - for each category:
//!   - category enum, variant records, constructors and `From` impls
//!   - visitor trait
//!   - acceptor trait and its impl for the category enum
//!
//! Fragments are indented with tabs, [`CodeWriter`] turns them into spaces.

use std::fmt::Display;

use crate::config::{GenConfig, Indirection};
use crate::grammar::{GrammarModel, TypeRef};
use crate::writer::CodeWriter;

pub mod types;
pub mod visitor;

#[cfg(test)]
mod tests;

pub const HEADER: &str = "// This file is @generated by astgen. Do not edit it by hand.";

macro_rules! ln {
    ($f:ident, $($tt:tt)*) => (writeln!($f, $($tt)*).unwrap());
    ($f:ident) => (writeln!($f).unwrap());
}

pub(crate) use ln;

pub fn emit(model: &GrammarModel, config: &GenConfig) -> CodeWriter {
    let mut out = CodeWriter::new();

    out.push(HEADER);
    out.push(emit_imports(model, config));

    for category in model.categories() {
        types::emit_types(category, config, &mut out);
        visitor::emit_visitor(category, &mut out);
        visitor::emit_acceptor(category, &mut out);
    }

    out
}

fn emit_imports(model: &GrammarModel, config: &GenConfig) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    if let Some(import) = config.indirection.import() {
        if uses_indirection(model) {
            ln!(out, "use {import};");
        }
    }
    for external in model.externals() {
        ln!(out, "use {};", external.path);
    }
    out
}

fn uses_indirection(model: &GrammarModel) -> bool {
    fn boxed(ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Node(_) => true,
            TypeRef::Optional(inner) => boxed(inner),
            TypeRef::External(_) | TypeRef::Sequence(_) => false,
        }
    }

    model
        .categories()
        .iter()
        .flat_map(|category| &category.variants)
        .flat_map(|variant| &variant.fields)
        .any(|field| boxed(&field.ty))
}

fn emit_derives(config: &GenConfig) -> String {
    if config.derives.is_empty() {
        String::new()
    } else {
        format!("#[derive({})]\n", config.derives.iter().join(", "))
    }
}

/// A field type as it appears in a record.
///
/// Node references are wrapped in the configured indirection,
/// unless they're held by a `Vec`.
pub(crate) struct ResolvedTy<'a> {
    ty: &'a TypeRef,
    indirection: Indirection,
    in_sequence: bool,
}

impl<'a> ResolvedTy<'a> {
    pub(crate) fn new(ty: &'a TypeRef, indirection: Indirection) -> Self {
        Self {
            ty,
            indirection,
            in_sequence: false,
        }
    }

    fn inner(&self, ty: &'a TypeRef, in_sequence: bool) -> Self {
        Self {
            ty,
            indirection: self.indirection,
            in_sequence,
        }
    }
}

impl Display for ResolvedTy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ty {
            TypeRef::External(name) => write!(f, "{name}"),
            TypeRef::Node(name) if self.in_sequence => write!(f, "{name}"),
            TypeRef::Node(name) => write!(f, "{}<{name}>", self.indirection),
            TypeRef::Optional(inner) => {
                write!(f, "Option<{}>", self.inner(inner, self.in_sequence))
            }
            TypeRef::Sequence(inner) => write!(f, "Vec<{}>", self.inner(inner, true)),
        }
    }
}

pub struct Join<Iter, Sep>
where
    Iter: Iterator,
{
    iter: Iter,
    sep: Sep,
}

impl<Iter, Sep> Display for Join<Iter, Sep>
where
    Iter: Iterator + Clone,
    <Iter as Iterator>::Item: Display,
    Sep: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter.clone().peekable();
        while let Some(item) = iter.next() {
            write!(f, "{item}")?;
            if iter.peek().is_some() {
                write!(f, "{}", self.sep)?;
            }
        }
        Ok(())
    }
}

pub trait JoinIter: Sized + Iterator {
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep>;
}

impl<Iter> JoinIter for Iter
where
    Iter: Sized + Iterator + Clone,
{
    fn join<Sep>(self, sep: Sep) -> Join<Self, Sep> {
        Join { iter: self, sep }
    }
}
