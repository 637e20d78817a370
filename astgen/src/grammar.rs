//! Grammar description and its validated model.
//!
//! A [`GrammarSpec`] is the raw description: external types plus an ordered
//! mapping from category name to variants. It is produced either by the
//! builder methods below or by [`parse`]ing an `.ast` file.
//!
//! [`GrammarModel::load`] turns a [`GrammarSpec`] into a [`GrammarModel`], which is what
//! the emitters consume. Loading checks that:
//! - variant names are unique within their category,
//! - field names are unique within their variant,
//! - every field type resolves to a primitive, an external type,
//!   a category, or a variant,
//! - no name is shared between categories, variants, external types and the
//!   generated `{Category}Visitor` / `{Category}Accept` traits,
//! - no declared name shadows a primitive or a name the generated code uses.
//!
//! References to categories and variants are resolved to [`TypeRef::Node`],
//! which the emitters always place behind an indirection unless the reference
//! is already inside a sequence.

use indexmap::{IndexMap, IndexSet};
use std::str::FromStr;

use crate::error::{Error, Result};

mod parse;

pub use parse::parse;


/// Names which are always known, without being declared.
pub const PRIMITIVES: &[&str] = &[
    "bool", "char", "String", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16",
    "u32", "u64", "u128", "usize", "f32", "f64",
];

/// Names the generated code refers to. Declaring any of them would shadow it.
const RESERVED: &[&str] = &["Box", "Rc", "Arc", "Option", "Vec", "From", "Into"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrammarSpec {
    pub externals: Vec<External>,
    pub categories: IndexMap<String, Vec<VariantSpec>>,
}

impl GrammarSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare external types through a `use` path, e.g. `crate::token::Token`
    /// or `crate::token::{Token, Span}`.
    pub fn external(mut self, path: &str) -> Result<Self> {
        self.externals.push(External::parse(path)?);
        Ok(self)
    }

    /// Append variants to a category, creating it if it doesn't exist yet.
    pub fn category(
        mut self,
        name: impl Into<String>,
        variants: impl IntoIterator<Item = VariantSpec>,
    ) -> Self {
        self.categories
            .entry(name.into())
            .or_default()
            .extend(variants);
        self
    }
}

/// A `use` declaration, and the type names it brings into scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct External {
    pub path: String,
    pub names: Vec<String>,
}

impl External {
    pub fn parse(path: &str) -> Result<Self> {
        let malformed = |message: &str| Error::malformed(format!("use {}", path.trim()), message);

        let (prefix, items) = match path.find('{') {
            Some(open) => {
                let Some(inner) = path[open + 1..].trim_end().strip_suffix('}') else {
                    return Err(malformed("missing closing `}`"));
                };
                let Some(prefix) = path[..open].trim_end().strip_suffix("::") else {
                    return Err(malformed("expected `::` before `{`"));
                };
                let items = inner
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .collect::<Vec<_>>();
                if items.is_empty() {
                    return Err(malformed("empty import list"));
                }
                (Some(prefix), items)
            }
            None => (None, vec![path.trim()]),
        };

        let mut segments = Vec::new();
        if let Some(prefix) = prefix {
            for segment in prefix.split("::") {
                let segment = segment.trim();
                if !is_ident(segment) {
                    return Err(malformed("invalid path"));
                }
                segments.push(segment);
            }
        }

        let mut names = Vec::new();
        let mut rendered_items = Vec::new();
        for item in items {
            let (item_path, alias) = match item.split_once(" as ") {
                Some((item_path, alias)) => (item_path.trim(), Some(alias.trim())),
                None => (item, None),
            };
            let item_segments = item_path.split("::").map(str::trim).collect::<Vec<_>>();
            if item_segments.iter().any(|segment| !is_ident(segment)) {
                return Err(malformed("invalid path"));
            }
            if prefix.is_none() && item_segments.len() < 2 {
                return Err(malformed("expected a path like `module::Type`"));
            }
            let item_path = item_segments.join("::");
            let name = alias.unwrap_or(item_segments[item_segments.len() - 1]);
            match alias {
                Some(alias) => rendered_items.push(format!("{item_path} as {alias}")),
                None => rendered_items.push(item_path),
            }
            names.push(name.to_owned());
        }

        let path = match prefix {
            Some(_) => format!("{}::{{{}}}", segments.join("::"), rendered_items.join(", ")),
            None => rendered_items.remove(0),
        };

        Ok(External { path, names })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl VariantSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: TypeSpec) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            ty,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeSpec,
}

/// An unresolved type: `Name`, `Type?` or `[Type]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    Named(String),
    Optional(Box<TypeSpec>),
    Sequence(Box<TypeSpec>),
}

impl TypeSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn optional(inner: TypeSpec) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn sequence(inner: TypeSpec) -> Self {
        Self::Sequence(Box::new(inner))
    }
}

impl FromStr for TypeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s.strip_suffix('?') {
            let inner: TypeSpec = inner.parse()?;
            if matches!(inner, TypeSpec::Optional(_)) {
                return Err(format!("type `{s}` is optional more than once"));
            }
            return Ok(TypeSpec::optional(inner));
        }
        if let Some(inner) = s.strip_prefix('[') {
            let Some(inner) = inner.strip_suffix(']') else {
                return Err(format!("type `{s}` is missing a closing `]`"));
            };
            return Ok(TypeSpec::sequence(inner.parse()?));
        }
        if !is_ident(s) {
            return Err(format!(
                "invalid type `{s}`, expected `Name`, `Type?` or `[Type]`"
            ));
        }
        Ok(TypeSpec::named(s))
    }
}

/// A validated grammar. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct GrammarModel {
    externals: Vec<External>,
    categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Variant {
    /// Name of the visitor operation for this variant, e.g. `visit_ifstmt`.
    pub fn visit_method(&self) -> String {
        format!("visit_{}", self.name.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
}

impl Field {
    /// The field name as a Rust identifier, using a raw identifier for keywords.
    pub fn ident(&self) -> String {
        if is_keyword(&self.name) {
            format!("r#{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// A resolved field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive or a declared external type.
    External(String),
    /// A category or a variant record.
    Node(String),
    Optional(Box<TypeRef>),
    Sequence(Box<TypeRef>),
}

#[derive(Clone, Copy)]
enum Declared {
    External,
    Node,
    /// Visitor and acceptor traits; not usable as a field type.
    Generated,
}

impl GrammarModel {
    pub fn load(spec: GrammarSpec) -> Result<Self> {
        let GrammarSpec {
            externals,
            categories,
        } = spec;

        let mut declared: IndexMap<String, Declared> = IndexMap::new();
        let mut declare = |name: &str, kind: Declared| -> Result<()> {
            if RESERVED.contains(&name) || PRIMITIVES.contains(&name) {
                return Err(Error::malformed(
                    name,
                    format!("`{name}` is reserved by the generated code"),
                ));
            }
            if declared.insert(name.to_owned(), kind).is_some() {
                return Err(Error::DuplicateTypeName {
                    name: name.to_owned(),
                });
            }
            Ok(())
        };

        for external in &externals {
            for name in &external.names {
                if !is_type_name(name) {
                    return Err(Error::malformed(
                        format!("use {}", external.path),
                        format!("`{name}` is not a valid type name"),
                    ));
                }
                declare(name, Declared::External)?;
            }
        }

        // names first, so that fields may refer to anything declared later
        for (category, variants) in &categories {
            if !is_type_name(category) {
                return Err(Error::malformed(
                    category.as_str(),
                    format!("`{category}` is not a valid category name"),
                ));
            }
            if variants.is_empty() {
                return Err(Error::malformed(
                    category.as_str(),
                    format!("category `{category}` has no variants"),
                ));
            }
            declare(category, Declared::Node)?;
            declare(&format!("{category}Visitor"), Declared::Generated)?;
            declare(&format!("{category}Accept"), Declared::Generated)?;

            let mut names = IndexSet::new();
            let mut methods = IndexSet::new();
            for variant in variants {
                if !is_type_name(&variant.name) {
                    return Err(Error::malformed(
                        format!("{category} {}", variant.name),
                        format!("`{}` is not a valid variant name", variant.name),
                    ));
                }
                let method = variant.name.to_lowercase();
                if !names.insert(variant.name.as_str()) || !methods.insert(method) {
                    return Err(Error::DuplicateVariantName {
                        category: category.clone(),
                        variant: variant.name.clone(),
                    });
                }
            }
        }

        for variants in categories.values() {
            for variant in variants {
                declare(&variant.name, Declared::Node)?;
            }
        }

        let mut resolved = Vec::with_capacity(categories.len());
        for (category, variants) in categories {
            let mut out = Vec::with_capacity(variants.len());
            for variant in variants {
                let mut names = IndexSet::new();
                let mut fields = Vec::with_capacity(variant.fields.len());
                for field in variant.fields {
                    let at = format!("{category}::{}::{}", variant.name, field.name);
                    if !is_ident(&field.name) || is_unraw_keyword(&field.name) {
                        return Err(Error::malformed(
                            at,
                            format!("`{}` is not a valid field name", field.name),
                        ));
                    }
                    if !names.insert(field.name.clone()) {
                        return Err(Error::DuplicateFieldName {
                            category: category.clone(),
                            variant: variant.name.clone(),
                            field: field.name,
                        });
                    }
                    let ty = match resolve(&field.ty, &declared) {
                        Ok(ty) => ty,
                        Err(Unresolved::Name(name)) => {
                            return Err(Error::UnresolvedTypeReference {
                                category: category.clone(),
                                variant: variant.name.clone(),
                                field: field.name,
                                name,
                            });
                        }
                        Err(Unresolved::NestedOptional) => {
                            return Err(Error::malformed(at, "type is optional more than once"));
                        }
                    };
                    fields.push(Field {
                        name: field.name,
                        ty,
                    });
                }
                out.push(Variant {
                    name: variant.name,
                    fields,
                });
            }
            resolved.push(Category {
                name: category,
                variants: out,
            });
        }

        Ok(GrammarModel {
            externals,
            categories: resolved,
        })
    }

    /// Categories in declaration order, each with its variants in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn externals(&self) -> &[External] {
        &self.externals
    }
}

enum Unresolved {
    Name(String),
    NestedOptional,
}

fn resolve(ty: &TypeSpec, declared: &IndexMap<String, Declared>) -> Result<TypeRef, Unresolved> {
    let ty = match ty {
        TypeSpec::Named(name) => match declared.get(name) {
            Some(Declared::Node) => TypeRef::Node(name.clone()),
            Some(Declared::External) => TypeRef::External(name.clone()),
            Some(Declared::Generated) => return Err(Unresolved::Name(name.clone())),
            None if PRIMITIVES.contains(&name.as_str()) => TypeRef::External(name.clone()),
            None => return Err(Unresolved::Name(name.clone())),
        },
        TypeSpec::Optional(inner) => {
            if matches!(**inner, TypeSpec::Optional(_)) {
                return Err(Unresolved::NestedOptional);
            }
            TypeRef::Optional(Box::new(resolve(inner, declared)?))
        }
        TypeSpec::Sequence(inner) => TypeRef::Sequence(Box::new(resolve(inner, declared)?)),
    };
    Ok(ty)
}

pub(crate) fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_type_name(s: &str) -> bool {
    is_ident(s) && !is_keyword(s)
}

/// Keywords which may not be used even as raw identifiers.
fn is_unraw_keyword(s: &str) -> bool {
    matches!(s, "self" | "Self" | "super" | "crate")
}

pub(crate) fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "as" | "async"
            | "await"
            | "break"
            | "const"
            | "continue"
            | "crate"
            | "dyn"
            | "else"
            | "enum"
            | "extern"
            | "false"
            | "fn"
            | "for"
            | "gen"
            | "if"
            | "impl"
            | "in"
            | "let"
            | "loop"
            | "match"
            | "mod"
            | "move"
            | "mut"
            | "pub"
            | "ref"
            | "return"
            | "self"
            | "Self"
            | "static"
            | "struct"
            | "super"
            | "trait"
            | "true"
            | "try"
            | "type"
            | "unsafe"
            | "use"
            | "where"
            | "while"
            | "abstract"
            | "become"
            | "box"
            | "do"
            | "final"
            | "macro"
            | "override"
            | "priv"
            | "typeof"
            | "unsized"
            | "virtual"
            | "yield"
    )
}
