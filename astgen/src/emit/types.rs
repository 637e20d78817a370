//! Category enums, variant records and their constructors.

use std::fmt::Write as _;

use super::{JoinIter as _, ResolvedTy, emit_derives, ln};
use crate::config::GenConfig;
use crate::grammar::{Category, Field, TypeRef, Variant};
use crate::writer::CodeWriter;

pub fn emit_types(category: &Category, config: &GenConfig, out: &mut CodeWriter) {
    out.push(emit_category_enum(category, config));
    for variant in &category.variants {
        out.push(emit_record(variant, config));
        out.push(emit_constructor(variant, config));
        out.push(emit_from_impl(category, variant));
    }
}

fn emit_category_enum(category: &Category, config: &GenConfig) -> String {
    let mut out = emit_derives(config);
    ln!(out, "pub enum {} {{", category.name);
    for variant in &category.variants {
        ln!(out, "\t{0}({0}),", variant.name);
    }
    ln!(out, "}}");
    out
}

fn emit_record(variant: &Variant, config: &GenConfig) -> String {
    let mut out = emit_derives(config);
    if variant.fields.is_empty() {
        ln!(out, "pub struct {};", variant.name);
        return out;
    }

    ln!(out, "pub struct {} {{", variant.name);
    for field in &variant.fields {
        let ty = ResolvedTy::new(&field.ty, config.indirection);
        ln!(out, "\tpub {}: {ty},", field.ident());
    }
    ln!(out, "}}");
    out
}

/// `new` takes one argument per field, in declaration order.
///
/// Fields holding a node directly accept anything that converts into the
/// indirection, so both `Expr` and `Box<Expr>` can be passed.
fn emit_constructor(variant: &Variant, config: &GenConfig) -> String {
    let mut out = String::new();
    ln!(out, "impl {} {{", variant.name);

    if variant.fields.is_empty() {
        ln!(out, "\tpub fn new() -> Self {{");
        ln!(out, "\t\tSelf");
        ln!(out, "\t}}");
        ln!(out, "}}");
        return out;
    }

    let params = variant
        .fields
        .iter()
        .map(|field| {
            let ty = ResolvedTy::new(&field.ty, config.indirection);
            if is_direct_node(field) {
                format!("{}: impl Into<{ty}>", field.ident())
            } else {
                format!("{}: {ty}", field.ident())
            }
        })
        .collect::<Vec<_>>();

    ln!(out, "\tpub fn new({}) -> Self {{", params.iter().join(", "));
    ln!(out, "\t\tSelf {{");
    for field in &variant.fields {
        let ident = field.ident();
        if is_direct_node(field) {
            ln!(out, "\t\t\t{ident}: {ident}.into(),");
        } else {
            ln!(out, "\t\t\t{ident},");
        }
    }
    ln!(out, "\t\t}}");
    ln!(out, "\t}}");
    ln!(out, "}}");
    out
}

fn emit_from_impl(category: &Category, variant: &Variant) -> String {
    let mut out = String::new();
    ln!(out, "impl From<{}> for {} {{", variant.name, category.name);
    ln!(out, "\tfn from(node: {}) -> Self {{", variant.name);
    ln!(out, "\t\tSelf::{}(node)", variant.name);
    ln!(out, "\t}}");
    ln!(out, "}}");
    out
}

fn is_direct_node(field: &Field) -> bool {
    matches!(field.ty, TypeRef::Node(_))
}
