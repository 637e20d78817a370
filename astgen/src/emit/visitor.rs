//! Double dispatch over a category.
//!
//! `{Category}Visitor` has one method per variant, and `{Category}Accept`
//! routes a category value to the method for the variant it holds:
//!
//! ```rust,ignore
//! pub trait ExprVisitor {
//!     type Result;
//!
//!     fn visit_literal(&mut self, node: &Literal) -> Self::Result;
//! }
//!
//! pub trait ExprAccept {
//!     fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Result;
//! }
//!
//! impl ExprAccept for Expr {
//!     fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Result {
//!         match self {
//!             Self::Literal(node) => visitor.visit_literal(node),
//!         }
//!     }
//! }
//! ```
//!
//! Visitor methods have no default bodies, so adding a variant breaks every
//! existing visitor until it handles the new variant.

use std::fmt::Write as _;

use super::ln;
use crate::grammar::Category;
use crate::writer::CodeWriter;

pub fn visitor_name(category: &Category) -> String {
    format!("{}Visitor", category.name)
}

pub fn acceptor_name(category: &Category) -> String {
    format!("{}Accept", category.name)
}

pub fn emit_visitor(category: &Category, out: &mut CodeWriter) {
    let mut s = String::new();
    ln!(s, "pub trait {} {{", visitor_name(category));
    ln!(s, "\ttype Result;");
    ln!(s);
    for variant in &category.variants {
        ln!(
            s,
            "\tfn {}(&mut self, node: &{}) -> Self::Result;",
            variant.visit_method(),
            variant.name
        );
    }
    ln!(s, "}}");
    out.push(s);
}

pub fn emit_acceptor(category: &Category, out: &mut CodeWriter) {
    let visitor = visitor_name(category);
    let acceptor = acceptor_name(category);
    let signature = format!("fn accept<V: {visitor}>(&self, visitor: &mut V) -> V::Result");

    let mut s = String::new();
    ln!(s, "pub trait {acceptor} {{");
    ln!(s, "\t{signature};");
    ln!(s, "}}");
    out.push(s);

    let mut s = String::new();
    ln!(s, "impl {acceptor} for {} {{", category.name);
    ln!(s, "\t{signature} {{");
    ln!(s, "\t\tmatch self {{");
    for variant in &category.variants {
        ln!(
            s,
            "\t\t\tSelf::{}(node) => visitor.{}(node),",
            variant.name,
            variant.visit_method()
        );
    }
    ln!(s, "\t\t}}");
    ln!(s, "\t}}");
    ln!(s, "}}");
    out.push(s);
}
