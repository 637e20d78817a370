//! Reader for `.ast` grammar files.
//!
//! ```text
//! // comment
//! use crate::token::Token;
//!
//! Expr Binary { left: Expr, operator: Token, right: Expr };
//! Expr Call { callee: Expr, arguments: [Expr] };
//! Stmt Var { name: Token, initializer: Expr? };
//! Stmt Break;
//! ```
//!
//! Declarations are separated by `;`. A category is created by the first
//! variant that mentions it.

use super::{External, GrammarSpec, TypeSpec, VariantSpec, is_ident};
use crate::error::{Error, Result};

pub fn parse(src: &str) -> Result<GrammarSpec> {
    let src = strip_single_line_comments(src);
    let mut spec = GrammarSpec::new();

    for decl in src.split(';') {
        let decl = decl.trim();
        if decl.is_empty() {
            continue;
        }

        parse_decl(&mut spec, decl)?;
    }

    Ok(spec)
}

fn strip_single_line_comments(src: &str) -> String {
    src.lines()
        .map(|line| match line.find("//") {
            Some(start) => &line[..start],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_decl(spec: &mut GrammarSpec, decl: &str) -> Result<()> {
    let Some((head, rest)) = decl.split_once(char::is_whitespace) else {
        return Err(Error::malformed(
            decl,
            "expected `use path::Type` or `Category Variant { field: Type, .. }`",
        ));
    };
    let rest = rest.trim_start();

    if head == "use" {
        spec.externals.push(External::parse(rest)?);
        return Ok(());
    }

    let category = head;
    if !is_ident(category) {
        return Err(Error::malformed(decl, format!("invalid category `{category}`")));
    }

    let name_end = rest.find('{').unwrap_or(rest.len());
    let name = rest[..name_end].trim();
    let rest = rest[name_end..].trim();
    if !is_ident(name) {
        return Err(Error::malformed(decl, format!("invalid variant name `{name}`")));
    }

    let mut variant = VariantSpec::new(name);

    if let Some(body) = rest.strip_prefix('{') {
        let Some(body) = body.strip_suffix('}') else {
            return Err(Error::malformed(decl, "expected `}` at the end of the field list"));
        };

        for field_desc in body.split(',') {
            let field_desc = field_desc.trim();
            if field_desc.is_empty() {
                continue;
            }

            let Some((field, ty)) = field_desc.split_once(':') else {
                return Err(Error::malformed(
                    decl,
                    format!("invalid field `{field_desc}`, expected `name: Type`"),
                ));
            };
            let field = field.trim();
            let ty: TypeSpec = ty.parse().map_err(|message| Error::malformed(decl, message))?;
            variant = variant.field(field, ty);
        }
    } else if !rest.is_empty() {
        return Err(Error::malformed(decl, format!("unexpected `{rest}`")));
    }

    spec.categories
        .entry(category.to_owned())
        .or_default()
        .push(variant);

    Ok(())
}
