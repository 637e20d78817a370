//! Syntax tree for Lox.
//!
//! [`ast`] is generated by `astgen` from `grammar/lox.ast`.

pub mod ast;
pub mod printer;
pub mod token;

pub use printer::AstPrinter;
