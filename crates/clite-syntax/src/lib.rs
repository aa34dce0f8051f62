//! AST and syntax definitions for CLite.
//!
//! This crate defines the abstract syntax tree built by the parser. The
//! tree is strictly hierarchical: every node owns its children, nothing is
//! shared or mutated after construction.

mod ast;
mod expr;
mod stmt;
mod types;

pub use ast::*;
pub use expr::*;
pub use stmt::*;
pub use types::*;
