//! Parser for CLite.
//!
//! This crate provides a recursive descent parser that converts the
//! lexer's token stream into an abstract syntax tree. The parser owns its
//! lexer, holds exactly one token of lookahead, and consumes every token
//! through a single `expect` choke point.
//!
//! ## Errors
//!
//! Parsing stops at the first error: every grammar method returns a
//! [`ParseResult`] and failures propagate with `?` to the caller, which
//! decides whether to render, retry, or exit.

mod error;
mod parser;

pub use error::{ParseResult, SyntaxError};
pub use parser::Parser;

use clite_lexer::{Lexer, TokenKind};
use clite_syntax::{Expr, Program};

/// Parse a complete CLite program.
pub fn parse(source: &str) -> ParseResult<Program> {
    let mut parser = Parser::new(Lexer::new(source))?;
    parser.program()
}

/// Parse a single expression spanning the whole input.
///
/// For tests and tools that want the expression grammar without the
/// `int main` scaffolding; trailing input is rejected.
pub fn parse_expression(source: &str) -> ParseResult<Expr> {
    let mut parser = Parser::new(Lexer::new(source))?;
    let expr = parser.expression()?;
    parser.expect(TokenKind::Eof)?;
    Ok(expr)
}
