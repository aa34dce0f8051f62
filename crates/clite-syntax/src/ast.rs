//! Top-level AST definitions.
//! 顶层 AST 定义。

use crate::{Block, Type};
use clite_common::Span;
use serde::Serialize;

/// A complete CLite program.
/// 完整的 CLite 程序。
///
/// `Program -> int main ( ) { Declarations Statements }`
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    /// Declared variables, in source order. / 按源码顺序声明的变量。
    pub declarations: Vec<Declaration>,
    /// The statements of the `main` body. / `main` 函数体的语句。
    pub body: Block,
    pub span: Span,
}

/// A single variable declaration.
/// 单个变量声明。
///
/// `int x, y;` produces one `Declaration` per identifier, each carrying the
/// type by value.
#[derive(Debug, Clone, Serialize)]
pub struct Declaration {
    pub name: Ident,
    pub ty: Type,
    pub span: Span,
}

/// An identifier.
/// 标识符。
///
/// Two identifiers are equal when their names are equal; spans do not
/// participate in comparison.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
