//! Statement AST nodes.
//! 语句 AST 节点。

use crate::{Expr, Ident};
use clite_common::Span;
use serde::Serialize;

/// A statement.
/// 语句。
#[derive(Debug, Clone, Serialize)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Statement kind.
/// 语句类型。
#[derive(Debug, Clone, Serialize)]
pub enum StmtKind {
    /// Empty statement `;` / 空语句
    Skip,

    /// Compound statement `{ ... }` / 复合语句
    Block(Block),

    /// Assignment `x = expr;` / 赋值语句
    Assign { target: Ident, value: Expr },

    /// Conditional `if (cond) stmt [else stmt]` / 条件语句
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// Loop `while (cond) stmt` / 循环语句
    While { cond: Expr, body: Box<Stmt> },
}

/// An ordered sequence of statements.
/// 有序的语句序列。
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}
