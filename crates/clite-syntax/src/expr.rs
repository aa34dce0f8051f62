//! Expression AST nodes.
//! 表达式 AST 节点。

use crate::{Ident, Type};
use clite_common::Span;
use serde::Serialize;
use std::fmt;

/// An expression.
/// 表达式。
#[derive(Debug, Clone, Serialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Expression kind.
/// 表达式类型。
#[derive(Debug, Clone, Serialize)]
pub enum ExprKind {
    /// Variable reference / 变量引用
    Var(Ident),

    /// Literal value `42`, `3.5`, `'a'`, `true` / 字面量
    Literal(Value),

    /// Binary operation `a + b` / 二元运算
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary operation `!a` or `-a` / 一元运算
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Type cast `float(x)` / 类型转换
    Cast { ty: Type, expr: Box<Expr> },
}

/// A literal value, tagged by its primitive type.
/// 按基本类型标记的字面量值。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Float(f64),
    Char(char),
}

impl Value {
    /// The primitive type of this value.
    /// 此值的基本类型。
    pub fn ty(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Bool(_) => Type::Bool,
            Value::Float(_) => Type::Float,
            Value::Char(_) => Type::Char,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            // A fractionless float keeps its `.0` so the rendering re-lexes
            // as a float
            // 无小数部分的浮点数保留 `.0`，以便重新词法分析时仍是浮点数
            Value::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.1}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Char(c) => write!(f, "'{}'", c.escape_default()),
        }
    }
}

/// Binary operators.
/// 二元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinOp {
    // Arithmetic 算术运算
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Rem, // %

    // Comparison 比较运算
    Eq, // ==
    Ne, // !=
    Lt, // <
    Le, // <=
    Gt, // >
    Ge, // >=

    // Logical 逻辑运算
    And, // &&
    Or,  // ||
}

impl BinOp {
    /// The source spelling of this operator.
    /// 此运算符的源码拼写。
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }

    /// Binding strength, higher binds tighter. Mirrors the grammar's
    /// cascade: `|| < && < ==/!= < relational < +/- < */ /%`.
    /// 绑定强度，数值越大绑定越紧。
    pub fn precedence(&self) -> u8 {
        match self {
            BinOp::Or => 1,
            BinOp::And => 2,
            BinOp::Eq | BinOp::Ne => 3,
            BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge => 4,
            BinOp::Add | BinOp::Sub => 5,
            BinOp::Mul | BinOp::Div | BinOp::Rem => 6,
        }
    }

    /// Returns true for the non-associative comparison operators.
    /// 对非结合的比较运算符返回 true。
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge
        )
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary operators.
/// 一元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Neg, // - 取负
    Not, // ! 取反
}

impl UnaryOp {
    /// The source spelling of this operator.
    /// 此运算符的源码拼写。
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
