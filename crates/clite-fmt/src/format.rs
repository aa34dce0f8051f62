//! AST formatter.
//! AST 格式化器。
//!
//! Renders AST nodes back to canonical CLite source.
//! 将 AST 节点渲染回规范的 CLite 源代码。

use crate::config::FormatConfig;
use crate::printer::Printer;
use clite_syntax::{Declaration, Expr, ExprKind, Program, Stmt, StmtKind};

/// Unary operators bind tighter than any binary operator.
/// 一元运算符比任何二元运算符绑定更紧。
const UNARY_PRECEDENCE: u8 = 7;

/// Code formatter.
/// 代码格式化器。
pub struct Formatter {
    /// Formatting configuration. / 格式化配置。
    config: FormatConfig,
}

impl Formatter {
    /// Create a new formatter.
    /// 创建新的格式化器。
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Format a program.
    /// 格式化程序。
    pub fn format(&self, program: &Program) -> String {
        let mut printer = Printer::new(self.config.clone());

        printer.writeln("int main() {");
        printer.indent();

        for declaration in &program.declarations {
            self.format_declaration(&mut printer, declaration);
        }
        for stmt in &program.body.stmts {
            self.format_stmt(&mut printer, stmt);
        }

        printer.dedent();
        printer.writeln("}");

        debug_assert_eq!(printer.current_indent(), 0, "unbalanced indentation");

        printer.finish()
    }

    /// Format a declaration, one identifier per line.
    /// 格式化声明，每行一个标识符。
    fn format_declaration(&self, p: &mut Printer, declaration: &Declaration) {
        p.write(declaration.ty.as_str());
        p.space();
        p.write(&declaration.name.name);
        p.writeln(";");
    }

    /// Format a statement.
    /// 格式化语句。
    fn format_stmt(&self, p: &mut Printer, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Skip => p.writeln(";"),
            StmtKind::Block(block) => {
                p.writeln("{");
                p.indent();
                for stmt in &block.stmts {
                    self.format_stmt(p, stmt);
                }
                p.dedent();
                p.writeln("}");
            }
            StmtKind::Assign { target, value } => {
                p.write(&target.name);
                p.write(" = ");
                self.format_expr(p, value);
                p.writeln(";");
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.format_if(p, cond, then_branch, else_branch.as_deref());
            }
            StmtKind::While { cond, body } => {
                p.write("while (");
                self.format_expr(p, cond);
                p.write(")");
                self.format_branch(p, body, false);
            }
        }
    }

    /// Format an `if` statement; `else if` chains stay on one line.
    /// 格式化 `if` 语句；`else if` 链保持在同一行。
    fn format_if(
        &self,
        p: &mut Printer,
        cond: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) {
        p.write("if (");
        self.format_expr(p, cond);
        p.write(")");
        self.format_branch(p, then_branch, else_branch.is_some());

        if let Some(else_stmt) = else_branch {
            p.write("else");
            match &else_stmt.kind {
                StmtKind::If {
                    cond,
                    then_branch,
                    else_branch,
                } => {
                    p.space();
                    self.format_if(p, cond, then_branch, else_branch.as_deref());
                }
                _ => self.format_branch(p, else_stmt, false),
            }
        }
    }

    /// Emit a statement as the body of `if`/`while`: blocks stay on the
    /// header line, anything else is indented on the next line.
    /// 输出 `if`/`while` 的语句体：块留在头部所在行，其余缩进到下一行。
    fn format_branch(&self, p: &mut Printer, stmt: &Stmt, has_trailing_else: bool) {
        match &stmt.kind {
            StmtKind::Block(block) => {
                p.writeln(" {");
                p.indent();
                for stmt in &block.stmts {
                    self.format_stmt(p, stmt);
                }
                p.dedent();
                if has_trailing_else {
                    p.write("} ");
                } else {
                    p.writeln("}");
                }
            }
            _ => {
                p.newline();
                p.indent();
                self.format_stmt(p, stmt);
                p.dedent();
            }
        }
    }

    /// Format an expression.
    /// 格式化表达式。
    fn format_expr(&self, p: &mut Printer, expr: &Expr) {
        self.format_expr_prec(p, expr, 0);
    }

    /// Format an expression, parenthesizing when its operator binds
    /// looser than `min_prec`.
    /// 格式化表达式，当运算符绑定强度低于 `min_prec` 时加括号。
    fn format_expr_prec(&self, p: &mut Printer, expr: &Expr, min_prec: u8) {
        match &expr.kind {
            ExprKind::Var(ident) => p.write(&ident.name),
            ExprKind::Literal(value) => p.write(&value.to_string()),
            ExprKind::Binary { op, left, right } => {
                let prec = op.precedence();
                let parens = prec < min_prec;
                if parens {
                    p.write("(");
                }
                // Comparisons are non-associative: a comparison child at
                // the same level must keep its parentheses to reparse.
                // 比较运算不可结合：同级的比较子表达式必须保留括号。
                let left_min = if op.is_comparison() { prec + 1 } else { prec };
                self.format_expr_prec(p, left, left_min);
                p.space();
                p.write(op.as_str());
                p.space();
                self.format_expr_prec(p, right, prec + 1);
                if parens {
                    p.write(")");
                }
            }
            ExprKind::Unary { op, operand } => {
                p.write(op.as_str());
                self.format_expr_prec(p, operand, UNARY_PRECEDENCE);
            }
            ExprKind::Cast { ty, expr } => {
                p.write(ty.as_str());
                p.write("(");
                self.format_expr(p, expr);
                p.write(")");
            }
        }
    }
}
