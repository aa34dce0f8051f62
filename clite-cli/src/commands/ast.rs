//! The `clite ast` command.
//! `clite ast` 命令。
//!
//! Prints the abstract syntax tree of a program, either as an indented
//! pre-order dump or as JSON.
//! 以缩进的前序遍历形式或 JSON 形式打印程序的抽象语法树。

use clite_diagnostic::emit;
use clite_syntax::{Expr, ExprKind, Program, Stmt, StmtKind};
use std::fs;

/// Parse a CLite file and print its syntax tree.
/// 解析 CLite 文件并打印其语法树。
pub fn run(file: &str, json: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    let program = match clite_parser::parse(&source) {
        Ok(program) => program,
        Err(err) => {
            emit(&source, file, &err.to_diagnostic());
            return Err("parse error".to_string());
        }
    };

    if json {
        let rendered = serde_json::to_string_pretty(&program)
            .map_err(|e| format!("cannot serialize syntax tree: {e}"))?;
        println!("{rendered}");
    } else {
        print!("{}", dump(&program));
    }

    Ok(())
}

/// Render the tree dump, pre-order, two spaces per level.
/// 渲染语法树，前序遍历，每层缩进两个空格。
fn dump(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("Program\n");

    out.push_str("  Declarations\n");
    for declaration in &program.declarations {
        out.push_str(&format!(
            "    {} {}\n",
            declaration.ty, declaration.name.name
        ));
    }

    out.push_str("  Body\n");
    for stmt in &program.body.stmts {
        dump_stmt(&mut out, stmt, 2);
    }

    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn dump_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    indent(out, depth);
    match &stmt.kind {
        StmtKind::Skip => out.push_str("Skip\n"),
        StmtKind::Block(block) => {
            out.push_str("Block\n");
            for stmt in &block.stmts {
                dump_stmt(out, stmt, depth + 1);
            }
        }
        StmtKind::Assign { target, value } => {
            out.push_str(&format!("Assign {}\n", target.name));
            dump_expr(out, value, depth + 1);
        }
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            out.push_str("If\n");
            dump_expr(out, cond, depth + 1);
            dump_stmt(out, then_branch, depth + 1);
            if let Some(else_stmt) = else_branch {
                indent(out, depth);
                out.push_str("Else\n");
                dump_stmt(out, else_stmt, depth + 1);
            }
        }
        StmtKind::While { cond, body } => {
            out.push_str("While\n");
            dump_expr(out, cond, depth + 1);
            dump_stmt(out, body, depth + 1);
        }
    }
}

fn dump_expr(out: &mut String, expr: &Expr, depth: usize) {
    indent(out, depth);
    match &expr.kind {
        ExprKind::Var(ident) => out.push_str(&format!("Var {}\n", ident.name)),
        ExprKind::Literal(value) => {
            out.push_str(&format!("Literal {} ({})\n", value, value.ty()));
        }
        ExprKind::Binary { op, left, right } => {
            out.push_str(&format!("Binary {}\n", op));
            dump_expr(out, left, depth + 1);
            dump_expr(out, right, depth + 1);
        }
        ExprKind::Unary { op, operand } => {
            out.push_str(&format!("Unary {}\n", op));
            dump_expr(out, operand, depth + 1);
        }
        ExprKind::Cast { ty, expr } => {
            out.push_str(&format!("Cast {}\n", ty));
            dump_expr(out, expr, depth + 1);
        }
    }
}
