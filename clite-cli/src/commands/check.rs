//! The `clite check` command.
//! `clite check` 命令。

use crate::output;
use clite_diagnostic::emit;
use std::fs;

/// Parse a CLite file and report the result.
/// 解析 CLite 文件并报告结果。
pub fn run(file: &str, verbose: bool) -> Result<(), String> {
    let source =
        fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))?;

    // Parse
    // 解析
    match clite_parser::parse(&source) {
        Ok(program) => {
            if verbose {
                output::info(&format!(
                    "parsed {} declaration(s) and {} top-level statement(s)",
                    program.declarations.len(),
                    program.body.stmts.len()
                ));
            }
            output::success("OK - program is syntactically valid");
            Ok(())
        }
        Err(err) => {
            emit(&source, file, &err.to_diagnostic());
            output::error("syntax error found");
            Err("parse error".to_string())
        }
    }
}
