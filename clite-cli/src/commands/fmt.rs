//! The `clite fmt` command.
//! `clite fmt` 命令。

use crate::output;
use clite_diagnostic::emit;
use std::fs;
use std::path::Path;

/// Format a CLite source file.
/// 格式化 CLite 源文件。
pub fn run(file: &str, write: bool) -> Result<(), String> {
    let path = Path::new(file);

    if !path.exists() {
        return Err(format!("file not found: {}", file));
    }

    let source = fs::read_to_string(path).map_err(|e| format!("failed to read file: {}", e))?;

    let formatted = match clite_fmt::format(&source) {
        Ok(formatted) => formatted,
        Err(err) => {
            emit(&source, file, &err.to_diagnostic());
            return Err("parse error".to_string());
        }
    };

    if write {
        if formatted != source {
            fs::write(path, &formatted).map_err(|e| format!("failed to write file: {}", e))?;
            output::success(&format!("formatted: {file}"));
        } else {
            output::info(&format!("already formatted: {file}"));
        }
    } else {
        // Print the formatted code
        // 打印格式化后的代码
        print!("{}", formatted);
    }

    Ok(())
}

/// Check if a file is formatted.
/// 检查文件是否已格式化。
pub fn check(file: &str) -> Result<(), String> {
    let path = Path::new(file);

    if !path.exists() {
        return Err(format!("file not found: {}", file));
    }

    let source = fs::read_to_string(path).map_err(|e| format!("failed to read file: {}", e))?;

    match clite_fmt::check(&source) {
        Ok(true) => {
            output::success(&format!("OK: {file}"));
            Ok(())
        }
        Ok(false) => {
            output::warning(&format!("would reformat: {file}"));
            Err(format!("not formatted: {file}"))
        }
        Err(err) => {
            emit(&source, file, &err.to_diagnostic());
            Err("parse error".to_string())
        }
    }
}
