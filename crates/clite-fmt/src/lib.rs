//! Code formatter for CLite.
//! CLite 代码格式化器。
//!
//! This crate renders a parsed program back to canonical CLite source.
//! 本 crate 将解析后的程序渲染回规范的 CLite 源代码。

mod config;
mod format;
pub mod printer;

pub use config::FormatConfig;
pub use format::Formatter;

use clite_parser::ParseResult;

/// Format CLite source code.
/// 格式化 CLite 源代码。
pub fn format(source: &str) -> ParseResult<String> {
    format_with_config(source, &FormatConfig::default())
}

/// Format CLite source code with custom configuration.
/// 使用自定义配置格式化 CLite 源代码。
pub fn format_with_config(source: &str, config: &FormatConfig) -> ParseResult<String> {
    let program = clite_parser::parse(source)?;
    let formatter = Formatter::new(config.clone());
    Ok(formatter.format(&program))
}

/// Check if source code is already formatted.
/// 检查源代码是否已格式化。
pub fn check(source: &str) -> ParseResult<bool> {
    let formatted = format(source)?;
    Ok(formatted == source)
}
