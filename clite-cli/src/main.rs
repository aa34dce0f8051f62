//! CLite CLI - the CLite front-end command line interface.
//! CLite CLI - CLite 前端的命令行界面。

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "clite")]
#[command(author, version, about = "CLite - a compiler front end for the CLite teaching language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Parse a file and report syntax errors. / 解析文件并报告语法错误。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },

    /// Parse a file and print its syntax tree. / 解析文件并打印语法树。
    Ast {
        /// The file to parse. / 要解析的文件。
        file: String,

        /// Print the tree as JSON. / 以 JSON 输出语法树。
        #[arg(long)]
        json: bool,
    },

    /// Format a file. / 格式化文件。
    Fmt {
        #[command(subcommand)]
        action: FmtAction,
    },
}

/// Format subcommands.
/// 格式化子命令。
#[derive(Subcommand)]
enum FmtAction {
    /// Format a file. / 格式化文件。
    File {
        /// The file to format. / 要格式化的文件。
        file: String,
        /// Write changes to file. / 将更改写入文件。
        #[arg(short, long)]
        write: bool,
    },
    /// Check if a file is formatted. / 检查文件是否已格式化。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file } => commands::check::run(&file, cli.verbose),
        Commands::Ast { file, json } => commands::ast::run(&file, json),
        Commands::Fmt { action } => match action {
            FmtAction::File { file, write } => commands::fmt::run(&file, write),
            FmtAction::Check { file } => commands::fmt::check(&file),
        },
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
