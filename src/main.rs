use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use lsb_sentinel::{cli::Cli, handler::run, logging::init_logger};

/// 程序的主入口点
///
/// 解析命令行参数、打开日志文件，然后执行嵌入与提取流程。
/// 任何致命错误都以退出码 1 结束。
fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help 与 --version 走 clap 自己的退出流程
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logger(&cli.log_file).with_context(|| {
        format!(
            "Unable to open log file: {}",
            cli.log_file.to_string_lossy().red().bold()
        )
    })?;

    run(&cli)?;
    Ok(())
}
