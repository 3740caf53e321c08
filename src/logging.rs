//! # 日志模块
//!
//! 将 `log` 门面的输出以追加方式写入日志文件。

use crate::error::{Result, StegoError};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// 打开 (必要时创建) 日志文件并安装全局日志器。
///
/// 文件句柄由日志器持有，直到进程退出。
///
/// # Errors
///
/// * 日志文件无法打开时返回 [`StegoError::LogInit`]。
/// * 进程中已安装过日志器时返回 [`StegoError::LoggerInstalled`]，新打开的文件随之关闭。
pub fn init_logger(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| StegoError::LogInit {
            path: path.to_path_buf(),
            source,
        })?;

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
