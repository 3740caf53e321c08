//! # 命令行接口模块
//!
//! 使用 `clap` 定义程序的三个位置参数与隐写策略选项。

use crate::codec::{Framing, OverflowPolicy, StegoConfig};
use crate::constants::DEFAULT_LOG_FILE;
use clap::Parser;
use std::path::PathBuf;

/// 将命令文件的内容隐藏到无损格式图像 (如 PNG, BMP) 的最低有效位中，
/// 随后从写出的图像中重新提取并打印。
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// 用于隐写的输入图像文件路径。
    pub input_image: PathBuf,

    /// 要隐藏的命令 (消息) 文件路径，内容按原始字节读取。
    pub command_file: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    pub output_image: PathBuf,

    /// 消息超出图像容量时的处理方式。
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Fail)]
    pub on_overflow: OverflowPolicy,

    /// 负载帧格式：结束标记或长度前缀。
    #[arg(long, value_enum, default_value_t = Framing::Sentinel)]
    pub framing: Framing,

    /// 追加写入的日志文件路径。
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Cli {
    pub fn stego_config(&self) -> StegoConfig {
        StegoConfig {
            on_overflow: self.on_overflow,
            framing: self.framing,
        }
    }
}
