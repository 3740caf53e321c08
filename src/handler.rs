//! # 命令处理逻辑模块
//!
//! 协调文件 I/O 与隐写核心：读取消息、嵌入、保存、重新加载输出图像并提取，最后报告结果。

use crate::carrier;
use crate::cli::Cli;
use crate::codec::StegoCodec;
use crate::error::StegoError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;

/// 执行一次完整的嵌入与提取流程，返回从输出图像中恢复的消息。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入图像或命令文件。
/// * 消息超出图像容量且策略为 `fail`。
/// * 无法写入输出图像，或无法重新读取它。
pub fn run(args: &Cli) -> Result<Vec<u8>> {
    let codec = StegoCodec::new(args.stego_config());

    let picture = carrier::load(&args.input_image).with_context(|| {
        format!(
            "Error loading image: {}",
            args.input_image.to_string_lossy().red().bold()
        )
    })?;

    let message = fs::read(&args.command_file)
        .map_err(|source| StegoError::MessageRead {
            path: args.command_file.clone(),
            source,
        })
        .with_context(|| {
            format!(
                "Error opening command file: {}",
                args.command_file.to_string_lossy().red().bold()
            )
        })?;

    let available = codec.capacity_bytes(&picture);
    let picture = codec.embed(&message, picture).with_context(|| {
        format!(
            "Unable to hide {} bytes. \nAvailable: {}",
            message.len().to_string().red().bold(),
            available.to_string().green().bold()
        )
    })?;

    carrier::save(&picture, &args.output_image).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.output_image.to_string_lossy().red().bold()
        )
    })?;

    let written = carrier::load(&args.output_image).with_context(|| {
        format!(
            "Unable to re-read written image: {}",
            args.output_image.to_string_lossy().red().bold()
        )
    })?;

    let extracted = codec.extract(&written).with_context(|| {
        format!(
            "Failed to extract message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.output_image.to_string_lossy().red().bold()
        )
    })?;

    println!("Extracted Command: {}", String::from_utf8_lossy(&extracted));

    Ok(extracted)
}
