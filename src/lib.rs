//! # lsb_sentinel 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：比特编解码、槽位通道与嵌入/提取编解码器。

pub mod bits;
pub mod carrier;
pub mod channel;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod logging;
