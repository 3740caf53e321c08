//! # 隐写编解码模块
//!
//! 组合 [`bits`](crate::bits) 与 [`LsbChannel`]，实现消息的嵌入与提取。
//!
//! 支持两种帧格式：
//! * [`Framing::Sentinel`]：消息比特之后写入 16 位结束标记；提取时逐字节扫描，
//!   遇到第一个 `0xFF` 分组即停止。消息中的 `0xFF` 字节会导致提前截断。
//! * [`Framing::LengthPrefixed`]：先写入 64 位大端字节长度，再写入消息比特，不使用结束标记。

use crate::bits::{BitStream, from_bits, to_bits};
use crate::channel::LsbChannel;
use crate::constants::{LENGTH_PREFIX_BITS, SENTINEL_BYTE, TERMINATOR};
use crate::error::{Result, StegoError};
use clap::ValueEnum;
use image::RgbImage;
use log::{debug, info, warn};
use std::ops::Range;

/// 负载比特数超过载体容量时的处理策略。
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// 只写入能容纳的前若干比特，其余静默丢弃。
    Truncate,
    /// 在修改载体之前返回 [`StegoError::CapacityExceeded`]。
    #[default]
    Fail,
}

/// 负载在槽位中的帧格式。
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Framing {
    /// 消息 + 16 位结束标记 `1111111111111110`。
    #[default]
    Sentinel,
    /// 64 位长度前缀 + 消息。
    #[value(name = "length")]
    LengthPrefixed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StegoConfig {
    pub on_overflow: OverflowPolicy,
    pub framing: Framing,
}

/// 无状态的隐写编解码器，两次调用之间不共享可变状态。
#[derive(Clone, Copy, Debug, Default)]
pub struct StegoCodec {
    config: StegoConfig,
}

impl StegoCodec {
    pub fn new(config: StegoConfig) -> Self {
        Self { config }
    }

    /// 按当前帧格式生成实际写入槽位的比特序列。
    pub fn payload_bits(&self, message: &[u8]) -> BitStream {
        match self.config.framing {
            Framing::Sentinel => {
                let mut bits = to_bits(message);
                bits.extend_from_slice(&TERMINATOR);
                bits
            }
            Framing::LengthPrefixed => {
                let mut bits = to_bits(&(message.len() as u64).to_be_bytes());
                bits.extend(to_bits(message));
                bits
            }
        }
    }

    /// 载体在当前帧格式下能完整容纳的消息字节数。
    pub fn capacity_bytes(&self, carrier: &RgbImage) -> usize {
        let slots = LsbChannel::new(carrier).capacity();
        let overhead = match self.config.framing {
            Framing::Sentinel => TERMINATOR.len(),
            Framing::LengthPrefixed => LENGTH_PREFIX_BITS,
        };
        slots.saturating_sub(overhead) / 8
    }

    /// 将消息嵌入载体的最低有效位，并交还修改后的载体。
    ///
    /// 载体的所有权在调用期间归编解码器独占，调用方不会看到写了一半的缓冲区。
    ///
    /// # Errors
    ///
    /// 策略为 [`OverflowPolicy::Fail`] 且负载超出容量时返回 [`StegoError::CapacityExceeded`]。
    pub fn embed(&self, message: &[u8], carrier: RgbImage) -> Result<RgbImage> {
        let payload = self.payload_bits(message);
        let mut channel = LsbChannel::new(carrier);
        let capacity = channel.capacity();
        debug!(
            "Embedding {} message bytes as {} payload bits into {} slots",
            message.len(),
            payload.len(),
            capacity
        );

        let writable = if payload.len() > capacity {
            match self.config.on_overflow {
                OverflowPolicy::Fail => {
                    return Err(StegoError::CapacityExceeded {
                        required: payload.len(),
                        available: capacity,
                    });
                }
                OverflowPolicy::Truncate => {
                    warn!(
                        "Payload truncated: {} of {} bits written",
                        capacity,
                        payload.len()
                    );
                    capacity
                }
            }
        } else {
            payload.len()
        };

        payload[..writable]
            .iter()
            .enumerate()
            .try_for_each(|(slot, &bit)| channel.write_bit(slot, bit))?;

        info!("Message embedded successfully!");
        Ok(channel.into_inner())
    }

    /// 从载体中恢复消息。
    ///
    /// # Errors
    ///
    /// 长度前缀帧格式下，载体容纳不下长度前缀，或声明的长度超出剩余容量时返回错误。
    pub fn extract(&self, carrier: &RgbImage) -> Result<Vec<u8>> {
        let channel = LsbChannel::new(carrier);
        let message = match self.config.framing {
            Framing::Sentinel => extract_sentinel(&channel)?,
            Framing::LengthPrefixed => extract_length_prefixed(&channel)?,
        };

        info!("Message extracted successfully!");
        Ok(message)
    }
}

fn read_bits(channel: &LsbChannel<&RgbImage>, slots: Range<usize>) -> Result<BitStream> {
    slots.map(|slot| channel.read_bit(slot)).collect()
}

// 整幅图像全部扫描后再查找结束分组。
fn extract_sentinel(channel: &LsbChannel<&RgbImage>) -> Result<Vec<u8>> {
    let bits = read_bits(channel, 0..channel.capacity())?;
    Ok(from_bits(&bits)
        .into_iter()
        .take_while(|&byte| byte != SENTINEL_BYTE)
        .collect())
}

fn extract_length_prefixed(channel: &LsbChannel<&RgbImage>) -> Result<Vec<u8>> {
    let capacity = channel.capacity();
    if capacity < LENGTH_PREFIX_BITS {
        return Err(StegoError::CapacityExceeded {
            required: LENGTH_PREFIX_BITS,
            available: capacity,
        });
    }

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&from_bits(&read_bits(channel, 0..LENGTH_PREFIX_BITS)?));
    let declared = u64::from_be_bytes(prefix);

    let available = (capacity - LENGTH_PREFIX_BITS) / 8;
    if declared > available as u64 {
        return Err(StegoError::LengthPrefixOutOfRange {
            declared,
            available,
        });
    }

    let end = LENGTH_PREFIX_BITS + declared as usize * 8;
    Ok(from_bits(&read_bits(channel, LENGTH_PREFIX_BITS..end)?))
}
