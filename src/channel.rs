//! # LSB 通道模块
//!
//! 把载体图像视为一串"槽位"：按行优先、行内按列、像素内按通道 (R, G, B) 的顺序编号，
//! 每个槽位是一个通道样本，只读写其最低有效位。

use crate::constants::CHANNELS;
use crate::error::{Result, StegoError};
use image::RgbImage;
use std::borrow::{Borrow, BorrowMut};

/// 载体图像之上的槽位视图。
///
/// 以 `&RgbImage` 构造时只可读；以 `&mut RgbImage` 或拥有所有权的 `RgbImage` 构造时可写。
pub struct LsbChannel<I> {
    image: I,
}

impl<I: Borrow<RgbImage>> LsbChannel<I> {
    pub fn new(image: I) -> Self {
        Self { image }
    }

    /// 槽位总数：`rows * cols * 3`。
    pub fn capacity(&self) -> usize {
        let (width, height) = self.image.borrow().dimensions();
        width as usize * height as usize * CHANNELS
    }

    /// 将槽位编号映射为 `(row, col, channel)`。
    ///
    /// # Errors
    ///
    /// 槽位编号不小于容量时返回 [`StegoError::SlotOutOfRange`]。
    pub fn slot_position(&self, slot: usize) -> Result<(u32, u32, usize)> {
        let capacity = self.capacity();
        if slot >= capacity {
            return Err(StegoError::SlotOutOfRange { slot, capacity });
        }

        let width = self.image.borrow().width() as usize;
        let pixel = slot / CHANNELS;
        let row = (pixel / width) as u32;
        let col = (pixel % width) as u32;
        Ok((row, col, slot % CHANNELS))
    }

    /// 读取槽位样本的最低有效位。
    pub fn read_bit(&self, slot: usize) -> Result<bool> {
        let (row, col, channel) = self.slot_position(slot)?;
        let sample = self.image.borrow().get_pixel(col, row).0[channel];
        Ok(sample & 1 == 1)
    }

    /// 交还底层图像。
    pub fn into_inner(self) -> I {
        self.image
    }
}

impl<I: BorrowMut<RgbImage>> LsbChannel<I> {
    /// 将槽位样本的最低有效位设为 `bit`，其余 7 位保持不变。
    pub fn write_bit(&mut self, slot: usize, bit: bool) -> Result<()> {
        let (row, col, channel) = self.slot_position(slot)?;
        let sample = &mut self.image.borrow_mut().get_pixel_mut(col, row).0[channel];
        *sample = (*sample & 0xFE) | u8::from(bit);
        Ok(())
    }
}
