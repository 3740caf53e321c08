//! # 载体图像读写模块
//!
//! 加载任意可解码图像并统一转换为 8 位 RGB；保存时按目标路径扩展名选择无损格式。

use crate::error::{Result, StegoError};
use image::RgbImage;
use std::path::Path;

/// 从磁盘加载载体图像，透明通道被丢弃。
pub fn load(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|source| StegoError::CarrierLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgb8())
}

/// 将载体图像写回磁盘。
///
/// 有损格式会破坏隐藏的比特，因此只启用了无损编码器 (PNG, BMP, TIFF, WebP, QOI)。
pub fn save(carrier: &RgbImage, path: &Path) -> Result<()> {
    carrier.save(path).map_err(|source| StegoError::CarrierWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    #[test]
    fn test_png_round_trip_is_lossless() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("carrier.png");
        let image = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8, y as u8, (x * y) as u8 | 1]));

        save(&image, &path)?;
        assert_eq!(load(&path)?, image);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let result = load(Path::new("definitely/not/here.png"));
        assert!(matches!(result, Err(StegoError::CarrierLoad { .. })));
    }

    #[test]
    fn test_load_error_message_leaves_cause_to_source() {
        let err = load(Path::new("definitely/not/here.png")).expect_err("missing file must fail");
        let cause = std::error::Error::source(&err)
            .expect("load error carries its cause")
            .to_string();
        assert!(err.to_string().contains("here.png"));
        assert!(!err.to_string().contains(&cause));
    }

    #[test]
    fn test_undecodable_file_is_a_load_error() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not an image at all")?;
        assert!(matches!(load(&path), Err(StegoError::CarrierLoad { .. })));
        Ok(())
    }

    #[test]
    fn test_unwritable_destination_is_a_write_error() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing_dir").join("out.png");
        let image = RgbImage::new(2, 2);
        assert!(matches!(
            save(&image, &path),
            Err(StegoError::CarrierWrite { .. })
        ));
        Ok(())
    }
}
