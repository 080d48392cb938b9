//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理模板与图标的本地文件加载，并在“尽可能早”的阶段执行输入校验。
//! 目标是尽快失败，减少不必要的内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! 1. 存在性 + metadata 体积限制
//! 2. 读取字节并用文件签名（magic bytes）确认是图片
//! 3. 只读 header 拿到宽高，按像素上限快速拒绝
//! 4. 完整解码为 RGBA

use image::{ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use super::{ComposerConfig, LabelError};

/// 从本地路径加载图片并解码为 RGBA。
///
/// `what` 仅用于错误消息（“模板” / “图标”）。
pub(crate) fn load_rgba_file(
    path: &Path,
    what: &str,
    config: &ComposerConfig,
) -> Result<RgbaImage, LabelError> {
    log::debug!("📁 开始读取{} - 路径: {}", what, path.display());

    let bytes = read_limited(path, what, config.max_file_size)?;
    validate_image_signature(&bytes)
        .map_err(|reason| LabelError::Load(format!("{}：{}（{}）", what, reason, path.display())))?;

    let (width, height) = inspect_dimensions(&bytes)
        .map_err(|reason| LabelError::Load(format!("{}：{}（{}）", what, reason, path.display())))?;
    validate_pixel_limits(config, width, height)?;

    let decoded = image::load_from_memory(&bytes).map_err(|e| {
        LabelError::Load(format!("{}解码失败：{}（{}）", what, e, path.display()))
    })?;

    log::debug!("✅ {}读取成功 - 尺寸: {}x{}", what, width, height);

    Ok(decoded.to_rgba8())
}

/// 读取文件字节，并在读取前按 metadata 做体积限制。
pub(crate) fn read_limited(path: &Path, what: &str, max_size: u64) -> Result<Vec<u8>, LabelError> {
    if !path.exists() {
        return Err(LabelError::Load(format!("{}不存在：{}", what, path.display())));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| LabelError::Load(format!("无法读取{}信息：{}", what, e)))?;

    if metadata.len() > max_size {
        return Err(LabelError::Load(format!(
            "{}过大：{:.2} MB（限制：{:.2} MB）",
            what,
            metadata.len() as f64 / 1024.0 / 1024.0,
            max_size as f64 / 1024.0 / 1024.0
        )));
    }

    std::fs::read(path).map_err(|e| LabelError::Load(format!("无法读取{}：{}", what, e)))
}

/// 通过文件签名校验输入是否为图片。
fn validate_image_signature(bytes: &[u8]) -> Result<(), String> {
    if bytes.is_empty() {
        return Err("文件内容为空".to_string());
    }

    let kind = infer::get(bytes).ok_or_else(|| "无法识别图片类型".to_string())?;

    if kind.matcher_type() != infer::MatcherType::Image {
        return Err(format!("文件签名不是图片类型：{}", kind.mime_type()));
    }

    Ok(())
}

/// 仅通过图片头信息读取宽高。
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), String> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| format!("无法识别图片格式：{}", e))?
        .into_dimensions()
        .map_err(|e| format!("无法读取图片尺寸：{}", e))
}

fn validate_pixel_limits(config: &ComposerConfig, width: u32, height: u32) -> Result<(), LabelError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| LabelError::Load("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(LabelError::Load(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}
