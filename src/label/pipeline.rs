//! # 图标缩放流水线
//!
//! ## 设计思路
//!
//! 图标永远被拉伸为目标尺寸（X/Y 独立缩放），不做等比留白。
//! 优先使用 `fast_image_resize`（SIMD 卷积，预乘 alpha），失败时回退
//! `image::imageops::resize`。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, RgbaImage};

use super::LabelError;

/// 将 RGBA 位图缩放到 `target_width × target_height`。
pub(crate) fn resize_exact(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, LabelError> {
    if target_width == 0 || target_height == 0 {
        return Err(LabelError::Load(format!(
            "缩放目标尺寸无效：{}x{}",
            target_width, target_height
        )));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(LabelError::Load("源图尺寸为 0，无法缩放".to_string()));
    }

    if image.dimensions() == (target_width, target_height) {
        return Ok(image.clone());
    }

    log::debug!(
        "🧩 缩放图标：{}x{} -> {}x{}（filter={:?}）",
        image.width(),
        image.height(),
        target_width,
        target_height,
        filter
    );

    match resize_with_fast_image_resize(image, target_width, target_height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::resize：{}", err);
            Ok(image::imageops::resize(image, target_width, target_height, filter))
        }
    }
}

fn resize_with_fast_image_resize(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, LabelError> {
    let (src_width, src_height) = image.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        image.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| LabelError::Load(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(to_resize_alg(filter));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| LabelError::Load(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| LabelError::Load("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_resize_alg(filter: FilterType) -> fr::ResizeAlg {
    match filter {
        FilterType::Nearest => fr::ResizeAlg::Nearest,
        FilterType::Triangle => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        FilterType::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
        FilterType::Gaussian => fr::ResizeAlg::Convolution(fr::FilterType::Mitchell),
        FilterType::Lanczos3 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
    }
}
