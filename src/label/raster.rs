//! # 真实绘图后端
//!
//! ## 设计思路
//!
//! `ImageBackend` 用 `image` 做解码/编码与合成，用 `fast_image_resize` 缩放图标，
//! 用 `rusttype` 栅格化文字。字体文件在同一后端实例内只解析一次（`OnceCell`），
//! 不同字号共享同一份字体数据。

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use once_cell::unsync::OnceCell;
use rusttype::Font;

use super::assets::render_default_template;
use super::backend::{Canvas, RasterBackend};
use super::loader::load_rgba_file;
use super::pipeline::resize_exact;
use super::text::{load_font, TextFace};
use super::{Anchor, ComposerConfig, LabelError, TemplateSource};

/// 基于 `image` + `rusttype` 的后端。
pub struct ImageBackend {
    config: ComposerConfig,
    font: OnceCell<Font<'static>>,
}

impl ImageBackend {
    pub fn new(config: ComposerConfig) -> Self {
        Self {
            config,
            font: OnceCell::new(),
        }
    }

    fn font(&self) -> Result<&Font<'static>, LabelError> {
        self.font.get_or_try_init(|| {
            log::debug!("🔤 加载字体 - 路径: {}", self.config.font_path.display());
            load_font(&self.config.font_path, self.config.max_file_size)
        })
    }
}

impl Default for ImageBackend {
    fn default() -> Self {
        Self::new(ComposerConfig::default())
    }
}

impl RasterBackend for ImageBackend {
    type Raster = RgbaImage;
    type Face = TextFace;
    type Canvas = RasterCanvas;

    fn load_template(&self, source: &TemplateSource) -> Result<RgbaImage, LabelError> {
        match source {
            TemplateSource::Builtin => Ok(render_default_template()),
            TemplateSource::File(path) => load_rgba_file(path, "模板", &self.config),
        }
    }

    fn load_image(&self, path: &Path) -> Result<RgbaImage, LabelError> {
        load_rgba_file(path, "图标", &self.config)
    }

    fn dimensions(&self, raster: &RgbaImage) -> (u32, u32) {
        raster.dimensions()
    }

    fn scale(&self, raster: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage, LabelError> {
        resize_exact(raster, width, height, self.config.resize_filter)
    }

    fn load_face(&self, point_size: f32) -> Result<TextFace, LabelError> {
        Ok(TextFace::new(self.font()?.clone(), point_size))
    }

    fn create_canvas(&self, width: u32, height: u32) -> RasterCanvas {
        RasterCanvas {
            image: RgbaImage::new(width, height),
        }
    }
}

/// 内存中的 RGBA 画布（初始全透明）。
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl Canvas for RasterCanvas {
    type Raster = RgbaImage;
    type Face = TextFace;

    fn draw_image(&mut self, raster: &RgbaImage, x: i32, y: i32) {
        image::imageops::overlay(&mut self.image, raster, x as i64, y as i64);
    }

    fn draw_text(
        &mut self,
        face: &TextFace,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        color: Rgba<u8>,
    ) {
        face.draw(&mut self.image, text, x, y, anchor, color);
    }

    fn encode_png(&self, path: &Path) -> Result<(), LabelError> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| LabelError::Encode(format!("无法写入 {}：{}", path.display(), e)))
    }
}
