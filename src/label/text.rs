//! # 文字模块
//!
//! ## 设计思路
//!
//! 字号按“72 DPI 下的 em 大小”解释（1pt = 1px），与常见 2D 绘图库一致。
//! `rusttype::Scale` 表示的是 ascent - descent 的像素高度，因此需要按
//! `units_per_em` 换算一次。
//!
//! 锚点语义：`x -= ax * w`，`y += ay * h`，其中 `w` 为前进宽度之和（含字距调整），
//! `h = pt * 72 / 96`，调整后的 `y` 为基线。

use std::path::Path;

use image::{Pixel, Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use super::loader::read_limited;
use super::{Anchor, LabelError};

/// 指定字号的字体。
#[derive(Clone)]
pub struct TextFace {
    font: Font<'static>,
    scale: Scale,
    line_height: f32,
}

impl std::fmt::Debug for TextFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFace")
            .field("scale", &self.scale)
            .field("line_height", &self.line_height)
            .finish()
    }
}

/// 读取并解析字体文件。
pub(crate) fn load_font(path: &Path, max_size: u64) -> Result<Font<'static>, LabelError> {
    let bytes = read_limited(path, "字体文件", max_size).map_err(|e| match e {
        LabelError::Load(msg) => LabelError::Font(msg),
        other => other,
    })?;

    Font::try_from_vec(bytes)
        .ok_or_else(|| LabelError::Font(format!("无法解析字体：{}", path.display())))
}

impl TextFace {
    pub(crate) fn new(font: Font<'static>, point_size: f32) -> Self {
        let units_per_em = font.units_per_em().max(1) as f32;
        let v = font.v_metrics_unscaled();
        let pixel_height = point_size * (v.ascent - v.descent) / units_per_em;

        Self {
            font,
            scale: Scale::uniform(pixel_height),
            line_height: point_size * 72.0 / 96.0,
        }
    }

    /// 字符串前进宽度（像素）。
    pub fn measure(&self, text: &str) -> f32 {
        self.font
            .layout(text, self.scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }

    /// 以锚点在 `image` 上绘制单行文字，按覆盖率做 source-over 混合。
    pub(crate) fn draw(
        &self,
        image: &mut RgbaImage,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        color: Rgba<u8>,
    ) {
        let (origin_x, baseline) = anchored_origin(x, y, anchor, self.measure(text), self.line_height);
        let (width, height) = image.dimensions();

        for glyph in self.font.layout(text, self.scale, point(origin_x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };

            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }

                let alpha = (coverage * color.0[3] as f32).round().clamp(0.0, 255.0) as u8;
                if alpha == 0 {
                    return;
                }

                image
                    .get_pixel_mut(px as u32, py as u32)
                    .blend(&Rgba([color.0[0], color.0[1], color.0[2], alpha]));
            });
        }
    }
}

/// 根据锚点求笔的起点 `(x, 基线 y)`。
pub(crate) fn anchored_origin(x: f32, y: f32, anchor: Anchor, width: f32, line_height: f32) -> (f32, f32) {
    (x - anchor.x * width, y + anchor.y * line_height)
}
