//! # 绘图能力接口
//!
//! ## 设计思路
//!
//! 合成逻辑只需要五种能力：加载、缩放、选字体、画图/画字、编码输出。
//! 将其抽象为 `RasterBackend` + `Canvas` 两个 trait，`LabelComposer` 对后端泛型，
//! 单元测试可以注入纯内存的记录型后端，无需真实文件 I/O。
//!
//! 真实实现见 `raster::ImageBackend`。

use std::path::Path;

use image::Rgba;

use super::{Anchor, LabelError, TemplateSource};

/// 图片加载、缩放与画布创建。
pub trait RasterBackend {
    /// 解码后的位图。
    type Raster;
    /// 指定字号的字体。
    type Face;
    /// 可绘制的画布。
    type Canvas: Canvas<Raster = Self::Raster, Face = Self::Face>;

    fn load_template(&self, source: &TemplateSource) -> Result<Self::Raster, LabelError>;

    fn load_image(&self, path: &Path) -> Result<Self::Raster, LabelError>;

    /// 位图尺寸 `(width, height)`。
    fn dimensions(&self, raster: &Self::Raster) -> (u32, u32);

    /// 将位图缩放到 `width × height`（X/Y 独立缩放）。
    fn scale(&self, raster: &Self::Raster, width: u32, height: u32) -> Result<Self::Raster, LabelError>;

    /// 以 `point_size`（pt）选定字体。
    fn load_face(&self, point_size: f32) -> Result<Self::Face, LabelError>;

    fn create_canvas(&self, width: u32, height: u32) -> Self::Canvas;
}

/// 画布绘制原语。
pub trait Canvas {
    type Raster;
    type Face;

    /// 以左上角 `(x, y)` 绘制位图，超出画布部分被裁剪。
    fn draw_image(&mut self, raster: &Self::Raster, x: i32, y: i32);

    /// 按锚点绘制单行文字。
    fn draw_text(
        &mut self,
        face: &Self::Face,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        color: Rgba<u8>,
    );

    /// 编码为 PNG 写入 `path`。
    fn encode_png(&self, path: &Path) -> Result<(), LabelError>;
}
