//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `LabelComposer` 只负责流程编排，不直接依赖具体绘图库。
//! 每种合成都是一条直线流程：
//! 1. 加载模板，以模板尺寸创建画布并绘制模板
//! 2. （可选）加载图标，拉伸为正方形后绘制
//! 3. 选定字号并绘制名字
//! 4. 编码为 PNG
//!
//! 任何一步失败立即返回，不重试；模板加载失败时不会创建输出文件。
//!
//! ## 实现思路
//!
//! - 坐标全部来自 `layout` 纯函数，这里不做任何算术。
//! - 记录 `load/draw/encode/total` 阶段耗时，便于诊断。

use std::path::Path;
use std::time::Instant;

use image::Rgba;

use super::backend::{Canvas, RasterBackend};
use super::layout::{self, PatternLayout, TEXT_COLOR};
use super::{LabelError, LabelMode, LabelRequest, Pattern, PatternSide, TemplateSource};

/// 标签合成器。
///
/// # 示例
/// ```rust,no_run
/// use onamae::label::{ImageBackend, LabelComposer, TemplateSource};
/// use std::path::Path;
///
/// let composer = LabelComposer::new(ImageBackend::default());
/// composer.compose_name_only("太郎", &TemplateSource::Builtin, Path::new("output.png"))?;
/// # Ok::<(), onamae::label::LabelError>(())
/// ```
pub struct LabelComposer<B: RasterBackend> {
    backend: B,
}

impl<B: RasterBackend> LabelComposer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 按请求解析出的模式分发。
    pub fn compose(&self, request: &LabelRequest) -> Result<LabelMode, LabelError> {
        let mode = request.mode();

        match &mode {
            LabelMode::NameOnly { name } => {
                self.compose_name_only(name, &request.template, &request.output)?
            }
            LabelMode::NameAndIcon { name, icon } => {
                self.compose_name_and_icon(name, icon, &request.template, &request.output)?
            }
            LabelMode::TwoPatterns { first, second } => {
                self.compose_two_patterns(first, second, &request.template, &request.output)?
            }
        }

        Ok(mode)
    }

    /// 仅名字：名字在画布正中。
    pub fn compose_name_only(
        &self,
        name: &str,
        template: &TemplateSource,
        output: &Path,
    ) -> Result<(), LabelError> {
        let total_start = Instant::now();
        let (mut canvas, width, height) = self.prepare_canvas(template)?;

        let layout = layout::name_only(width, height);
        self.draw_pattern(&mut canvas, name, None, &layout)?;

        self.finish(&canvas, output, total_start)
    }

    /// 名字 + 图标：图标靠左，名字在图标右侧。
    pub fn compose_name_and_icon(
        &self,
        name: &str,
        icon: &Path,
        template: &TemplateSource,
        output: &Path,
    ) -> Result<(), LabelError> {
        let total_start = Instant::now();
        let (mut canvas, _width, height) = self.prepare_canvas(template)?;

        let icon_raster = self.backend.load_image(icon)?;
        let layout = layout::name_with_icon(height);
        self.draw_pattern(&mut canvas, name, Some(&icon_raster), &layout)?;

        self.finish(&canvas, output, total_start)
    }

    /// 双图案：画布按宽度二分，左右各自纵向布局。
    ///
    /// 任一侧失败都会中止合成（不输出文件），错误中标明是哪一侧。
    pub fn compose_two_patterns(
        &self,
        first: &Pattern,
        second: &Pattern,
        template: &TemplateSource,
        output: &Path,
    ) -> Result<(), LabelError> {
        let total_start = Instant::now();
        let (mut canvas, width, height) = self.prepare_canvas(template)?;

        let [left, right] = layout::split_halves(width);
        for (side, pattern, (offset, area_width)) in [
            (PatternSide::Left, first, left),
            (PatternSide::Right, second, right),
        ] {
            self.draw_vertical_pattern(&mut canvas, pattern, offset, area_width, height)
                .map_err(|e| LabelError::pattern(side, e))?;
        }

        self.finish(&canvas, output, total_start)
    }

    fn draw_vertical_pattern(
        &self,
        canvas: &mut B::Canvas,
        pattern: &Pattern,
        offset: u32,
        area_width: u32,
        height: u32,
    ) -> Result<(), LabelError> {
        let icon_raster = pattern
            .icon
            .as_deref()
            .map(|path| self.backend.load_image(path))
            .transpose()?;

        let layout = layout::vertical_pattern(offset, area_width, height, icon_raster.is_some());
        self.draw_pattern(canvas, &pattern.name, icon_raster.as_ref(), &layout)
    }

    /// 加载模板并创建同尺寸画布。
    fn prepare_canvas(&self, template: &TemplateSource) -> Result<(B::Canvas, u32, u32), LabelError> {
        let load_start = Instant::now();
        let template_raster = self.backend.load_template(template)?;
        let (width, height) = self.backend.dimensions(&template_raster);

        let mut canvas = self.backend.create_canvas(width, height);
        canvas.draw_image(&template_raster, 0, 0);

        log::debug!(
            "🖼️ 模板就绪 - 来源: {} 尺寸: {}x{} load={}ms",
            template.describe(),
            width,
            height,
            load_start.elapsed().as_millis()
        );

        Ok((canvas, width, height))
    }

    /// 按布局绘制图标（如有）与名字。
    fn draw_pattern(
        &self,
        canvas: &mut B::Canvas,
        name: &str,
        icon: Option<&B::Raster>,
        layout: &PatternLayout,
    ) -> Result<(), LabelError> {
        if let (Some(icon), Some(placement)) = (icon, layout.icon) {
            let (src_width, src_height) = self.backend.dimensions(icon);
            let resized = self.backend.scale(icon, placement.size, placement.size)?;
            canvas.draw_image(&resized, placement.x, placement.y);

            log::debug!(
                "🧩 图标 {}x{} -> {}x{} @ ({}, {})",
                src_width,
                src_height,
                placement.size,
                placement.size,
                placement.x,
                placement.y
            );
        }

        let text = layout.text;
        let face = self.backend.load_face(text.font_size)?;
        canvas.draw_text(&face, name, text.x, text.y, text.anchor, Rgba(TEXT_COLOR));

        Ok(())
    }

    fn finish(&self, canvas: &B::Canvas, output: &Path, total_start: Instant) -> Result<(), LabelError> {
        let encode_start = Instant::now();
        canvas.encode_png(output)?;

        log::info!(
            "✅ 标签生成完成 - 输出: {} encode={}ms total={}ms",
            output.display(),
            encode_start.elapsed().as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(())
    }
}
