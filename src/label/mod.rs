//! # 标签合成模块（label）
//!
//! ## 设计思路
//!
//! 该模块将“模板加载 → 图标缩放 → 文字绘制 → PNG 输出”按职责拆分为多个子模块，
//! 合成逻辑只依赖 `backend` 中的能力接口，不直接触碰 `image` / `rusttype`。
//!
//! - `composer`：编排三种合成流程（仅名字 / 名字+图标 / 双图案）
//! - `layout`：纯函数布局计算与固定常量
//! - `backend`：绘图能力接口（加载、缩放、画图、画字、编码）
//! - `raster`：基于 `image` + `rusttype` 的真实后端
//! - `loader`：输入文件的存在性、体积、签名与像素校验
//! - `pipeline`：图标缩放（fast_image_resize，失败回退 image）
//! - `text`：字体加载、文字测量与锚点绘制
//! - `assets`：内置默认模板与示例图标
//! - `config/error/source`：配置、错误、请求模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（参数解析 + 校验）
//!    ↓ LabelRequest
//! composer.rs（LabelComposer::compose，按模式分发）
//!    ├─ backend.load_template / load_image
//!    ├─ backend.scale（pipeline.rs）
//!    ├─ canvas.draw_image / draw_text（text.rs）
//!    └─ canvas.encode_png
//!    ↓
//! 返回 LabelError 给 CLI
//! ```

mod assets;
mod backend;
mod composer;
mod config;
mod error;
pub mod layout;
mod loader;
mod pipeline;
mod raster;
mod source;
mod text;

pub use assets::{render_default_template, render_sample_icon};
pub use backend::{Canvas, RasterBackend};
pub use composer::LabelComposer;
pub use config::{ComposerConfig, ResizeQuality, DEFAULT_FONT_PATH};
pub use error::{LabelError, PatternSide};
pub use layout::Anchor;
pub use raster::{ImageBackend, RasterCanvas};
pub use source::{LabelMode, LabelRequest, Pattern, TemplateSource};
pub use text::TextFace;
