//! # onamae — お名前シール生成工具 · 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 CLI (main.rs, clap)                       │
//! │   generate / template / sample-icon                       │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ LabelRequest
//! ┌───────┴──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (二进制入口统一错误)              │
//! │  │                                                       │
//! │  └─ label ────── LabelComposer<B: RasterBackend>          │
//! │      ├─ layout    纯函数布局计算                           │
//! │      ├─ backend   绘图能力接口 (load/scale/draw/encode)     │
//! │      ├─ raster    image + rusttype 实现                   │
//! │      ├─ loader    输入文件校验与解码                       │
//! │      ├─ pipeline  图标缩放                                 │
//! │      ├─ text      字体加载·测量·锚点绘制                    │
//! │      └─ assets    内置模板 / 示例图标                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，CLI 的返回类型 |
//! | [`label`] | 模板加载、图标缩放、文字绘制与 PNG 输出 |

pub mod error;
pub mod label;
