//! # 配置模块
//!
//! ## 设计思路
//!
//! 布局常量是固定的（见 `layout`），这里只集中“运行环境相关”的可调项：
//! 字体路径、输入文件体积上限、解码像素上限与缩放滤镜。
//! 缩放质量档位（quality / balanced / speed）作为高层语义，映射到具体滤镜。
//!
//! ## 实现思路
//!
//! - `Default` 提供与原始工具一致的配置（双线性缩放）。
//! - `ResizeQuality` 负责档位字符串解析与反向输出。
//! - `apply_resize_quality` 将档位转换为具体滤镜。

use std::path::PathBuf;

use image::imageops::FilterType;

use super::LabelError;

/// 默认字体路径（IPAexゴシック）。
pub const DEFAULT_FONT_PATH: &str = "assets/fonts/ipaexg.ttf";

/// 标签合成配置。
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// TrueType / OpenType 字体文件路径。
    pub font_path: PathBuf,
    /// 读取模板/图标时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 图标缩放滤镜。
    pub resize_filter: FilterType,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            resize_filter: FilterType::Triangle,
        }
    }
}

/// 图标缩放质量档位。
///
/// - `Quality`：CatmullRom，边缘更锐利
/// - `Balanced`：双线性，默认
/// - `Speed`：最近邻
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeQuality {
    Quality,
    Balanced,
    Speed,
}

impl ResizeQuality {
    /// 从外部字符串解析档位。
    ///
    /// # 示例
    /// ```rust
    /// use onamae::label::ResizeQuality;
    ///
    /// let q = ResizeQuality::parse("Balanced")?;
    /// assert_eq!(q.as_str(), "balanced");
    /// # Ok::<(), onamae::label::LabelError>(())
    /// ```
    pub fn parse(quality: &str) -> Result<Self, LabelError> {
        match quality.trim().to_lowercase().as_str() {
            "quality" => Ok(Self::Quality),
            "balanced" => Ok(Self::Balanced),
            "speed" => Ok(Self::Speed),
            other => Err(LabelError::Validation(format!(
                "未知缩放档位：{}（可选：quality / balanced / speed）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Balanced => "balanced",
            Self::Speed => "speed",
        }
    }
}

impl ComposerConfig {
    /// 应用指定缩放档位到实际滤镜。
    pub fn apply_resize_quality(&mut self, quality: ResizeQuality) {
        self.resize_filter = match quality {
            ResizeQuality::Quality => FilterType::CatmullRom,
            ResizeQuality::Balanced => FilterType::Triangle,
            ResizeQuality::Speed => FilterType::Nearest,
        };
    }
}
