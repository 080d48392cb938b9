//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载合成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//! 双图案模式下，单侧失败被包装为 `Pattern`，保留是哪一侧出错。

use std::fmt;

/// 双图案模式中的左右两侧。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSide {
    Left,
    Right,
}

impl fmt::Display for PatternSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "第一个图案（左侧）"),
            Self::Right => write!(f, "第二个图案（右侧）"),
        }
    }
}

/// 标签合成统一错误类型。
///
/// 该类型会在 CLI 层被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("加载失败：{0}")]
    Load(String),

    #[error("字体错误：{0}")]
    Font(String),

    #[error("输出失败：{0}")]
    Encode(String),

    #[error("参数错误：{0}")]
    Validation(String),

    #[error("绘制{side}失败：{source}")]
    Pattern {
        side: PatternSide,
        #[source]
        source: Box<LabelError>,
    },
}

impl LabelError {
    pub(crate) fn pattern(side: PatternSide, source: LabelError) -> Self {
        Self::Pattern {
            side,
            source: Box::new(source),
        }
    }

    /// 稳定错误码，用于日志检索。
    pub fn code(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Font(_) => "font",
            Self::Encode(_) => "encode",
            Self::Validation(_) => "validation",
            Self::Pattern { .. } => "pattern",
        }
    }
}
