//! 统一错误类型模块
//!
//! # 设计思路
//!
//! CLI 各子命令统一返回 `Result<T, AppError>`，由 `main` 负责打印与退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `LabelError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::label::LabelError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 标签合成流水线错误（加载 / 字体 / 输出 / 校验）
    #[error("{0}")]
    Label(#[from] LabelError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 稳定错误码，写入日志便于检索。
    pub fn code(&self) -> &'static str {
        match self {
            Self::Label(err) => err.code(),
            Self::Io(_) => "io",
        }
    }
}
