//! # 请求与数据源模型
//!
//! ## 设计思路
//!
//! 将“外部输入”和“合成模式”解耦：
//! - `LabelRequest` 表示一次 CLI 调用收集到的全部参数
//! - `LabelMode` 表示解析后的合成模式（仅名字 / 名字+图标 / 双图案）
//! - `TemplateSource` 区分模板文件与内置模板

use std::path::{Path, PathBuf};

use super::LabelError;

/// 模板来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// 内置默认模板（1181×425 米白底 + 浅灰边框）。
    Builtin,
    /// 本地模板文件。
    File(PathBuf),
}

impl TemplateSource {
    /// 来源描述（用于日志）。
    pub fn describe(&self) -> String {
        match self {
            Self::Builtin => "内置模板".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// 一个图案：名字与可选图标。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub icon: Option<PathBuf>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, icon: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            icon,
        }
    }
}

/// 单次生成请求。
#[derive(Debug, Clone)]
pub struct LabelRequest {
    pub name: String,
    pub icon: Option<PathBuf>,
    pub name2: Option<String>,
    pub icon2: Option<PathBuf>,
    pub template: TemplateSource,
    pub output: PathBuf,
}

/// 解析后的合成模式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelMode {
    NameOnly { name: String },
    NameAndIcon { name: String, icon: PathBuf },
    TwoPatterns { first: Pattern, second: Pattern },
}

impl LabelRequest {
    pub fn new(name: impl Into<String>, template: TemplateSource, output: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            name2: None,
            icon2: None,
            template,
            output: output.into(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_second(mut self, name2: Option<String>, icon2: Option<PathBuf>) -> Self {
        self.name2 = name2;
        self.icon2 = icon2;
        self
    }

    fn icon1(&self) -> Option<&PathBuf> {
        self.icon.as_ref().filter(|p| !p.as_os_str().is_empty())
    }

    /// 第二个名字是否显式指定（空字符串视为未指定）。
    pub fn has_name2(&self) -> bool {
        self.name2.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// 第二个图标是否显式指定。
    pub fn has_icon2(&self) -> bool {
        self.icon2.as_ref().is_some_and(|p| !p.as_os_str().is_empty())
    }

    /// 双图案模式：`name2` 或 `icon2` 任一被指定即启用。
    pub fn is_two_patterns(&self) -> bool {
        self.has_name2() || self.has_icon2()
    }

    /// 解析合成模式。
    ///
    /// 双图案模式下，未指定的第二名字/图标复用第一组的值。
    pub fn mode(&self) -> LabelMode {
        if self.is_two_patterns() {
            let name2 = if self.has_name2() {
                self.name2.clone().unwrap_or_default()
            } else {
                self.name.clone()
            };
            let icon2 = if self.has_icon2() {
                self.icon2.clone()
            } else {
                self.icon1().cloned()
            };

            return LabelMode::TwoPatterns {
                first: Pattern::new(self.name.clone(), self.icon1().cloned()),
                second: Pattern::new(name2, icon2),
            };
        }

        match self.icon1() {
            Some(icon) => LabelMode::NameAndIcon {
                name: self.name.clone(),
                icon: icon.clone(),
            },
            None => LabelMode::NameOnly {
                name: self.name.clone(),
            },
        }
    }

    /// 合成前的参数校验：名字非空，模板与图标文件存在。
    ///
    /// 名字为空返回 `Validation`；文件缺失返回 `Load`，与合成阶段一致。
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.name.is_empty() {
            return Err(LabelError::Validation("请指定名字（--name）".to_string()));
        }

        if let TemplateSource::File(path) = &self.template {
            ensure_exists(path, "模板文件")?;
        }
        if let Some(icon) = self.icon1() {
            ensure_exists(icon, "图标文件")?;
        }
        if let Some(icon2) = self.icon2.as_ref().filter(|_| self.has_icon2()) {
            ensure_exists(icon2, "第二个图标文件")?;
        }

        Ok(())
    }
}

fn ensure_exists(path: &Path, what: &str) -> Result<(), LabelError> {
    if !path.exists() {
        return Err(LabelError::Load(format!(
            "{}不存在：{}",
            what,
            path.display()
        )));
    }
    Ok(())
}
