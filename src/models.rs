//! src/models.rs
//!
//! 定义了程序中所有核心的数据结构。

use crate::error::AppError;
use crate::messages::Messages;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// 表单原始输入。所有字段都保留用户键入的原文，解析推迟到计算阶段。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInput {
    #[serde(deserialize_with = "text_or_number")]
    pub fish_name: String,
    /// "1 : X" 中的 X
    #[serde(deserialize_with = "text_or_number")]
    pub base_denominator: String,
    /// 百分比
    #[serde(deserialize_with = "text_or_number")]
    pub total_luck: String,
    #[serde(deserialize_with = "text_or_number")]
    pub total_caught: String,
}

impl RawInput {
    pub fn new(
        fish_name: impl Into<String>,
        base_denominator: impl Into<String>,
        total_luck: impl Into<String>,
        total_caught: impl Into<String>,
    ) -> Self {
        Self {
            fish_name: fish_name.into(),
            base_denominator: base_denominator.into(),
            total_luck: total_luck.into(),
            total_caught: total_caught.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FishName => &self.fish_name,
            Field::BaseDenominator => &self.base_denominator,
            Field::TotalLuck => &self.total_luck,
            Field::TotalCaught => &self.total_caught,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FishName => &mut self.fish_name,
            Field::BaseDenominator => &mut self.base_denominator,
            Field::TotalLuck => &mut self.total_luck,
            Field::TotalCaught => &mut self.total_caught,
        };
        *slot = value.into();
    }
}

/// 批量文件里数字字段既可能写成字符串也可能写成 JSON 数字，统一转为文本。
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
        TextOrNumber::Null(()) => String::new(),
    })
}

/// 表单字段。用枚举代替字符串键，字段名在编译期就能检查。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FishName,
    BaseDenominator,
    TotalLuck,
    TotalCaught,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FishName,
        Field::BaseDenominator,
        Field::TotalLuck,
        Field::TotalCaught,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::FishName => "fishName",
            Field::BaseDenominator => "baseDenominator",
            Field::TotalLuck => "totalLuck",
            Field::TotalCaught => "totalCaught",
        }
    }

    /// 交互模式下给用户看的提示文本
    pub fn prompt<'m>(self, messages: &'m Messages) -> &'m str {
        match self {
            Field::FishName => &messages.labels.fish_name_prompt,
            Field::BaseDenominator => &messages.labels.base_prompt,
            Field::TotalLuck => &messages.labels.luck_prompt,
            Field::TotalCaught => &messages.labels.caught_prompt,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fish" | "fishname" | "fish_name" | "name" => Ok(Field::FishName),
            "base" | "basedenominator" | "base_denominator" | "x" => Ok(Field::BaseDenominator),
            "luck" | "totalluck" | "total_luck" => Ok(Field::TotalLuck),
            "caught" | "totalcaught" | "total_caught" | "n" => Ok(Field::TotalCaught),
            _ => Err(AppError::UnknownField(s.to_string())),
        }
    }
}

/// 单次计算的结果。每次提交都会生成一个全新的结果，替换上一次的。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcResult {
    pub valid: bool,
    /// 单次尝试概率（%）
    pub single_chance_pct: f64,
    /// 至少成功一次的累计概率（%）
    pub cumulative_chance_pct: f64,
    /// 建议在多少次尝试后 "respawn"
    pub respawn_after: Option<u64>,
    pub steps: Vec<String>,
    pub warnings: Vec<String>,
}

impl CalcResult {
    pub(crate) fn invalid(warnings: Vec<String>) -> Self {
        Self {
            valid: false,
            single_chance_pct: 0.0,
            cumulative_chance_pct: 0.0,
            respawn_after: None,
            steps: Vec::new(),
            warnings,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Id,
    En,
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "indonesian" | "bahasa" => Ok(Language::Id),
            "en" | "english" => Ok(Language::En),
            other => Err(AppError::InvalidLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::InvalidOutput(other.to_string())),
        }
    }
}

/// 代表从 config.json 加载的原始用户配置。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct UserConfigRaw {
    pub language: Option<String>,
    pub output: Option<String>,
    pub messages_path: Option<PathBuf>,
}

/// 解析后，供程序内部使用的最终配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub language: Language,
    pub output: OutputFormat,
    pub messages: Messages,
}
