//! src/messages.rs
//!
//! 内置的语言文本包。
//! 文本以 JSON 形式放在 data/lang/ 下，编译期嵌入，运行时用 serde 解析，
//! 与读取 StringMap.json 的方式一致。

use crate::error::{AppError, Result};
use crate::models::Language;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const BUNDLE_ID: &str = include_str!("../data/lang/id.json");
const BUNDLE_EN: &str = include_str!("../data/lang/en.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Messages {
    pub warnings: WarningTexts,
    pub steps: StepTexts,
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WarningTexts {
    pub fish_name_empty: String,
    pub base_invalid: String,
    pub zero_effective: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StepTexts {
    pub recheck_inputs: String,
    pub single_very_low: String,
    pub single_low: String,
    pub single_decent: String,
    pub enter_attempts: String,
    pub cumulative_early: String,
    pub cumulative_moderate: String,
    pub cumulative_high: String,
    pub cumulative_overdue: String,
    pub far_past_expectation: String,
    /// 含占位符 `{respawn}`
    pub respawn_ritual: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Labels {
    pub title: String,
    pub fish_placeholder: String,
    /// 低于显示精度时的百分比文本
    pub below_resolution: String,
    pub results_title: String,
    pub warnings_title: String,
    /// 含占位符 `{fish}`
    pub single_card: String,
    pub cumulative_card: String,
    pub respawn_card: String,
    pub respawn_unit: String,
    pub respawn_disclaimer: String,
    pub steps_title: String,
    pub no_steps: String,
    pub footer: String,
    pub fish_name_prompt: String,
    pub base_prompt: String,
    pub luck_prompt: String,
    pub caught_prompt: String,
    pub interactive_help: String,
}

impl Messages {
    /// 取出内置文本包。
    pub fn for_language(language: Language) -> Result<Self> {
        let (name, raw) = match language {
            Language::Id => ("id", BUNDLE_ID),
            Language::En => ("en", BUNDLE_EN),
        };
        parse_bundle(name, raw)
    }

    /// 从用户指定的外部文件加载文本包，结构必须与内置包一致。
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        parse_bundle(&path.display().to_string(), &raw)
    }

    pub fn respawn_ritual(&self, respawn_after: u64) -> String {
        self.steps
            .respawn_ritual
            .replace("{respawn}", &respawn_after.to_string())
    }

    pub fn single_card(&self, fish_label: &str) -> String {
        self.labels.single_card.replace("{fish}", fish_label)
    }
}

fn parse_bundle(name: &str, raw: &str) -> Result<Messages> {
    serde_json::from_str(raw).map_err(|source| AppError::Messages {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_languages_parse() {
        let id = Messages::for_language(Language::Id).unwrap();
        let en = Messages::for_language(Language::En).unwrap();
        assert_eq!(id.labels.fish_placeholder, "ikan target");
        assert_eq!(en.labels.fish_placeholder, "target fish");
        assert_eq!(id.labels.below_resolution, "< 0,01%");
        assert_eq!(en.labels.below_resolution, "< 0.01%");
    }

    #[test]
    fn respawn_ritual_interpolates_count() {
        let id = Messages::for_language(Language::Id).unwrap();
        let text = id.respawn_ritual(50);
        assert!(text.contains("sekitar 50 cast"));
        assert!(!text.contains("{respawn}"));
    }

    #[test]
    fn broken_bundle_reports_its_name() {
        let err = parse_bundle("broken", "{}").unwrap_err();
        assert!(matches!(err, AppError::Messages { ref name, .. } if name == "broken"));
    }
}
