//! src/report.rs
//!
//! 把计算结果渲染成终端文本或 JSON。这里不做任何判断逻辑，只负责排版。

use crate::error::Result;
use crate::messages::Messages;
use crate::models::CalcResult;
use crate::utils;
use itertools::Itertools;

const LABEL_WIDTH: usize = 40;

/// 渲染单个结果面板
pub fn render_text(result: &CalcResult, fish_label: &str, messages: &Messages) -> String {
    let labels = &messages.labels;
    let mut lines = vec![labels.results_title.clone(), "=".repeat(LABEL_WIDTH)];

    if !result.warnings.is_empty() {
        lines.push(labels.warnings_title.clone());
        lines.extend(result.warnings.iter().map(|w| format!("  ! {}", w)));
        lines.push(String::new());
    }

    if result.valid {
        let respawn = match result.respawn_after {
            Some(r) => format!("{} {}", r, labels.respawn_unit),
            None => "-".to_string(),
        };
        let cards = [
            (
                messages.single_card(fish_label),
                utils::format_percent(result.single_chance_pct, messages),
            ),
            (
                labels.cumulative_card.clone(),
                utils::format_percent(result.cumulative_chance_pct, messages),
            ),
            (labels.respawn_card.clone(), respawn),
        ];
        for (label, value) in cards {
            lines.push(format!(
                "{:<width$} | {}",
                utils::truncate_string(&label, LABEL_WIDTH),
                value,
                width = LABEL_WIDTH
            ));
        }
        lines.push(format!("  ({})", labels.respawn_disclaimer));
        lines.push(String::new());

        lines.push(labels.steps_title.clone());
        lines.push("-".repeat(LABEL_WIDTH));
        if result.steps.is_empty() {
            lines.push(labels.no_steps.clone());
        } else {
            lines.extend(
                result
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| format!("{}. {}", i + 1, step)),
            );
        }
    }

    lines.into_iter().join("\n")
}

/// 批量结果：每块前面带上序号和鱼名
pub fn render_batch_text<'a, I>(entries: I, messages: &Messages) -> String
where
    I: IntoIterator<Item = (&'a str, &'a CalcResult)>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (fish_label, result))| {
            format!(
                "#{} {}\n{}",
                i + 1,
                fish_label,
                render_text(result, fish_label, messages)
            )
        })
        .join("\n\n")
}

pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::models::{Language, RawInput};

    fn id() -> Messages {
        Messages::for_language(Language::Id).unwrap()
    }

    #[test]
    fn valid_result_shows_cards_and_steps() {
        let m = id();
        let result = compute(&RawInput::new("Orca", "100", "100", "50"), &m);
        let text = render_text(&result, "Orca", &m);

        assert!(text.contains("Peluang per cast Orca"));
        assert!(text.contains("| 2.00%"));
        assert!(text.contains("| 63.58%"));
        assert!(text.contains("| 50 cast"));
        assert!(text.contains("1. Peluang per cast sudah lumayan"));
        assert!(!text.contains(&m.labels.warnings_title));
    }

    #[test]
    fn invalid_result_only_shows_warnings() {
        let m = id();
        let result = compute(&RawInput::new("", "", "", ""), &m);
        let text = render_text(&result, &m.labels.fish_placeholder, &m);

        assert!(text.contains(&m.labels.warnings_title));
        assert!(text.contains(&m.warnings.fish_name_empty));
        assert!(text.contains(&m.warnings.base_invalid));
        assert!(!text.contains(&m.labels.steps_title));
    }

    #[test]
    fn missing_respawn_renders_dash() {
        let m = id();
        let result = compute(&RawInput::new("Orca", "1", "", "1"), &m);
        let text = render_text(&result, "Orca", &m);
        assert!(text.contains(&format!("{:<40} | -", m.labels.respawn_card)));
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let m = id();
        let result = compute(&RawInput::new("Orca", "0", "", ""), &m);
        let json = render_json(&result).unwrap();

        assert!(json.contains("\"singleChancePct\""));
        assert!(json.contains("\"respawnAfter\": null"));
        assert!(json.contains("\"valid\": false"));
    }

    #[test]
    fn batch_numbers_each_block() {
        let m = id();
        let a = compute(&RawInput::new("Orca", "100", "", ""), &m);
        let b = compute(&RawInput::new("Megalodon", "500000", "", ""), &m);
        let text = render_batch_text([("Orca", &a), ("Megalodon", &b)], &m);

        assert!(text.starts_with("#1 Orca\n"));
        assert!(text.contains("\n\n#2 Megalodon\n"));
    }
}
