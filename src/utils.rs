//! src/utils.rs
//!
//! 存放可复用的、无状态的工具函数。
//! 遵循模块化原则，保持其他模块的逻辑清晰。

use crate::messages::Messages;

/// 把表单里的数字文本解析为有限浮点数。
///
/// 逗号和点都可作小数点。只读取开头能构成数字的部分（"12abc" 读作 12），
/// 读不出数字或结果不是有限数时返回 `None`。
pub fn parse_locale_number(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");
    let text = normalized.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // 指数部分只有在后面跟着数字时才算数
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// 百分比显示格式。
pub fn format_percent(value: f64, messages: &Messages) -> String {
    if value.is_nan() {
        return "-".to_string();
    }
    if value <= 0.0 {
        return "0%".to_string();
    }
    if value >= 100.0 {
        return "100%".to_string();
    }
    if value < 0.01 {
        return messages.labels.below_resolution.clone();
    }
    format!("{}%", to_fixed_2(value))
}

/// 两位小数。恰好落在中点时取较大值，与浏览器 `toFixed(2)` 一致；
/// `{:.2}` 在中点上是银行家舍入。
fn to_fixed_2(value: f64) -> String {
    // 两位小数的精确中点只可能是 k/8（k 为奇数）
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return format!("{:.2}", (value * 100.0).ceil() / 100.0);
    }
    format!("{:.2}", value)
}

/// 鱼名为空时使用占位名称
pub fn fish_label<'a>(fish_name: &'a str, messages: &'a Messages) -> &'a str {
    let trimmed = fish_name.trim();
    if trimmed.is_empty() {
        &messages.labels.fish_placeholder
    } else {
        trimmed
    }
}

/// 将字符串截断到指定的最大宽度，如果发生截断则添加"..."
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }

    if max_width < 3 {
        return s.chars().take(max_width).collect();
    }

    format!("{}...", s.chars().take(max_width - 3).collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use rstest::rstest;

    #[rstest]
    #[case("100", Some(100.0))]
    #[case("  2,5", Some(2.5))]
    #[case("0.25", Some(0.25))]
    #[case(".5", Some(0.5))]
    #[case("5.", Some(5.0))]
    #[case("-200", Some(-200.0))]
    #[case("+15", Some(15.0))]
    #[case("1e3", Some(1000.0))]
    #[case("1e", Some(1.0))]
    #[case("12abc", Some(12.0))]
    #[case("1,000,000", Some(1.0))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("abc", None)]
    #[case(".", None)]
    #[case("-", None)]
    #[case("1e400", None)]
    fn parses_like_form_input(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_locale_number(raw), expected);
    }

    #[rstest]
    #[case(f64::NAN, "-")]
    #[case(0.0, "0%")]
    #[case(-3.0, "0%")]
    #[case(100.0, "100%")]
    #[case(250.0, "100%")]
    #[case(0.0001, "< 0,01%")]
    #[case(0.01, "0.01%")]
    #[case(2.0, "2.00%")]
    #[case(63.58303, "63.58%")]
    #[case(0.125, "0.13%")]
    #[case(0.625, "0.63%")]
    #[case(3.125, "3.13%")]
    #[case(12.125, "12.13%")]
    #[case(0.375, "0.38%")]
    #[case(0.12499, "0.12%")]
    fn formats_percentages(#[case] value: f64, #[case] expected: &str) {
        let messages = Messages::for_language(Language::Id).unwrap();
        assert_eq!(format_percent(value, &messages), expected);
    }

    #[test]
    fn below_resolution_follows_language() {
        let messages = Messages::for_language(Language::En).unwrap();
        assert_eq!(format_percent(0.0001, &messages), "< 0.01%");
    }

    #[test]
    fn fish_label_falls_back_to_placeholder() {
        let messages = Messages::for_language(Language::Id).unwrap();
        assert_eq!(fish_label("  ", &messages), "ikan target");
        assert_eq!(fish_label(" Orca ", &messages), "Orca");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_string("Orca", 10), "Orca");
        assert_eq!(truncate_string("Crystal Crab", 8), "Cryst...");
        assert_eq!(truncate_string("Crab", 2), "Cr");
    }
}
