//! src/calculator.rs
//!
//! 包含程序最核心的计算逻辑。
//! 基于独立重复试验模型：单次概率、至少成功一次的累计概率，以及
//! 几何分布期望给出的 "respawn" 建议。

use crate::messages::Messages;
use crate::models::{CalcResult, RawInput};
use crate::utils;
use rayon::prelude::*;
use tracing::debug;

const SINGLE_VERY_LOW_PCT: f64 = 0.05;
const SINGLE_LOW_PCT: f64 = 0.5;
const CUMULATIVE_EARLY_PCT: f64 = 20.0;
const CUMULATIVE_MODERATE_PCT: f64 = 60.0;
const CUMULATIVE_HIGH_PCT: f64 = 90.0;

/// 顶层函数：由表单原文计算出完整结果。纯函数，相同输入总是得到相同输出。
pub fn compute(input: &RawInput, messages: &Messages) -> CalcResult {
    let base_denom = utils::parse_locale_number(&input.base_denominator);
    let luck_pct = utils::parse_locale_number(&input.total_luck);
    let total_caught = utils::parse_locale_number(&input.total_caught);

    let mut warnings = Vec::new();

    if input.fish_name.trim().is_empty() {
        warnings.push(messages.warnings.fish_name_empty.clone());
    }

    let base_denom = match base_denom {
        Some(x) if x > 0.0 => x,
        _ => {
            debug!(raw = %input.base_denominator, "基础概率分母无效");
            warnings.push(messages.warnings.base_invalid.clone());
            return CalcResult::invalid(warnings);
        }
    };

    let p_eff = effective_probability(base_denom, luck_pct);
    if p_eff <= 0.0 {
        warnings.push(messages.warnings.zero_effective.clone());
    }

    let single_chance_pct = p_eff * 100.0;
    let attempts = attempt_count(total_caught);
    let cumulative_chance_pct = cumulative_chance(p_eff, attempts) * 100.0;
    let respawn_after = respawn_after(p_eff);

    debug!(
        base_denom,
        luck_pct = luck_pct.unwrap_or(0.0),
        p_eff,
        attempts,
        cumulative_chance_pct,
        ?respawn_after,
        "计算完成"
    );

    let steps = advisory_steps(
        p_eff,
        single_chance_pct,
        attempts,
        cumulative_chance_pct,
        respawn_after,
        messages,
    );

    CalcResult {
        valid: true,
        single_chance_pct,
        cumulative_chance_pct,
        respawn_after,
        steps,
        warnings,
    }
}

/// 批量计算。各条输入互不相关，并行处理后按原顺序返回。
pub fn compute_batch(inputs: &[RawInput], messages: &Messages) -> Vec<CalcResult> {
    inputs
        .par_iter()
        .map(|input| compute(input, messages))
        .collect()
}

/// 计入 Luck 后的单次成功概率，截断到 [0, 1]。
/// Luck 缺失按 0 处理；负 Luck 没有下限，可能把概率压到 0。
pub fn effective_probability(base_denom: f64, luck_pct: Option<f64>) -> f64 {
    let luck_multiplier = 1.0 + luck_pct.unwrap_or(0.0) / 100.0;
    // 极小的分母会让 1/x 溢出为 inf，inf * 0 是 NaN
    if luck_multiplier <= 0.0 {
        return 0.0;
    }
    let base_p = 1.0 / base_denom;
    (base_p * luck_multiplier).clamp(0.0, 1.0)
}

/// 已尝试次数：向下取整，缺失或非正数按 0 处理。
pub fn attempt_count(total_caught: Option<f64>) -> u64 {
    match total_caught {
        // `as` 对超大值饱和到 u64::MAX
        Some(n) if n > 0.0 => n.floor() as u64,
        _ => 0,
    }
}

/// n 次独立尝试中至少成功一次的概率，返回 [0, 1] 内的小数。
pub fn cumulative_chance(p_eff: f64, attempts: u64) -> f64 {
    if attempts == 0 || p_eff <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - p_eff).powf(attempts as f64)
}

/// 几何分布的期望次数 1/p，四舍五入；p 为 0 或 1 时没有建议值。
pub fn respawn_after(p_eff: f64) -> Option<u64> {
    if p_eff > 0.0 && p_eff < 1.0 {
        Some((1.0 / p_eff).round() as u64)
    } else {
        None
    }
}

/// 按固定优先级生成 "下一步" 建议。
fn advisory_steps(
    p_eff: f64,
    single_chance_pct: f64,
    attempts: u64,
    cumulative_chance_pct: f64,
    respawn_after: Option<u64>,
    messages: &Messages,
) -> Vec<String> {
    let texts = &messages.steps;

    if p_eff <= 0.0 {
        return vec![texts.recheck_inputs.clone()];
    }

    let mut steps = Vec::with_capacity(3);

    let single_tier = if single_chance_pct < SINGLE_VERY_LOW_PCT {
        &texts.single_very_low
    } else if single_chance_pct < SINGLE_LOW_PCT {
        &texts.single_low
    } else {
        &texts.single_decent
    };
    steps.push(single_tier.clone());

    if attempts == 0 {
        steps.push(texts.enter_attempts.clone());
        return steps;
    }

    let cumulative_tier = if cumulative_chance_pct < CUMULATIVE_EARLY_PCT {
        &texts.cumulative_early
    } else if cumulative_chance_pct < CUMULATIVE_MODERATE_PCT {
        &texts.cumulative_moderate
    } else if cumulative_chance_pct < CUMULATIVE_HIGH_PCT {
        &texts.cumulative_high
    } else {
        &texts.cumulative_overdue
    };
    steps.push(cumulative_tier.clone());

    match respawn_after {
        Some(r) if attempts > r.saturating_mul(2) => {
            steps.push(texts.far_past_expectation.clone());
        }
        Some(r) => steps.push(messages.respawn_ritual(r)),
        None => {}
    }

    steps
}
