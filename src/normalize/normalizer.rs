// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::airdrop::{
    CostTier, NormalizedAirdrop, Status, TaskType, TimeEstimate,
};
use crate::domain::models::document::CandidateRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static COST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)cost:?\s*\$\s*(\d+)").expect("valid regex"));
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)time:?\s*(\d+)\s*min[a-z]*").expect("valid regex"));

/// 归一化选项
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// 方式列表为空时的默认替代项，None表示不替代
    pub default_method: Option<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_method: Some("Hold".to_string()),
        }
    }
}

/// 元数据解析结果
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedMeta {
    /// 解析出的成本金额（美元整数）
    pub cost: Option<u32>,
    /// 解析出的耗时（分钟）
    pub minutes: Option<u32>,
    /// 剩余文本按逗号拆分出的任务方式
    pub methods: Vec<String>,
}

/// 解析任务元数据文本
///
/// 两个正则各扫描一次提取成本与耗时，命中片段随后从文本中剥离，
/// 因此对已清理的文本重复解析不会再产生任何匹配；
/// 剩余文本按逗号拆分为方式列表，空片段被丢弃
///
/// # 参数
///
/// * `meta` - 混合的任务元数据文本
///
/// # 返回值
///
/// 解析结果，成本与耗时相互独立、均可缺失
pub fn parse_meta(meta: &str) -> ParsedMeta {
    // The captures are digits-only, so the only parse failure is overflow;
    // an absurdly large amount saturates instead of being dropped as absent
    let cost = COST_PATTERN
        .captures(meta)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX));

    let minutes = TIME_PATTERN
        .captures(meta)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX));

    // A sloppy listing can repeat a label; every occurrence is stripped so
    // the cleaned text never matches the patterns again
    let cleaned = COST_PATTERN.replace_all(meta, "");
    let cleaned = TIME_PATTERN.replace_all(&cleaned, "");

    let methods = cleaned
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    ParsedMeta {
        cost,
        minutes,
        methods,
    }
}

/// 将候选记录归一化为固定模式的空投记录
///
/// 缺失的名称回退为"Unknown"，相对链接按来源基础URL解析为绝对URL，
/// 派生字段按方式列表、成本与耗时推导；记录一经创建不再变更
///
/// # 参数
///
/// * `candidate` - 来源提取器产出的候选记录
/// * `base_url` - 来源基础URL
/// * `opts` - 归一化选项
///
/// # 返回值
///
/// 完整的归一化空投记录（过滤在此步骤之后单独执行）
pub fn normalize(
    candidate: &CandidateRecord,
    base_url: &Url,
    opts: &NormalizeOptions,
) -> NormalizedAirdrop {
    let project_name = candidate
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    // Table sources carry relative paths; Url::join keeps absolute links intact
    let task_link = candidate
        .link
        .as_deref()
        .and_then(|link| base_url.join(link).ok())
        .map(|u| u.to_string())
        .unwrap_or_default();

    let parsed = parse_meta(candidate.meta.as_deref().unwrap_or(""));

    let mut task_methods = parsed.methods;
    if task_methods.is_empty() {
        if let Some(default) = &opts.default_method {
            task_methods.push(default.clone());
        }
    }

    NormalizedAirdrop {
        project_name,
        task_link,
        status: Status::parse(candidate.status.as_deref().unwrap_or("")),
        task_type: TaskType::from_methods(&task_methods),
        cost_tier: CostTier::from_cost(parsed.cost),
        time_estimate: TimeEstimate::from_minutes(parsed.minutes),
        task_methods,
        chain: candidate.chain.clone().unwrap_or_else(|| "Unknown".to_string()),
        difficulty: String::new(),
        value_estimate: String::new(),
        notes: candidate.description.clone().unwrap_or_default(),
        risk_level: "DYOR".to_string(),
        progress: "Not Started".to_string(),
    }
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
