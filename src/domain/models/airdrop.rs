// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 空投状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// 进行中
    Live,
    /// 即将开始
    Upcoming,
    /// 已结束
    Ended,
}

impl Status {
    /// 从来源页面的状态文本解析状态
    ///
    /// 任何不在允许集合内的值都归一化为进行中
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "upcoming" => Status::Upcoming,
            "ended" => Status::Ended,
            _ => Status::Live,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Live => "Live",
            Status::Upcoming => "Upcoming",
            Status::Ended => "Ended",
        };
        write!(f, "{}", s)
    }
}

/// 任务类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    /// 普通空投
    Airdrop,
    /// 测试网任务
    Testnet,
    /// 主网任务
    Mainnet,
}

impl TaskType {
    /// 根据任务方式列表推导任务类型
    ///
    /// 测试网优先于主网，两者均优先于默认的空投类型
    pub fn from_methods(methods: &[String]) -> Self {
        let has = |needle: &str| {
            methods
                .iter()
                .any(|m| m.to_lowercase().contains(needle))
        };
        if has("testnet") {
            TaskType::Testnet
        } else if has("mainnet") {
            TaskType::Mainnet
        } else {
            TaskType::Airdrop
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskType::Airdrop => "Airdrop",
            TaskType::Testnet => "Testnet",
            TaskType::Mainnet => "Mainnet",
        };
        write!(f, "{}", s)
    }
}

/// 成本档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostTier {
    /// 零成本
    Free,
    /// 仅需少量Gas费
    MinimalGas,
}

impl CostTier {
    /// 根据解析出的成本金额推导档位
    ///
    /// 成本为0或缺失时视为零成本
    pub fn from_cost(cost: Option<u32>) -> Self {
        match cost {
            Some(c) if c > 0 => CostTier::MinimalGas,
            _ => CostTier::Free,
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CostTier::Free => "Free",
            CostTier::MinimalGas => "Minimal Gas",
        };
        write!(f, "{}", s)
    }
}

/// 耗时估计档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeEstimate {
    /// 未知
    Unknown,
    /// 30分钟以内
    Under30,
    /// 30至60分钟
    Between30And60,
    /// 1小时以上
    OverHour,
}

impl TimeEstimate {
    /// 根据解析出的分钟数推导档位
    ///
    /// 阈值为30分钟和60分钟，缺失时为未知
    pub fn from_minutes(minutes: Option<u32>) -> Self {
        match minutes {
            None => TimeEstimate::Unknown,
            Some(m) if m < 30 => TimeEstimate::Under30,
            Some(m) if m < 60 => TimeEstimate::Between30And60,
            Some(_) => TimeEstimate::OverHour,
        }
    }
}

impl fmt::Display for TimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeEstimate::Unknown => "",
            TimeEstimate::Under30 => "<30 mins",
            TimeEstimate::Between30And60 => "30–60 mins",
            TimeEstimate::OverHour => "1hr+",
        };
        write!(f, "{}", s)
    }
}

/// 归一化空投记录
///
/// 管道的规范输出实体；创建后不再变更，
/// 过滤幸存的每条候选记录恰好产生一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedAirdrop {
    /// 项目名称，不可为空，解析失败时为"Unknown"
    pub project_name: String,
    /// 任务链接，绝对URL或空串
    pub task_link: String,
    /// 空投状态
    pub status: Status,
    /// 任务类型
    pub task_type: TaskType,
    /// 成本档位
    pub cost_tier: CostTier,
    /// 耗时估计
    pub time_estimate: TimeEstimate,
    /// 任务方式列表，保持解析顺序
    pub task_methods: Vec<String>,
    /// 所属链
    pub chain: String,
    /// 难度
    pub difficulty: String,
    /// 价值估计
    pub value_estimate: String,
    /// 备注
    pub notes: String,
    /// 风险标注，目前恒为"DYOR"
    pub risk_level: String,
    /// 进度，创建时恒为"Not Started"
    pub progress: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_allowed_set() {
        assert_eq!(Status::parse("Live"), Status::Live);
        assert_eq!(Status::parse("upcoming"), Status::Upcoming);
        assert_eq!(Status::parse(" Ended "), Status::Ended);
    }

    #[test]
    fn test_status_parse_unknown_defaults_to_live() {
        assert_eq!(Status::parse("Confirmed"), Status::Live);
        assert_eq!(Status::parse(""), Status::Live);
    }

    #[test]
    fn test_task_type_testnet_takes_precedence() {
        let methods = vec![
            "Mainnet".to_string(),
            "Testnet".to_string(),
            "Social".to_string(),
        ];
        assert_eq!(TaskType::from_methods(&methods), TaskType::Testnet);
    }

    #[test]
    fn test_task_type_mainnet_without_testnet() {
        let methods = vec!["Mainnet".to_string(), "Bridge".to_string()];
        assert_eq!(TaskType::from_methods(&methods), TaskType::Mainnet);
    }

    #[test]
    fn test_task_type_default_airdrop() {
        let methods = vec!["Social".to_string()];
        assert_eq!(TaskType::from_methods(&methods), TaskType::Airdrop);
        assert_eq!(TaskType::from_methods(&[]), TaskType::Airdrop);
    }

    #[test]
    fn test_cost_tier_free_for_zero_or_absent() {
        assert_eq!(CostTier::from_cost(None), CostTier::Free);
        assert_eq!(CostTier::from_cost(Some(0)), CostTier::Free);
    }

    #[test]
    fn test_cost_tier_minimal_gas_for_positive() {
        assert_eq!(CostTier::from_cost(Some(1)), CostTier::MinimalGas);
        assert_eq!(CostTier::from_cost(Some(500)), CostTier::MinimalGas);
    }

    #[test]
    fn test_time_estimate_buckets() {
        assert_eq!(TimeEstimate::from_minutes(None), TimeEstimate::Unknown);
        assert_eq!(TimeEstimate::from_minutes(Some(0)), TimeEstimate::Under30);
        assert_eq!(TimeEstimate::from_minutes(Some(29)), TimeEstimate::Under30);
        assert_eq!(
            TimeEstimate::from_minutes(Some(30)),
            TimeEstimate::Between30And60
        );
        assert_eq!(
            TimeEstimate::from_minutes(Some(45)),
            TimeEstimate::Between30And60
        );
        assert_eq!(
            TimeEstimate::from_minutes(Some(59)),
            TimeEstimate::Between30And60
        );
        assert_eq!(TimeEstimate::from_minutes(Some(60)), TimeEstimate::OverHour);
        assert_eq!(
            TimeEstimate::from_minutes(Some(120)),
            TimeEstimate::OverHour
        );
    }

    #[test]
    fn test_display_strings_match_sink_schema() {
        assert_eq!(CostTier::MinimalGas.to_string(), "Minimal Gas");
        assert_eq!(TimeEstimate::Between30And60.to_string(), "30–60 mins");
        assert_eq!(TimeEstimate::Unknown.to_string(), "");
        assert_eq!(Status::Live.to_string(), "Live");
    }
}
