// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use url::Url;

/// 原始页面文档
///
/// 一次抓取得到的不可变页面内容，由对应的提取器消费后即丢弃
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// 来源名称
    pub source: String,
    /// 来源基础URL，用于解析相对链接
    pub base_url: Url,
    /// 页面内容
    pub content: String,
    /// 抓取时间
    pub fetched_at: DateTime<Utc>,
}

impl RawDocument {
    /// 创建新的页面文档
    pub fn new(source: impl Into<String>, base_url: Url, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            base_url,
            content: content.into(),
            fetched_at: Utc::now(),
        }
    }
}

/// 候选记录
///
/// 提取器从单个页面结构中解析出的半结构化记录；
/// 字段是否存在取决于来源站点的标记结构
#[derive(Debug, Clone, Default)]
pub struct CandidateRecord {
    /// 项目名称
    pub name: Option<String>,
    /// 任务链接（可能为相对路径）
    pub link: Option<String>,
    /// 原始状态文本
    pub status: Option<String>,
    /// 任务元数据文本（成本、耗时、方式等的混合串）
    pub meta: Option<String>,
    /// 所属链
    pub chain: Option<String>,
    /// 描述文本
    pub description: Option<String>,
}
