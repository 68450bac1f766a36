// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含抓取、过滤、归一化、外部数据库与来源列表等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub fetch: FetchSettings,
    /// 排除过滤配置
    pub filter: FilterSettings,
    /// 归一化配置
    pub normalize: NormalizeSettings,
    /// Notion数据库配置
    pub notion: NotionSettings,
    /// 来源列表，为空时使用内置的三个来源
    #[serde(default)]
    pub sources: Vec<SourceSettings>,
}

/// 抓取配置设置
#[derive(Debug, Deserialize)]
pub struct FetchSettings {
    /// 静态抓取超时时间（秒）
    pub timeout_secs: u64,
    /// 渲染抓取超时时间（秒）
    pub render_timeout_secs: u64,
    /// 渲染抓取无标志元素时的固定等待时长（毫秒）
    pub render_grace_ms: u64,
}

impl FetchSettings {
    /// 静态抓取超时
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 渲染抓取超时
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    /// 渲染等待时长
    pub fn render_grace(&self) -> Duration {
        Duration::from_millis(self.render_grace_ms)
    }
}

/// 排除过滤配置设置
#[derive(Debug, Deserialize)]
pub struct FilterSettings {
    /// 排除关键词列表，大小写不敏感的子串匹配
    pub denylist: Vec<String>,
}

/// 归一化配置设置
#[derive(Debug, Deserialize)]
pub struct NormalizeSettings {
    /// 方式列表为空时的默认替代项，空串表示不替代
    pub default_method: String,
}

impl NormalizeSettings {
    /// 默认方式替代项
    pub fn default_method(&self) -> Option<String> {
        if self.default_method.is_empty() {
            None
        } else {
            Some(self.default_method.clone())
        }
    }
}

/// Notion数据库配置设置
///
/// token与database_id仅在上传阶段为必需，
/// 缺失时抓取、提取与归一化仍可独立运行
#[derive(Debug, Clone, Deserialize)]
pub struct NotionSettings {
    /// API认证令牌
    pub token: String,
    /// 目标数据库标识
    pub database_id: String,
    /// API基础URL（测试时可指向模拟服务）
    pub base_url: String,
}

/// 抓取模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// 静态HTTP抓取
    Static,
    /// 浏览器渲染抓取
    Rendered,
}

/// 单个来源的配置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 来源名称
    pub name: String,
    /// 列表页URL
    pub url: String,
    /// 抓取模式
    pub mode: FetchMode,
    /// 提取器种类标识
    pub extractor: String,
    /// 渲染完成的标志元素选择器
    #[serde(default)]
    pub wait_selector: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从可选的配置文件与环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Default fetch settings
            .set_default("fetch.timeout_secs", 10)?
            .set_default("fetch.render_timeout_secs", 20)?
            .set_default("fetch.render_grace_ms", 2000)?
            // Default exclusion keywords
            .set_default(
                "filter.denylist",
                vec!["zealy", "spam", "fake", "discord", "telegram"],
            )?
            // Default normalization settings
            .set_default("normalize.default_method", "Hold")?
            // Default Notion settings; token and database_id come from the
            // environment (DROPCRAWL__NOTION__TOKEN, DROPCRAWL__NOTION__DATABASE_ID)
            .set_default("notion.token", "")?
            .set_default("notion.database_id", "")?
            .set_default("notion.base_url", "https://api.notion.com")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("DROPCRAWL")
                    .prefix_separator("__")
                    .separator("__"),
            );

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if settings.sources.is_empty() {
            settings.sources = Self::builtin_sources();
        }
        Ok(settings)
    }

    /// 内置的三个来源
    ///
    /// 与原始脚本覆盖的列表站点一致
    pub fn builtin_sources() -> Vec<SourceSettings> {
        vec![
            SourceSettings {
                name: "airdrops.io".to_string(),
                url: "https://airdrops.io/latest/".to_string(),
                mode: FetchMode::Rendered,
                extractor: "airdrops_io".to_string(),
                wait_selector: Some("div.airdrop-item".to_string()),
            },
            SourceSettings {
                name: "cryptorank".to_string(),
                url: "https://cryptorank.io/drophunting".to_string(),
                mode: FetchMode::Static,
                extractor: "cryptorank".to_string(),
                wait_selector: None,
            },
            SourceSettings {
                name: "airdropalert".to_string(),
                url: "https://airdropalert.com/airdrops/".to_string(),
                mode: FetchMode::Static,
                extractor: "airdrop_alert".to_string(),
                wait_selector: None,
            },
        ]
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
