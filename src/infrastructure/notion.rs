// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::NotionSettings;
use crate::domain::models::airdrop::NormalizedAirdrop;
use serde_json::{json, Map, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// Notion API版本
const NOTION_VERSION: &str = "2022-06-28";

/// 上传错误类型
#[derive(Error, Debug)]
pub enum SinkError {
    /// 缺少必需的凭据
    #[error("Missing Notion credential: {0}")]
    MissingCredential(&'static str),
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// API拒绝了记录
    #[error("Notion rejected record with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// 单次批量上传的结果统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// 成功创建的条目数
    pub created: usize,
    /// 创建失败的条目数
    pub failed: usize,
}

/// Notion数据库上传器
///
/// 每条归一化记录在目标数据库中创建一个新条目；
/// 单条创建失败只记录日志并计数，不阻断批次中的后续条目
pub struct NotionSink {
    /// HTTP 客户端
    client: reqwest::Client,
    /// API认证令牌
    token: String,
    /// 目标数据库标识
    database_id: String,
    /// API基础URL
    base_url: String,
}

impl NotionSink {
    /// 从配置创建上传器
    ///
    /// 令牌或数据库标识缺失时立即失败；
    /// 该失败仅对上传阶段致命，管道的其余阶段不受影响
    ///
    /// # 参数
    ///
    /// * `settings` - Notion配置
    ///
    /// # 返回值
    ///
    /// * `Ok(NotionSink)` - 可用的上传器
    /// * `Err(SinkError)` - 凭据缺失或HTTP客户端构建失败
    pub fn from_settings(settings: &NotionSettings) -> Result<Self, SinkError> {
        if settings.token.is_empty() {
            return Err(SinkError::MissingCredential("token"));
        }
        if settings.database_id.is_empty() {
            return Err(SinkError::MissingCredential("database_id"));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            token: settings.token.clone(),
            database_id: settings.database_id.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 将一条归一化记录映射为Notion属性负载
    ///
    /// 空的选择项与多选项从负载中省略
    pub fn properties(airdrop: &NormalizedAirdrop) -> Value {
        let mut props = Map::new();

        props.insert(
            "Project Name".to_string(),
            json!({ "title": [{ "text": { "content": airdrop.project_name } }] }),
        );

        if !airdrop.task_link.is_empty() {
            props.insert(
                "Task Link".to_string(),
                json!({ "url": airdrop.task_link }),
            );
        }

        let selects = [
            ("Status", airdrop.status.to_string()),
            ("Task Type", airdrop.task_type.to_string()),
            ("Cost", airdrop.cost_tier.to_string()),
            ("Time Estimate", airdrop.time_estimate.to_string()),
            ("Chain", airdrop.chain.clone()),
            ("Difficulty", airdrop.difficulty.clone()),
            ("Risk Level", airdrop.risk_level.clone()),
            ("Progress", airdrop.progress.clone()),
        ];
        for (key, value) in selects {
            if !value.is_empty() {
                props.insert(key.to_string(), json!({ "select": { "name": value } }));
            }
        }

        if !airdrop.task_methods.is_empty() {
            let options: Vec<Value> = airdrop
                .task_methods
                .iter()
                .map(|m| json!({ "name": m }))
                .collect();
            props.insert(
                "Task Methods".to_string(),
                json!({ "multi_select": options }),
            );
        }

        let mut notes = String::new();
        if !airdrop.value_estimate.is_empty() {
            notes.push_str(&format!("Value: {}", airdrop.value_estimate));
        }
        if !airdrop.notes.is_empty() {
            if !notes.is_empty() {
                notes.push_str(" — ");
            }
            notes.push_str(&airdrop.notes);
        }
        if !notes.is_empty() {
            props.insert(
                "Notes".to_string(),
                json!({ "rich_text": [{ "text": { "content": notes } }] }),
            );
        }

        Value::Object(props)
    }

    /// 创建单个数据库条目
    async fn create_page(&self, airdrop: &NormalizedAirdrop) -> Result<(), SinkError> {
        let body = json!({
            "parent": { "database_id": self.database_id },
            "properties": Self::properties(airdrop),
        });

        let response = self
            .client
            .post(format!("{}/v1/pages", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(SinkError::Rejected { status, body })
        }
    }

    /// 上传一次运行累积的全部归一化记录
    ///
    /// 每次创建调用相互独立；单条失败被记录并计数，
    /// 批次中的后续条目继续上传
    ///
    /// # 参数
    ///
    /// * `airdrops` - 归一化记录批次
    ///
    /// # 返回值
    ///
    /// 成功与失败条目的计数
    pub async fn upload(&self, airdrops: &[NormalizedAirdrop]) -> UploadReport {
        let mut report = UploadReport::default();

        for airdrop in airdrops {
            match self.create_page(airdrop).await {
                Ok(()) => {
                    info!(project = %airdrop.project_name, "Created Notion entry");
                    report.created += 1;
                }
                Err(e) => {
                    error!(project = %airdrop.project_name, error = %e, "Failed to create Notion entry");
                    report.failed += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
#[path = "notion_test.rs"]
mod tests;
