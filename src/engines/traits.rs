// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Non-success status: {0}")]
    Status(u16),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 浏览器错误
    #[error("Browser error: {0}")]
    Browser(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 抓取请求
///
/// 描述对单个来源页面的一次抓取
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 超时时间
    pub timeout: Duration,
    /// 渲染完成的标志元素选择器（仅渲染引擎使用）
    pub wait_selector: Option<String>,
    /// 无标志元素时的固定等待时长（仅渲染引擎使用）
    pub render_grace: Duration,
}

impl FetchRequest {
    /// 创建静态抓取请求
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            wait_selector: None,
            render_grace: Duration::from_secs(2),
        }
    }
}

/// 抓取响应
pub struct FetchResponse {
    /// HTTP状态码（渲染引擎固定为200）
    pub status_code: u16,
    /// 页面内容
    pub content: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 抓取引擎特质
///
/// 静态引擎与渲染引擎的共同契约
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
