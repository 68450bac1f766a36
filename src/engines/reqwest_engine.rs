// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, FetchEngine, FetchRequest, FetchResponse};
use async_trait::async_trait;
use std::time::Instant;

/// 静态抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎，适用于服务端渲染的来源页面
pub struct ReqwestEngine;

#[async_trait]
impl FetchEngine for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 抓取响应
    /// * `Err(EngineError)` - 抓取过程中出现的错误
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        // Each request gets a fresh client for cookie isolation
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; dropcrawl/0.1; +http://dropcrawl.dev)")
            .timeout(request.timeout)
            .build()?;

        let start = Instant::now();
        let response = client.get(&request.url).send().await?;

        let status_code = response.status().as_u16();
        if !response.status().is_success() {
            // A listing page that answers with an error carries no rows worth parsing
            return Err(EngineError::Status(status_code));
        }

        let content = response.text().await?;

        Ok(FetchResponse {
            status_code,
            content,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// 获取引擎名称
    ///
    /// # 返回值
    ///
    /// 引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
