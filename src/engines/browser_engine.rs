// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, FetchEngine, FetchRequest, FetchResponse};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::{Duration, Instant};

/// 渲染抓取引擎
///
/// 基于chromiumoxide实现的浏览器渲染抓取引擎，
/// 适用于依赖客户端脚本生成列表内容的来源页面
pub struct BrowserEngine;

impl BrowserEngine {
    /// 导航并捕获渲染后的页面内容
    async fn capture(page: &Page, request: &FetchRequest) -> Result<String, EngineError> {
        page.goto(&request.url)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        // Wait for the marker element to appear so client-side rendering has
        // finished; without a marker fall back to a fixed grace delay.
        // The outer timeout bounds the polling loop.
        if let Some(selector) = &request.wait_selector {
            loop {
                if page.find_element(selector.as_str()).await.is_ok() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(250)).await;
            }
        } else {
            tokio::time::sleep(request.render_grace).await;
        }

        page.content()
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))
    }
}

#[async_trait]
impl FetchEngine for BrowserEngine {
    /// 执行浏览器渲染抓取
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
        let start = Instant::now();

        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(EngineError::Browser)?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| EngineError::Browser(e.to_string()))?;

        // Spawn a handler to process browser events
        let handler_task = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let result = tokio::time::timeout(request.timeout, async {
            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| EngineError::Browser(e.to_string()))?;
            Self::capture(&page, request).await
        })
        .await;

        // The Chrome subprocess is torn down on every exit path, including
        // timeout, so a failed fetch never leaks a headless browser.
        let _ = browser.close().await;
        let _ = browser.wait().await;
        handler_task.abort();

        let content = match result {
            Ok(Ok(content)) => content,
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(EngineError::Timeout),
        };

        Ok(FetchResponse {
            // CDP does not surface the navigation status here; a rendered
            // capture that got this far is treated as a success.
            status_code: 200,
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
        "browser"
    }
}
