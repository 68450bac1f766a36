// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{FetchMode, Settings, SourceSettings};
use crate::domain::models::airdrop::NormalizedAirdrop;
use crate::domain::models::document::RawDocument;
use crate::engines::browser_engine::BrowserEngine;
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::engines::traits::{FetchEngine, FetchRequest};
use crate::infrastructure::notion::{NotionSink, UploadReport};
use crate::normalize::filter::ExclusionFilter;
use crate::normalize::normalizer::{normalize, NormalizeOptions};
use crate::sources::extractor_for;
use anyhow::{anyhow, Result};
use tracing::{error, info, warn};
use url::Url;

/// 单次运行的结果统计
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 成功抓取的来源数
    pub sources_ok: usize,
    /// 抓取失败的来源数（已按零记录降级）
    pub sources_failed: usize,
    /// 提取出的候选记录总数
    pub extracted: usize,
    /// 被排除过滤器丢弃的记录数
    pub filtered_out: usize,
    /// 进入上传批次的归一化记录数
    pub normalized: usize,
    /// 上传结果；上传阶段凭据缺失时为None
    pub upload: Option<UploadReport>,
}

/// 单个来源的收集结果
struct SourceBatch {
    records: Vec<NormalizedAirdrop>,
    extracted: usize,
    filtered_out: usize,
}

/// 抓取-归一化-过滤-上传管道
///
/// 严格顺序执行：一个来源完整走完抓取、提取与归一化后才开始下一个来源；
/// 全部来源的产出累积为单一批次后一次性交给上传器
pub struct Pipeline {
    settings: Settings,
    static_engine: Box<dyn FetchEngine>,
    rendered_engine: Box<dyn FetchEngine>,
    filter: ExclusionFilter,
    normalize_opts: NormalizeOptions,
}

impl Pipeline {
    /// 从配置创建管道
    pub fn new(settings: Settings) -> Self {
        let filter = ExclusionFilter::new(settings.filter.denylist.clone());
        let normalize_opts = NormalizeOptions {
            default_method: settings.normalize.default_method(),
        };

        Self {
            settings,
            static_engine: Box::new(ReqwestEngine),
            rendered_engine: Box::new(BrowserEngine),
            filter,
            normalize_opts,
        }
    }

    /// 抓取单个来源并产出归一化记录
    ///
    /// 任何失败都由调用方降级为该来源零记录
    async fn collect_source(&self, source: &SourceSettings) -> Result<SourceBatch> {
        let extractor = extractor_for(&source.extractor)
            .ok_or_else(|| anyhow!("Unknown extractor kind: {}", source.extractor))?;
        let base_url = Url::parse(&source.url)?;

        let (engine, request) = match source.mode {
            FetchMode::Static => (
                &self.static_engine,
                FetchRequest::new(source.url.clone(), self.settings.fetch.timeout()),
            ),
            FetchMode::Rendered => (
                &self.rendered_engine,
                FetchRequest {
                    url: source.url.clone(),
                    timeout: self.settings.fetch.render_timeout(),
                    wait_selector: source.wait_selector.clone(),
                    render_grace: self.settings.fetch.render_grace(),
                },
            ),
        };

        info!(source = %source.name, engine = engine.name(), "Fetching source");
        let response = engine.fetch(&request).await?;

        let doc = RawDocument::new(source.name.clone(), base_url.clone(), response.content);
        let candidates = extractor.extract(&doc);
        let extracted = candidates.len();

        let mut records = Vec::new();
        let mut filtered_out = 0;
        for candidate in &candidates {
            let airdrop = normalize(candidate, &base_url, &self.normalize_opts);
            if self.filter.is_excluded(&airdrop) {
                filtered_out += 1;
            } else {
                records.push(airdrop);
            }
        }

        info!(
            source = %source.name,
            extracted,
            kept = records.len(),
            filtered_out,
            "Source processed"
        );

        Ok(SourceBatch {
            records,
            extracted,
            filtered_out,
        })
    }

    /// 运行一次完整管道
    ///
    /// 来源级失败记录日志后继续；整个运行不会因单个来源中止
    ///
    /// # 返回值
    ///
    /// 本次运行的结果统计
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut batch: Vec<NormalizedAirdrop> = Vec::new();

        for source in &self.settings.sources {
            match self.collect_source(source).await {
                Ok(result) => {
                    summary.sources_ok += 1;
                    summary.extracted += result.extracted;
                    summary.filtered_out += result.filtered_out;
                    batch.extend(result.records);
                }
                Err(e) => {
                    // A failed source degrades to zero records for this run
                    warn!(source = %source.name, error = %e, "Source failed, continuing");
                    summary.sources_failed += 1;
                }
            }
        }

        summary.normalized = batch.len();

        if batch.is_empty() {
            info!("No records scraped, skipping upload");
            return summary;
        }

        match NotionSink::from_settings(&self.settings.notion) {
            Ok(sink) => {
                let report = sink.upload(&batch).await;
                info!(
                    created = report.created,
                    failed = report.failed,
                    "Upload finished"
                );
                summary.upload = Some(report);
            }
            Err(e) => {
                // Fatal for the upload stage only; scraping results are still reported
                error!(error = %e, "Upload stage unavailable");
            }
        }

        summary
    }
}
