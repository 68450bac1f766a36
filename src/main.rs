// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dropcrawl::application::pipeline::Pipeline;
use dropcrawl::config::settings::Settings;
use dropcrawl::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，运行一次完整管道并输出结果计数；
/// 来源级错误只记录日志，不产生非零退出码
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting dropcrawl...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(sources = settings.sources.len(), "Configuration loaded");

    // 3. Run the pipeline once
    let pipeline = Pipeline::new(settings);
    let summary = pipeline.run().await;

    info!(
        sources_ok = summary.sources_ok,
        sources_failed = summary.sources_failed,
        extracted = summary.extracted,
        filtered_out = summary.filtered_out,
        normalized = summary.normalized,
        "Run finished"
    );

    match &summary.upload {
        Some(report) => println!(
            "Added {} entries to Notion ({} failed)",
            report.created, report.failed
        ),
        None if summary.normalized == 0 => println!("No data scraped"),
        None => println!(
            "Scraped {} entries but the upload stage was unavailable",
            summary.normalized
        ),
    }

    Ok(())
}
