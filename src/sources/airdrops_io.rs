// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::document::{CandidateRecord, RawDocument};
use crate::sources::{element_text, RecordExtractor};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static CONTAINER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.airdrop-item").expect("valid selector")
});
static NAME: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").expect("valid selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| Selector::parse("p").expect("valid selector"));

/// airdrops.io提取器
///
/// 渲染来源：列表项为div.airdrop-item容器，
/// h3为项目名称，首个带href的链接为任务链接
pub struct AirdropsIoExtractor;

impl RecordExtractor for AirdropsIoExtractor {
    /// 从渲染后的页面提取候选记录
    ///
    /// # 参数
    ///
    /// * `doc` - 原始页面文档
    ///
    /// # 返回值
    ///
    /// 候选记录序列，容器缺失时为空
    fn extract(&self, doc: &RawDocument) -> Vec<CandidateRecord> {
        let document = Html::parse_document(&doc.content);

        let mut records = Vec::new();
        for container in document.select(&CONTAINER) {
            let name = container.select(&NAME).next().and_then(element_text);
            let link = container
                .select(&LINK)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|s| s.to_string());
            let description = container.select(&DESCRIPTION).next().and_then(element_text);

            records.push(CandidateRecord {
                name,
                link,
                description,
                ..Default::default()
            });
        }
        records
    }

    fn kind(&self) -> &'static str {
        "airdrops_io"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn doc(html: &str) -> RawDocument {
        RawDocument::new(
            "airdrops.io",
            Url::parse("https://airdrops.io/latest/").unwrap(),
            html,
        )
    }

    #[test]
    fn test_extract_containers() {
        let html = r#"
            <html><body>
                <div class="airdrop-item">
                    <h3>Acme Drop</h3>
                    <p>Hold tokens to qualify</p>
                    <a href="https://airdrops.io/acme">Details</a>
                </div>
                <div class="airdrop-item">
                    <h3>Beta Drop</h3>
                    <a href="/beta">Details</a>
                </div>
            </body></html>
        "#;

        let records = AirdropsIoExtractor.extract(&doc(html));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Acme Drop"));
        assert_eq!(
            records[0].link.as_deref(),
            Some("https://airdrops.io/acme")
        );
        assert_eq!(
            records[0].description.as_deref(),
            Some("Hold tokens to qualify")
        );
        assert_eq!(records[1].link.as_deref(), Some("/beta"));
    }

    #[test]
    fn test_extract_missing_name_is_none() {
        let html = r#"<div class="airdrop-item"><a href="/x">Go</a></div>"#;
        let records = AirdropsIoExtractor.extract(&doc(html));
        assert_eq!(records.len(), 1);
        assert!(records[0].name.is_none());
    }

    #[test]
    fn test_extract_anchor_absent_yields_empty() {
        let html = "<html><body><div class=\"other\">nothing here</div></body></html>";
        let records = AirdropsIoExtractor.extract(&doc(html));
        assert!(records.is_empty());
    }
}
