// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::document::{CandidateRecord, RawDocument};
use crate::sources::{element_text, RecordExtractor};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("table tr").expect("valid selector"));
static CELLS: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));
static CHAIN_IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").expect("valid selector"));
static ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

/// CryptoRank提取器
///
/// 静态来源：表格行布局，
/// 第0列为名称（内嵌img的alt为所属链），第1列为任务元数据文本，第2列为状态
pub struct CryptoRankExtractor;

impl RecordExtractor for CryptoRankExtractor {
    /// 从表格页面提取候选记录
    ///
    /// # 参数
    ///
    /// * `doc` - 原始页面文档
    ///
    /// # 返回值
    ///
    /// 候选记录序列，表格缺失时为空；无td的表头行被逐行跳过
    fn extract(&self, doc: &RawDocument) -> Vec<CandidateRecord> {
        let document = Html::parse_document(&doc.content);

        let mut records = Vec::new();
        for row in document.select(&ROWS) {
            let cells: Vec<_> = row.select(&CELLS).collect();
            // Header rows carry th cells only
            if cells.is_empty() {
                continue;
            }

            let name = element_text(cells[0]);
            let chain = cells[0]
                .select(&CHAIN_IMG)
                .next()
                .and_then(|img| img.value().attr("alt"))
                .map(|s| s.to_string());
            let link = cells[0]
                .select(&ANCHOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|s| s.to_string());
            let meta = cells.get(1).copied().and_then(element_text);
            let status = cells.get(2).copied().and_then(element_text);

            records.push(CandidateRecord {
                name,
                link,
                status,
                meta,
                chain,
                description: None,
            });
        }
        records
    }

    fn kind(&self) -> &'static str {
        "cryptorank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn doc(html: &str) -> RawDocument {
        RawDocument::new(
            "cryptorank",
            Url::parse("https://cryptorank.io/drophunting").unwrap(),
            html,
        )
    }

    #[test]
    fn test_extract_table_rows() {
        let html = r#"
            <table>
                <tr><th>Name</th><th>Tasks</th><th>Status</th></tr>
                <tr>
                    <td><img alt="Ethereum" src="eth.png"/><a href="/p/acme">Acme Drop</a></td>
                    <td>Social, Testnet, Cost: $ 5, Time: 45 min</td>
                    <td>Confirmed</td>
                </tr>
                <tr>
                    <td>Beta Drop</td>
                    <td>Hold</td>
                    <td>Upcoming</td>
                </tr>
            </table>
        "#;

        let records = CryptoRankExtractor.extract(&doc(html));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Acme Drop"));
        assert_eq!(records[0].chain.as_deref(), Some("Ethereum"));
        assert_eq!(records[0].link.as_deref(), Some("/p/acme"));
        assert_eq!(
            records[0].meta.as_deref(),
            Some("Social, Testnet, Cost: $ 5, Time: 45 min")
        );
        assert_eq!(records[0].status.as_deref(), Some("Confirmed"));
        assert!(records[1].chain.is_none());
    }

    #[test]
    fn test_extract_header_only_table_yields_empty() {
        let html = "<table><tr><th>Name</th><th>Status</th></tr></table>";
        let records = CryptoRankExtractor.extract(&doc(html));
        assert!(records.is_empty());
    }

    #[test]
    fn test_extract_no_table_yields_empty() {
        let html = "<html><body><p>maintenance</p></body></html>";
        let records = CryptoRankExtractor.extract(&doc(html));
        assert!(records.is_empty());
    }

    #[test]
    fn test_extract_short_row_still_produces_partial_candidate() {
        let html = "<table><tr><td>Solo Drop</td></tr></table>";
        let records = CryptoRankExtractor.extract(&doc(html));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Solo Drop"));
        assert!(records[0].meta.is_none());
        assert!(records[0].status.is_none());
    }
}
