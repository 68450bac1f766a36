// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::document::{CandidateRecord, RawDocument};
use crate::sources::{element_text, RecordExtractor};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TABLES: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("valid selector"));
static ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static HEADER_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("valid selector"));
static CELLS: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));
static ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

/// AirdropAlert提取器
///
/// 静态来源：页面可能含多个表格，目标表格以表头单元格"Name"识别；
/// 数据行第0列为名称与链接，第1列为任务元数据文本，第2列为状态
pub struct AirdropAlertExtractor;

impl AirdropAlertExtractor {
    /// 判断表格首行是否含等于"Name"的表头单元格
    fn is_listing_table(table: ElementRef<'_>) -> bool {
        table
            .select(&ROWS)
            .next()
            .map(|header| {
                header
                    .select(&HEADER_CELLS)
                    .filter_map(element_text)
                    .any(|t| t.eq_ignore_ascii_case("name"))
            })
            .unwrap_or(false)
    }
}

impl RecordExtractor for AirdropAlertExtractor {
    /// 从表头锚定的表格提取候选记录
    ///
    /// # 参数
    ///
    /// * `doc` - 原始页面文档
    ///
    /// # 返回值
    ///
    /// 候选记录序列，锚点表格缺失时为空；
    /// 单元格不足三个的行被逐行跳过，不影响批次其余行
    fn extract(&self, doc: &RawDocument) -> Vec<CandidateRecord> {
        let document = Html::parse_document(&doc.content);

        let table = match document.select(&TABLES).find(|t| Self::is_listing_table(*t)) {
            Some(t) => t,
            None => return Vec::new(),
        };

        let mut records = Vec::new();
        for row in table.select(&ROWS) {
            let cells: Vec<_> = row.select(&CELLS).collect();
            // Skips the header row (th only) and malformed short rows
            if cells.len() < 3 {
                continue;
            }

            let name = element_text(cells[0]);
            let link = cells[0]
                .select(&ANCHOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|s| s.to_string());
            let meta = element_text(cells[1]);
            let status = element_text(cells[2]);

            records.push(CandidateRecord {
                name,
                link,
                status,
                meta,
                chain: None,
                description: None,
            });
        }
        records
    }

    fn kind(&self) -> &'static str {
        "airdrop_alert"
    }
}
