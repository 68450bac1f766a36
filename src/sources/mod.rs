// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 来源提取器模块
///
/// 每个来源站点对应一个提取策略，
/// 负责把抓取到的页面解析为候选记录序列
pub mod airdrop_alert;
pub mod airdrops_io;
pub mod cryptorank;

use crate::domain::models::document::{CandidateRecord, RawDocument};
use scraper::ElementRef;

/// 记录提取器特质
///
/// 给定一个原始文档，按来源专属的结构查询产出候选记录；
/// 预期的结构锚点缺失时返回空序列而不报错
pub trait RecordExtractor: Send + Sync {
    /// 提取候选记录
    fn extract(&self, doc: &RawDocument) -> Vec<CandidateRecord>;

    /// 提取器种类标识，与配置中的extractor字段对应
    fn kind(&self) -> &'static str;
}

/// 根据配置的种类标识选择提取器
///
/// # 参数
///
/// * `kind` - 提取器种类标识
///
/// # 返回值
///
/// 匹配的提取器，未知标识返回None
pub fn extractor_for(kind: &str) -> Option<Box<dyn RecordExtractor>> {
    match kind {
        "airdrops_io" => Some(Box::new(airdrops_io::AirdropsIoExtractor)),
        "cryptorank" => Some(Box::new(cryptorank::CryptoRankExtractor)),
        "airdrop_alert" => Some(Box::new(airdrop_alert::AirdropAlertExtractor)),
        _ => None,
    }
}

/// 取元素的合并文本，空白折叠，空文本返回None
pub(crate) fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_for_known_kinds() {
        assert_eq!(extractor_for("airdrops_io").unwrap().kind(), "airdrops_io");
        assert_eq!(extractor_for("cryptorank").unwrap().kind(), "cryptorank");
        assert_eq!(
            extractor_for("airdrop_alert").unwrap().kind(),
            "airdrop_alert"
        );
    }

    #[test]
    fn test_extractor_for_unknown_kind() {
        assert!(extractor_for("does_not_exist").is_none());
    }
}
