// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::airdrop::NormalizedAirdrop;
use tracing::info;

/// 排除过滤器
///
/// 按注入的关键词列表对归一化记录做大小写不敏感的子串匹配，
/// 任一字段命中即丢弃整条记录；在字段派生之后、输出之前执行
pub struct ExclusionFilter {
    /// 小写化后的排除关键词
    keywords: Vec<String>,
}

impl ExclusionFilter {
    /// 创建新的排除过滤器
    ///
    /// # 参数
    ///
    /// * `keywords` - 排除关键词列表，匹配时不区分大小写
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// 返回命中的关键词
    ///
    /// 检查项目名称、备注描述与任务方式文本
    fn hit(&self, airdrop: &NormalizedAirdrop) -> Option<&str> {
        let name = airdrop.project_name.to_lowercase();
        let notes = airdrop.notes.to_lowercase();
        let methods = airdrop.task_methods.join(", ").to_lowercase();

        self.keywords
            .iter()
            .find(|k| name.contains(*k) || notes.contains(*k) || methods.contains(*k))
            .map(|k| k.as_str())
    }

    /// 判断记录是否应被排除
    ///
    /// 命中时记录关键词与项目名称，便于审计
    ///
    /// # 参数
    ///
    /// * `airdrop` - 待检查的归一化记录
    ///
    /// # 返回值
    ///
    /// 命中任一关键词时返回true
    pub fn is_excluded(&self, airdrop: &NormalizedAirdrop) -> bool {
        if let Some(keyword) = self.hit(airdrop) {
            info!(
                project = %airdrop.project_name,
                keyword = %keyword,
                "Record dropped by exclusion filter"
            );
            return true;
        }
        false
    }
}
