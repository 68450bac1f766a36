// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 归一化与过滤模块
///
/// 将候选记录映射为固定模式的归一化空投记录，
/// 并按排除关键词丢弃不可信或离题的条目
pub mod filter;
pub mod normalizer;
