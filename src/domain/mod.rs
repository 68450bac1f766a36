// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含管道的核心业务实体：
/// - 领域模型（models）：原始文档、候选记录与归一化空投记录
///
/// 领域层不依赖于任何外部实现。
pub mod models;
