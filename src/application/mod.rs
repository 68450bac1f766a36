// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 把引擎、提取器、归一化与上传器组合为顺序执行的管道
pub mod pipeline;
