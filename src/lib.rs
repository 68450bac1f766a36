// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 将各阶段组合为顺序执行的抓取-归一化-过滤-上传管道
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体：原始文档、候选记录与归一化空投记录
pub mod domain;

/// 引擎模块
///
/// 实现静态与浏览器渲染两种页面抓取引擎
pub mod engines;

/// 基础设施模块
///
/// 提供外部服务集成，如Notion数据库上传
pub mod infrastructure;

/// 归一化模块
///
/// 字段派生、文本模式提取与排除过滤
pub mod normalize;

/// 来源模块
///
/// 每个列表站点的提取策略
pub mod sources;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
