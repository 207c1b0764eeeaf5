// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 提取服务（extraction_service）：从页面标题和HTML中解析职位字段
/// - 相关性选择器（relevance_selector）：基于TF-IDF余弦相似度挑选描述片段
/// - LLM服务（llm_service）：调用托管聊天模型生成衍生文本
/// - 职位服务（job_service）：编排缓存查询、抓取、提取和模型调用
pub mod extraction_service;
pub mod job_service;
pub mod llm_service;
pub mod relevance_selector;
