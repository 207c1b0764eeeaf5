// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::repositories::job_repository::RepositoryError;
use crate::engines::traits::EngineError;
use crate::utils::validators::ValidationError;

/// 职位处理错误类型
///
/// 封装职位准备流程中所有可能的错误，每种错误最终以单条
/// 用户可见的消息呈现，绝不返回部分结果
#[derive(Error, Debug)]
pub enum JobError {
    /// 未提交职位URL
    #[error("Job URL is required")]
    EmptyInput,

    /// 职位URL格式无效
    #[error(transparent)]
    InvalidUrl(#[from] ValidationError),

    /// 页面抓取错误（登录墙、导航失败等）
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// 缺少模型API密钥
    #[error("OpenAI API key is required")]
    MissingCredential,

    /// 模型调用失败
    #[error("Model call failed: {0}")]
    ModelCallFailed(String),

    /// 缓存存储错误
    #[error(transparent)]
    Cache(#[from] RepositoryError),
}
