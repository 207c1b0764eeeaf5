// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::job_record::JobRecord;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// 职位记录仓库接口
///
/// 以职位ID为主键的精确键值缓存。每个职位ID只写入一次，
/// 重复写入是幂等的（同一职位ID派生自同一URL，内容相同）。
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// 按职位ID查找缓存记录
    ///
    /// # 参数
    ///
    /// * `job_id` - 从URL提取的职位ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(JobRecord))` - 缓存命中，返回反序列化的记录
    /// * `Ok(None)` - 缓存未命中
    /// * `Err(RepositoryError)` - 存储访问失败
    async fn find_by_id(&self, job_id: u64) -> Result<Option<JobRecord>, RepositoryError>;

    /// 写入完整的职位记录
    ///
    /// # 参数
    ///
    /// * `job_id` - 职位ID，作为主键
    /// * `record` - 完整的职位记录
    /// * `url` - 来源URL，作为元数据一并存储
    async fn insert(
        &self,
        job_id: u64,
        record: &JobRecord,
        url: &str,
    ) -> Result<(), RepositoryError>;
}
