// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::info;

use crate::domain::models::job_record::JobRecord;
use crate::domain::repositories::job_repository::{JobRepository, RepositoryError};

/// 职位记录仓库实现
///
/// 基于本地SQLite文件的精确键值存储。每条记录以职位ID为主键，
/// 存储序列化的JSON文档和来源URL元数据，跨进程重启持久化。
pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    /// 连接（或创建）缓存数据库并确保表结构存在
    ///
    /// # 参数
    ///
    /// * `path` - SQLite数据库文件路径
    ///
    /// # 返回值
    ///
    /// * `Ok(SqliteJobRepository)` - 可用的仓库实例
    /// * `Err(RepositoryError)` - 连接或建表失败
    pub async fn connect(path: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS job_records (
                id INTEGER PRIMARY KEY,
                job_url TEXT NOT NULL,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        info!("Job cache ready at {}", path);
        Ok(Self { pool })
    }
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn find_by_id(&self, job_id: u64) -> Result<Option<JobRecord>, RepositoryError> {
        let row = sqlx::query("SELECT document FROM job_records WHERE id = ?")
            .bind(job_id as i64)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        match row {
            Some(row) => {
                let document: String = row
                    .try_get("document")
                    .map_err(|e| RepositoryError::Database(e.to_string()))?;
                let record = serde_json::from_str(&document)
                    .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn insert(
        &self,
        job_id: u64,
        record: &JobRecord,
        url: &str,
    ) -> Result<(), RepositoryError> {
        let document = serde_json::to_string(record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        // Write-once per job id; the first row wins and duplicates are ignored
        sqlx::query(
            "INSERT OR IGNORE INTO job_records (id, job_url, document, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(job_id as i64)
        .bind(url)
        .bind(document)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(())
    }
}
