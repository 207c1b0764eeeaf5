// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::job_record::JobRecord;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::services::extraction_service::ExtractionService;
use crate::domain::services::llm_service::{
    LlmServiceTrait, INTERVIEW_QUESTIONS_PROMPT, QUESTIONS_FOR_INTERVIEWER_PROMPT, SKILLS_PROMPT,
};
use crate::engines::traits::JobPageFetcher;
use crate::utils::errors::JobError;
use crate::utils::validators;

/// 职位服务
///
/// 编排完整的职位准备流程：URL校验、缓存查询、页面抓取、
/// 字段提取、三次模型调用和缓存写入。所有依赖通过构造函数
/// 显式注入。
pub struct JobService {
    repository: Arc<dyn JobRepository>,
    fetcher: Arc<dyn JobPageFetcher>,
    llm: Arc<dyn LlmServiceTrait>,
}

impl JobService {
    /// 创建新的职位服务
    pub fn new(
        repository: Arc<dyn JobRepository>,
        fetcher: Arc<dyn JobPageFetcher>,
        llm: Arc<dyn LlmServiceTrait>,
    ) -> Self {
        Self {
            repository,
            fetcher,
            llm,
        }
    }

    /// 获取职位记录
    ///
    /// 缓存命中直接返回已存储的记录；未命中则抓取页面、提取字段、
    /// 依次生成三个衍生字段，全部成功后写入缓存。任何一步失败都
    /// 使整个调用失败，不缓存部分记录。
    ///
    /// # 参数
    ///
    /// * `url` - 用户提交的职位URL
    ///
    /// # 返回值
    ///
    /// * `Ok(JobRecord)` - 完整的职位记录
    /// * `Err(JobError)` - 单条用户可见错误
    pub async fn get_job_record(&self, url: &str) -> Result<JobRecord, JobError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(JobError::EmptyInput);
        }

        // Reject malformed URLs before any network traffic
        let job_id = validators::validate_job_url(url)?;

        if let Some(record) = self.repository.find_by_id(job_id).await? {
            info!("Existing data for url: {}", url);
            return Ok(record);
        }

        info!("Cache miss for job {}, scraping {}", job_id, url);
        let page = self.fetcher.fetch(url).await?;

        let description = ExtractionService::extract_description(&page.content);
        let mut record = match ExtractionService::extract_job_details(&page.title) {
            Some(details) => JobRecord::new(
                details.company_name,
                details.job_title,
                details.location,
                description,
            ),
            None => {
                // Unknown fields, not a failure
                warn!("Page title did not match the expected format: {}", page.title);
                JobRecord::new(String::new(), String::new(), String::new(), description)
            }
        };

        let segments: Vec<String> = record
            .description
            .split('\n')
            .map(|line| line.to_string())
            .collect();

        info!("Sending job description to the model");
        record.skills = Some(self.llm.ask(&segments, SKILLS_PROMPT).await?);
        record.interview_questions = Some(
            self.llm
                .ask(&segments, INTERVIEW_QUESTIONS_PROMPT)
                .await?,
        );
        record.interviewer_questions = Some(
            self.llm
                .ask(&segments, QUESTIONS_FOR_INTERVIEWER_PROMPT)
                .await?,
        );

        self.repository.insert(job_id, &record, url).await?;
        info!("Job {} cached", job_id);

        Ok(record)
    }
}
