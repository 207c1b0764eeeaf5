// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use jobprep::domain::models::job_record::JobRecord;
use jobprep::domain::repositories::job_repository::{JobRepository, RepositoryError};
use jobprep::domain::services::llm_service::LlmServiceTrait;
use jobprep::engines::traits::{EngineError, JobPageFetcher, RawJobPage};
use jobprep::utils::errors::JobError;

pub const SAMPLE_URL: &str = "https://www.linkedin.com/jobs/view/123456789/";

pub const SAMPLE_TITLE: &str = "Acme Corp hiring Backend Engineer in Berlin, Germany | LinkedIn";

pub const SAMPLE_HTML: &str = "<html><body><div class=\"show-more-less-html__markup\">Python and SQL required\nFree snacks provided\nMust know Python</div></body></html>";

/// 内存职位仓库，记录调用次数
pub struct MockRepository {
    records: Mutex<HashMap<u64, JobRecord>>,
    pub find_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            find_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl JobRepository for MockRepository {
    async fn find_by_id(&self, job_id: u64) -> Result<Option<JobRecord>, RepositoryError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.lock().unwrap().get(&job_id).cloned())
    }

    async fn insert(
        &self,
        job_id: u64,
        record: &JobRecord,
        _url: &str,
    ) -> Result<(), RepositoryError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .entry(job_id)
            .or_insert_with(|| record.clone());
        Ok(())
    }
}

/// 返回固定页面的抓取引擎替身，可配置为登录墙
pub struct MockFetcher {
    pub calls: AtomicUsize,
    pub sign_in_wall: bool,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            sign_in_wall: false,
        }
    }

    pub fn with_sign_in_wall() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            sign_in_wall: true,
        }
    }
}

#[async_trait]
impl JobPageFetcher for MockFetcher {
    async fn fetch(&self, _url: &str) -> Result<RawJobPage, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.sign_in_wall {
            return Err(EngineError::SignInRequired);
        }
        Ok(RawJobPage {
            title: SAMPLE_TITLE.to_string(),
            content: SAMPLE_HTML.to_string(),
        })
    }
}

/// 模型服务替身，记录每次调用收到的指令
pub struct MockLlm {
    pub calls: AtomicUsize,
    pub instructions: Mutex<Vec<String>>,
    pub fail: bool,
}

impl MockLlm {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            instructions: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            instructions: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl LlmServiceTrait for MockLlm {
    async fn ask(&self, _segments: &[String], instruction: &str) -> Result<String, JobError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.instructions
            .lock()
            .unwrap()
            .push(instruction.to_string());
        if self.fail {
            return Err(JobError::ModelCallFailed("mock failure".to_string()));
        }
        Ok(format!("mock answer {}", call))
    }
}
