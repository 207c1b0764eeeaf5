// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Job postings only live at https://www.linkedin.com/jobs/view/{job_id},
// with an optional trailing slash. The numeric path segment is the job id.
static JOB_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://www\.linkedin\.com/jobs/view/(\d+)/?$").unwrap());

/// 验证错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// 职位URL无效
    #[error("Invalid LinkedIn job URL. Please provide it in the format https://www.linkedin.com/jobs/view/{{job_id}}")]
    InvalidJobUrl,
}

/// 验证职位URL并提取职位ID
///
/// # 参数
///
/// * `url` - 职位URL字符串
///
/// # 返回值
///
/// * `Ok(u64)` - URL有效，返回提取的职位ID
/// * `Err(ValidationError)` - URL格式无效
pub fn validate_job_url(url: &str) -> Result<u64, ValidationError> {
    let captures = JOB_URL_PATTERN
        .captures(url)
        .ok_or(ValidationError::InvalidJobUrl)?;

    captures[1]
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidJobUrl)
}
