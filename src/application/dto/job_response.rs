// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::job_record::JobRecord;

/// 职位响应数据传输对象
///
/// 用于封装服务器对职位准备请求的响应结果，
/// 只返回完整的记录，绝不返回部分结果
#[derive(Debug, Deserialize, Serialize)]
pub struct JobResponseDto {
    /// 请求处理是否成功
    pub success: bool,
    /// 完整的职位记录
    pub job: JobRecord,
}

impl JobResponseDto {
    pub fn from_record(job: JobRecord) -> Self {
        Self { success: true, job }
    }
}
