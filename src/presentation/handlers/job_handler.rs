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

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::{job_request::JobRequestDto, job_response::JobResponseDto};
use crate::domain::services::job_service::JobService;
use crate::presentation::errors::AppError;

/// 处理职位准备请求
///
/// # 参数
///
/// * `service` - 注入的职位服务
/// * `payload` - 包含职位URL的请求体
///
/// # 返回值
///
/// * `Ok(Json<JobResponseDto>)` - 完整的职位记录
/// * `Err(AppError)` - 单条用户可见的错误消息
pub async fn prepare_job(
    Extension(service): Extension<Arc<JobService>>,
    Json(payload): Json<JobRequestDto>,
) -> Result<Json<JobResponseDto>, AppError> {
    let record = service.get_job_record(&payload.url).await?;
    Ok(Json(JobResponseDto::from_record(record)))
}
