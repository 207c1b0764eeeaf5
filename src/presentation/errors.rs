// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::engines::traits::EngineError;
use crate::utils::errors::JobError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 每个失败的请求得到一条用户可见的消息和匹配的状态码。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = self.0.to_string();

        let status = match self.0.downcast_ref::<JobError>() {
            Some(JobError::EmptyInput) | Some(JobError::InvalidUrl(_)) => StatusCode::BAD_REQUEST,
            Some(JobError::Engine(EngineError::SignInRequired)) => StatusCode::SERVICE_UNAVAILABLE,
            Some(JobError::Engine(_)) => StatusCode::BAD_GATEWAY,
            Some(JobError::ModelCallFailed(_)) => StatusCode::BAD_GATEWAY,
            Some(JobError::MissingCredential) => StatusCode::INTERNAL_SERVER_ERROR,
            Some(JobError::Cache(_)) | None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
