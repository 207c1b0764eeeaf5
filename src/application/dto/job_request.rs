// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 职位请求数据传输对象
///
/// 用于封装客户端提交的职位准备请求
#[derive(Debug, Deserialize, Serialize)]
pub struct JobRequestDto {
    /// 职位发布的URL
    pub url: String,
}
