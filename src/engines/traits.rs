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

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 浏览器启动或操作失败
    #[error("Browser error: {0}")]
    Browser(String),
    /// 导航在重试耗尽后仍然失败
    #[error("Navigation to {url} failed after {attempts} attempts: {message}")]
    NavigationFailed {
        url: String,
        attempts: u32,
        message: String,
    },
    /// 站点要求登录，需要用户重新提交
    #[error("LinkedIn is asking for sign in. Click on `Submit` again.")]
    SignInRequired,
    /// 超时
    #[error("Timeout")]
    Timeout,
}

/// 抓取到的原始职位页面
#[derive(Debug, Clone)]
pub struct RawJobPage {
    /// 页面标题
    pub title: String,
    /// 页面完整HTML内容
    pub content: String,
}

/// 职位页面抓取引擎特质
#[async_trait]
pub trait JobPageFetcher: Send + Sync {
    /// 加载职位页面并读取其标题和内容
    async fn fetch(&self, url: &str) -> Result<RawJobPage, EngineError>;
}
