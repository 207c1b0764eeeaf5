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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、缓存、抓取器和语言模型等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 缓存配置
    pub cache: CacheSettings,
    /// 抓取器配置
    pub scraper: ScraperSettings,
    /// 语言模型配置
    pub llm: LlmSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 缓存配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// SQLite缓存数据库文件路径
    pub path: String,
}

/// 抓取器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 页面导航最大重试次数
    pub max_retries: u32,
    /// 单次导航超时时间（秒）
    pub navigation_timeout: u64,
    /// 模拟人类行为的最小延迟（秒）
    pub humanize_min_secs: f64,
    /// 模拟人类行为的最大延迟（秒）
    pub humanize_max_secs: f64,
}

/// 语言模型配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// OpenAI API密钥（可选，缺失时职位分析不可用）
    pub api_key: Option<String>,
    /// 使用的模型名称
    pub model: String,
    /// API基础URL
    pub api_base_url: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default cache settings
            .set_default("cache.path", "jobprep-cache.db")?
            // Default scraper settings
            .set_default("scraper.max_retries", 5)?
            .set_default("scraper.navigation_timeout", 30)?
            .set_default("scraper.humanize_min_secs", 2.0)?
            .set_default("scraper.humanize_max_secs", 5.0)?
            // Default LLM settings
            .set_default("llm.model", "gpt-3.5-turbo")?
            .set_default("llm.api_base_url", "https://api.openai.com/v1")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBPREP").separator("__"));

        builder.build()?.try_deserialize()
    }
}
