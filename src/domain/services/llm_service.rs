// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::settings::LlmSettings;
use crate::domain::services::relevance_selector;
use crate::utils::errors::JobError;

/// 用于筛选描述片段的固定主题查询
pub const TOPIC_KEYWORDS: &str = "skills, experience, responsibilities";

/// 每次模型调用携带的片段数量上限
pub const TOP_SEGMENTS: usize = 3;

/// 技能总结指令
pub const SKILLS_PROMPT: &str = "Act as a friendly interviewer. \
    Summarize the recommended skills? Provide as bullet list.";

/// 面试问题指令
pub const INTERVIEW_QUESTIONS_PROMPT: &str = "Act as a friendly interviewer. \
    What questions are you likely to ask from this job description? \
    Provide question and one-line answer in a numbered list with grouped subtitles.";

/// 向面试官提问指令
pub const QUESTIONS_FOR_INTERVIEWER_PROMPT: &str = "Act as an interviewee. \
    What questions should I prepare for the job interviewer? \
    Provide as numbered list with grouped subtitles.";

#[async_trait]
pub trait LlmServiceTrait: Send + Sync {
    async fn ask(&self, segments: &[String], instruction: &str) -> Result<String, JobError>;
}

/// LLM服务 - 处理与LLM提供商的交互
///
/// # 功能
///
/// 将职位描述中最相关的片段连同固定指令发送给托管聊天模型，
/// 原样返回模型的文本回答
///
/// # 配置
///
/// 通过 `llm` 配置段进行配置：
/// - `api_key` - API密钥（缺失时所有调用失败）
/// - `model` - 使用的模型名称（默认为 gpt-3.5-turbo）
/// - `api_base_url` - API基础URL
pub struct LlmService {
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

#[async_trait]
impl LlmServiceTrait for LlmService {
    async fn ask(&self, segments: &[String], instruction: &str) -> Result<String, JobError> {
        LlmService::ask(self, segments, instruction).await
    }
}

impl LlmService {
    pub fn new(settings: &LlmSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.clone(),
        }
    }

    pub fn new_with_config(api_key: Option<String>, model: String, api_base_url: String) -> Self {
        Self {
            api_key,
            model,
            api_base_url,
        }
    }

    /// 向模型发起一次独立的问答调用
    ///
    /// 先用固定主题查询从片段中筛出最相关的几条作为上下文，
    /// 再与指令一起发送。失败不重试，直接传播给调用方。
    ///
    /// # 参数
    /// * `segments` - 职位描述按换行拆分得到的片段
    /// * `instruction` - 固定指令文本
    ///
    /// # 返回值
    /// * `Ok(String)` - 模型的文本回答，原样返回
    ///
    /// # 错误
    /// * `JobError::MissingCredential` - API密钥未配置
    /// * `JobError::ModelCallFailed` - 请求或响应解析失败
    pub async fn ask(&self, segments: &[String], instruction: &str) -> Result<String, JobError> {
        let api_key = self.api_key.as_ref().ok_or(JobError::MissingCredential)?;

        let documents =
            relevance_selector::select_top_segments(segments, TOPIC_KEYWORDS, TOP_SEGMENTS);
        let context = documents.join("\n");

        tracing::debug!(
            "Sending {} context segments to model {}",
            documents.len(),
            self.model
        );

        let client = reqwest::Client::new();
        let prompt = format!(
            "Use the following job description excerpts to answer.\n\n{}\n\n{}",
            context, instruction
        );

        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a helpful interview preparation assistant."
                },
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let response = client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| JobError::ModelCallFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(JobError::ModelCallFailed(format!(
                "API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| JobError::ModelCallFailed(e.to_string()))?;

        match body["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(content.to_string()),
            None => Err(JobError::ModelCallFailed(
                "Invalid response format from model API".to_string(),
            )),
        }
    }
}
