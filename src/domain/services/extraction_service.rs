// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

// Job page titles follow "{Company} hiring {Job Position} in {Location} | LinkedIn".
// The location group stops at the first comma so "Berlin, Germany" yields "Berlin".
static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s+hiring\s+(.*?)\s+in\s+(.*?),\s+.*\| LinkedIn$").unwrap());

const DESCRIPTION_SELECTOR: &str = "div.show-more-less-html__markup";
const DESCRIPTION_NOT_FOUND: &str = "Description Not Found";

/// 从页面标题提取的职位字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetails {
    /// 公司名称
    pub company_name: String,
    /// 职位名称
    pub job_title: String,
    /// 工作地点
    pub location: String,
}

/// 提取服务
///
/// 负责从职位页面的标题和HTML内容中提取结构化字段
pub struct ExtractionService;

impl ExtractionService {
    /// 从页面标题提取公司名称、职位名称和工作地点
    ///
    /// # 参数
    ///
    /// * `title` - 页面标题文本
    ///
    /// # 返回值
    ///
    /// * `Some(JobDetails)` - 标题匹配固定模式，返回三个捕获组
    /// * `None` - 标题不匹配，调用方应将字段视为未知而非失败
    pub fn extract_job_details(title: &str) -> Option<JobDetails> {
        let captures = TITLE_PATTERN.captures(title)?;

        Some(JobDetails {
            company_name: captures[1].to_string(),
            job_title: captures[2].to_string(),
            location: captures[3].to_string(),
        })
    }

    /// 从页面HTML提取职位描述文本
    ///
    /// # 参数
    ///
    /// * `html_content` - 页面的完整HTML
    ///
    /// # 返回值
    ///
    /// 描述区域的文本；区域不存在时返回占位符文本，不报错
    pub fn extract_description(html_content: &str) -> String {
        let document = Html::parse_document(html_content);

        let selector = match Selector::parse(DESCRIPTION_SELECTOR) {
            Ok(s) => s,
            Err(_) => return DESCRIPTION_NOT_FOUND.to_string(),
        };

        match document.select(&selector).next() {
            Some(element) => element.text().collect::<Vec<_>>().join("").trim().to_string(),
            None => DESCRIPTION_NOT_FOUND.to_string(),
        }
    }
}
