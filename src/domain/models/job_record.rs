// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 职位记录实体
///
/// 存储单个职位发布的结构化数据，包含从页面提取的基础字段
/// 和由语言模型生成的三个衍生字段。每条记录对应一个职位ID，
/// 写入缓存后不可变更。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// 公司名称，从页面标题提取
    pub company_name: String,
    /// 职位名称，从页面标题提取
    pub job_title: String,
    /// 工作地点，从页面标题提取
    pub location: String,
    /// 职位描述全文
    pub description: String,
    /// 推荐技能总结，由模型生成
    pub skills: Option<String>,
    /// 可能的面试问题，由模型生成
    pub interview_questions: Option<String>,
    /// 向面试官提出的问题，由模型生成
    pub interviewer_questions: Option<String>,
}

impl JobRecord {
    /// 创建一个新的职位记录
    ///
    /// # 参数
    ///
    /// * `company_name` - 公司名称
    /// * `job_title` - 职位名称
    /// * `location` - 工作地点
    /// * `description` - 职位描述全文
    ///
    /// # 返回值
    ///
    /// 返回一个新的JobRecord实例，三个衍生字段均为空
    pub fn new(
        company_name: String,
        job_title: String,
        location: String,
        description: String,
    ) -> Self {
        Self {
            company_name,
            job_title,
            location,
            description,
            skills: None,
            interview_questions: None,
            interviewer_questions: None,
        }
    }

    /// 判断记录是否完整
    ///
    /// 只有三个衍生字段全部填充的记录才允许写入缓存
    pub fn is_complete(&self) -> bool {
        self.skills.is_some()
            && self.interview_questions.is_some()
            && self.interviewer_questions.is_some()
    }
}
