// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// 从描述片段中挑选与主题查询最相关的前k个片段
///
/// 在片段语料加查询的词汇表上构建TF-IDF向量空间，计算查询向量
/// 与每个片段向量的余弦相似度，按相似度降序选取前k个片段，
/// 相同分数按原始顺序排列，空字符串片段被丢弃。
///
/// # 参数
///
/// * `segments` - 描述按换行拆分得到的文本片段
/// * `query` - 主题查询文本
/// * `k` - 最多返回的片段数
///
/// # 返回值
///
/// 最多k个非空片段，按相似度降序；退化输入返回更少的结果，从不报错
pub fn select_top_segments(segments: &[String], query: &str, k: usize) -> Vec<String> {
    if segments.is_empty() || k == 0 {
        return Vec::new();
    }

    let documents: Vec<Vec<String>> = segments.iter().map(|s| tokenize(s)).collect();
    let query_tokens = tokenize(query);

    // Vocabulary spans the segment corpus plus the query
    let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
    for token in documents.iter().flatten().chain(query_tokens.iter()) {
        let next_index = vocabulary.len();
        vocabulary.entry(token.clone()).or_insert(next_index);
    }

    if vocabulary.is_empty() {
        return Vec::new();
    }

    // Smoothed inverse document frequency over the segment corpus
    let corpus_size = documents.len();
    let mut idf = vec![0.0_f64; vocabulary.len()];
    for (term, &index) in &vocabulary {
        let document_frequency = documents.iter().filter(|doc| doc.contains(term)).count();
        idf[index] =
            (((1 + corpus_size) as f64) / ((1 + document_frequency) as f64)).ln() + 1.0;
    }

    let query_vector = tfidf_vector(&query_tokens, &vocabulary, &idf);

    let mut scored: Vec<(usize, f64)> = documents
        .iter()
        .enumerate()
        .map(|(index, tokens)| {
            let segment_vector = tfidf_vector(tokens, &vocabulary, &idf);
            (index, cosine_similarity(&query_vector, &segment_vector))
        })
        .collect();

    // Stable sort keeps the original order for equal scores
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .take(k)
        .filter(|(index, _)| !segments[*index].is_empty())
        .map(|(index, _)| segments[index].clone())
        .collect()
}

/// 分词：小写化并保留长度不小于2的字母数字词
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2)
        .map(|token| token.to_string())
        .collect()
}

/// 计算原始词频乘以逆文档频率的稠密向量
fn tfidf_vector(tokens: &[String], vocabulary: &BTreeMap<String, usize>, idf: &[f64]) -> Vec<f64> {
    let mut vector = vec![0.0_f64; vocabulary.len()];
    for token in tokens {
        if let Some(&index) = vocabulary.get(token) {
            vector[index] += 1.0;
        }
    }
    for (index, weight) in vector.iter_mut().enumerate() {
        *weight *= idf[index];
    }
    vector
}

/// 余弦相似度，零范数向量返回0.0
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
