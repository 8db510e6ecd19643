//! 输出文档模型
//!
//! 每次运行产出一份完整的 JSON 文档，整体覆盖上一次的输出

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Row;

/// 单次运行产出的 JSON 文档
///
/// 组装完成后不再修改，只写出一次
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    /// 生成时间（JST）
    pub generated_at: String,
    /// 对应的交易日
    pub date: String,
    /// 各榜单的来源与状态
    pub sources: Vec<SourceStatus>,
    /// 按榜单键分组的行数据
    pub items: BTreeMap<String, Vec<Row>>,
}

/// 单个榜单的来源记录
///
/// 抓取整体失败时 `error` 记录原因，数据照常输出空列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceStatus {
    /// 榜单键名
    pub key: String,
    /// 榜单首页地址
    pub url: String,
    /// 整体失败的原因
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Bundle {
    /// 组装输出文档
    pub fn new(
        generated_at: String,
        date: String,
        sources: Vec<SourceStatus>,
        items: BTreeMap<String, Vec<Row>>,
    ) -> Self {
        Self {
            generated_at,
            date,
            sources,
            items,
        }
    }

    /// 所有榜单的总行数
    pub fn total_rows(&self) -> usize {
        self.items.values().map(|rows| rows.len()).sum()
    }
}
