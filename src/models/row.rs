//! 榜单行数据模型
//!
//! 字段一律保持字符串原样，数值格式化交给前端处理

use serde::{Deserialize, Serialize};

/// 榜单中的一行（一只股票）
///
/// 列的并排可能随站点改版漂移，主要字段按位置提取，
/// 多出来的尾部列原样放进 `extras`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// 证券代码
    pub code: String,
    /// 股票名称
    pub name: String,
    /// 市场
    pub market: String,
    /// 现在值
    pub price: String,
    /// 前日比（金额）
    pub diff: String,
    /// 前日比（百分比）
    pub diff_rate: String,
    /// 出来高
    pub volume: String,
    /// 时刻
    pub time: String,
    /// 站点新增的尾部列（PER/PBR 等），原样透传
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
}

/// 单页抓取结果
///
/// 要么是非空的行序列，要么是空页信号（页面上没有表格，
/// 或者表格没有数据行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    /// 非空的行序列
    Rows(Vec<Row>),
    /// 空页
    Empty,
}

impl PageResult {
    /// 从行列表构造，空列表归一化为 `Empty`
    pub fn from_rows(rows: Vec<Row>) -> Self {
        if rows.is_empty() {
            PageResult::Empty
        } else {
            PageResult::Rows(rows)
        }
    }

    /// 是否为空页
    pub fn is_empty(&self) -> bool {
        matches!(self, PageResult::Empty)
    }

    /// 取出行列表（空页返回空 Vec）
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            PageResult::Rows(rows) => rows,
            PageResult::Empty => Vec::new(),
        }
    }
}
