//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责翻页调度和并发控制，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `pagination` - 翻页控制器
//! - 把页码切成固定大小的连续窗口
//! - 窗口内并发请求、窗口间同步等待（join 屏障）
//! - 用连续空窗口计数判定榜单翻完
//! - 结果按页码升序合并，输出统计与失败记录
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 Vec<RankingTarget>)
//!     ↓
//! workflow::TargetFlow (处理单个榜单)
//!     ↓
//! orchestrator::pagination (处理 Vec<页码>)
//!     ↓
//! services (能力层：fetch / parse / write)
//!     ↓
//! infrastructure (基础设施：HttpClient)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：控制器只管窗口和终止，不解析 HTML
//! 2. **结果确定性**：完成顺序不影响输出顺序
//! 3. **失败不致命**：单页失败按空页处理并记录
//! 4. **无业务逻辑**：只做调度和统计

pub mod pagination;

// 重新导出主要类型
pub use pagination::{
    paginate, PageFailure, PaginationOptions, PaginationOutcome, PaginationStats,
};
