//! # PTS Night Scrape
//!
//! 一个用于抓取夜间 PTS 榜单的 Rust 应用程序
//!
//! 定时运行：交易日夜间时段内，从站点的警戒榜单页抓取
//! 值上がり / 値下がり / 出来高三个榜单的所有分页，
//! 合并成一份带时间戳的 JSON 文档整体覆盖写出。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（reqwest::Client），只暴露能力
//! - `HttpClient` - 唯一的 client owner，提供 get_html() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个页面 / 文档
//! - `RankingFetcher` - 抓取并解析第 n 页能力（`PageFetcher` 接口）
//! - `TableParser` - HTML 表格抽行能力
//! - `BundleWriter` - 写 JSON 文件能力
//! - `trading_calendar` - 交易日历与运行时段判定
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个榜单"的完整处理流程
//! - `TargetFlow` - 流程编排（fetcher 构造 → 翻页 → 汇总）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/pagination` - 翻页控制器，窗口并发与终止判定
//! - `app` - 应用入口，时段检查、榜单遍历、文档组装与写出
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, FetchError, FileError};
pub use infrastructure::HttpClient;
pub use models::{Bundle, PageResult, RankingTarget, Row, SourceStatus, NIGHT_TARGETS};
pub use orchestrator::{paginate, PaginationOptions, PaginationOutcome};
pub use services::{PageFetcher, RankingFetcher};
pub use workflow::{TargetFlow, TargetOutcome};
