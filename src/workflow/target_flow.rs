//! 榜单处理流程 - 流程层
//!
//! 核心职责：定义"一个榜单"的完整处理流程
//!
//! 流程顺序：
//! 1. 构造该榜单的抓取器
//! 2. 翻页控制器抓完所有页
//! 3. 汇总行数据、统计与来源记录

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::infrastructure::HttpClient;
use crate::models::{RankingTarget, Row, SourceStatus};
use crate::orchestrator::{paginate, PaginationOptions, PaginationStats};
use crate::services::{PageFetcher, RankingFetcher};

/// 榜单处理结果
#[derive(Debug)]
pub struct TargetOutcome {
    /// 处理的榜单
    pub target: RankingTarget,
    /// 按页码升序合并后的行
    pub rows: Vec<Row>,
    /// 输出文档用的来源记录
    pub source: SourceStatus,
    /// 翻页统计
    pub stats: PaginationStats,
}

/// 榜单处理流程
///
/// - 编排单个榜单的完整抓取流程
/// - 不持有任何网络资源（HttpClient 可廉价克隆）
/// - 只依赖业务能力（services）和翻页控制器
pub struct TargetFlow {
    http: HttpClient,
    options: PaginationOptions,
    base_url: String,
    verbose_logging: bool,
}

impl TargetFlow {
    /// 创建新的榜单处理流程
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self {
            http,
            options: PaginationOptions::from_config(config),
            base_url: config.base_url.clone(),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 处理一个榜单
    ///
    /// # 参数
    /// - `target`: 要抓取的榜单
    ///
    /// # 返回
    /// 返回该榜单的行数据与来源记录；整个榜单一行都没拿到且
    /// 存在失败时，原因写进来源记录，不让整次运行中断
    pub async fn run(&self, target: RankingTarget) -> Result<TargetOutcome> {
        info!("{} 🔍 开始翻页抓取...", target);

        let fetcher: Arc<dyn PageFetcher> =
            Arc::new(RankingFetcher::new(self.http.clone(), target, &self.base_url)?);

        let outcome = paginate(fetcher, &self.options).await;

        info!(
            "{} ✓ 抓取完成: {} 页中 {} 页有数据，共 {} 行",
            target,
            outcome.stats.pages_probed,
            outcome.stats.pages_with_rows,
            outcome.stats.total_rows
        );

        if !outcome.failures.is_empty() {
            warn!("{} ⚠️ {} 页抓取失败", target, outcome.failures.len());
            if self.verbose_logging {
                for failure in &outcome.failures {
                    warn!("{} 第 {} 页: {}", target, failure.page, failure.cause);
                }
            }
        }

        // 一行都没拿到且有失败 → 视为榜单整体失败，记录第一个原因
        let error = if outcome.rows.is_empty() && !outcome.failures.is_empty() {
            outcome.failures.first().map(|f| f.cause.clone())
        } else {
            None
        };

        Ok(TargetOutcome {
            target,
            rows: outcome.rows,
            source: SourceStatus {
                key: target.key.to_string(),
                url: target.url(&self.base_url),
                error,
            },
            stats: outcome.stats,
        })
    }
}
