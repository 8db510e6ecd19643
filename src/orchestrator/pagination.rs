//! 翻页控制器 - 编排层
//!
//! ## 职责
//!
//! 在不知道总页数的前提下抓完一个榜单的所有页，并确定性地终止。
//!
//! ## 核心功能
//!
//! 1. **窗口切分**：页码按 concurrency 切成连续窗口（1..C、C+1..2C、…）
//! 2. **窗口内并发**：本窗口所有页同时请求，全部完成后才进入下一步
//! 3. **终止判定**：连续 empty_streak_threshold 个全空窗口后停止，
//!    另有 max_pages 硬上限防止站点永不返回空页
//! 4. **确定性合并**：结果按页码收进有序映射，最终按页码升序拼接，
//!    与各页的完成顺序无关
//! 5. **失败不致命**：单页失败按空页参与终止判定，原因记入失败列表
//!
//! ## 状态流转
//!
//! ```text
//! AwaitingWindow → DispatchingFetches → AwaitingAllInWindow → {Continue, Terminate}
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::models::{PageResult, Row};
use crate::services::PageFetcher;

/// 翻页参数
#[derive(Debug, Clone)]
pub struct PaginationOptions {
    /// 每个窗口并发请求的页数
    pub concurrency: usize,
    /// 连续空窗口达到此值后停止
    pub empty_streak_threshold: usize,
    /// 最多抓取的页数（硬上限）
    pub max_pages: usize,
    /// 窗口之间的礼貌等待
    pub window_delay: Duration,
}

impl PaginationOptions {
    /// 从配置构造翻页参数
    pub fn from_config(config: &Config) -> Self {
        Self {
            concurrency: config.concurrency.max(1),
            empty_streak_threshold: config.empty_streak_threshold.max(1),
            max_pages: config.max_pages.max(1),
            window_delay: Duration::from_millis(config.window_delay_ms),
        }
    }
}

/// 单页抓取失败记录
#[derive(Debug, Clone)]
pub struct PageFailure {
    /// 失败的页码
    pub page: usize,
    /// 失败原因
    pub cause: String,
}

/// 翻页抓取统计
#[derive(Debug, Default)]
pub struct PaginationStats {
    /// 发出的窗口数
    pub windows_issued: usize,
    /// 实际请求过的页数
    pub pages_probed: usize,
    /// 有数据的页数
    pub pages_with_rows: usize,
    /// 合并后的总行数
    pub total_rows: usize,
}

/// 翻页抓取结果
#[derive(Debug)]
pub struct PaginationOutcome {
    /// 按页码升序、页内原序合并后的行
    pub rows: Vec<Row>,
    /// 抓取统计
    pub stats: PaginationStats,
    /// 单页失败记录（不中断抓取，只供诊断）
    pub failures: Vec<PageFailure>,
}

/// 驱动一个榜单的全部翻页抓取
///
/// # 参数
/// - `fetcher`: 页面抓取能力
/// - `options`: 翻页参数
///
/// # 返回
/// 返回合并后的行、统计与失败记录；控制器本身不产生致命错误，
/// 最坏情况是输出不完整的行集合
pub async fn paginate(
    fetcher: Arc<dyn PageFetcher>,
    options: &PaginationOptions,
) -> PaginationOutcome {
    // 页码 → 该页的行。窗口内完成顺序随机，收进有序映射后
    // 统一按页码升序拼接，绝不能按完成顺序追加
    let mut pages_by_index: BTreeMap<usize, Vec<Row>> = BTreeMap::new();
    let mut failures: Vec<PageFailure> = Vec::new();
    let mut stats = PaginationStats::default();

    let mut empty_streak = 0usize;
    let mut next_page = 1usize;

    loop {
        let window_end = (next_page + options.concurrency - 1).min(options.max_pages);
        stats.windows_issued += 1;

        debug!("发出窗口 {}-{} 页", next_page, window_end);

        // 窗口内并发请求
        let pages: Vec<usize> = (next_page..=window_end).collect();
        let handles: Vec<_> = pages
            .iter()
            .map(|&page| {
                let fetcher = fetcher.clone();
                tokio::spawn(async move { fetcher.fetch_page(page).await })
            })
            .collect();

        // join 屏障：本窗口所有任务全部完成后才继续
        let results = join_all(handles).await;

        let mut window_has_rows = false;
        for (&page, result) in pages.iter().zip(results) {
            stats.pages_probed += 1;
            match result {
                Ok(Ok(PageResult::Rows(rows))) => {
                    window_has_rows = true;
                    stats.pages_with_rows += 1;
                    pages_by_index.insert(page, rows);
                }
                Ok(Ok(PageResult::Empty)) => {}
                Ok(Err(e)) => {
                    // 失败按空页参与终止判定，记录后继续
                    error!("第 {} 页抓取失败: {}", page, e);
                    failures.push(PageFailure {
                        page,
                        cause: e.to_string(),
                    });
                }
                Err(e) => {
                    error!("第 {} 页任务执行失败: {}", page, e);
                    failures.push(PageFailure {
                        page,
                        cause: e.to_string(),
                    });
                }
            }
        }

        // 空窗口计数：窗口内只要有一页有数据就清零
        if window_has_rows {
            empty_streak = 0;
        } else {
            empty_streak += 1;
            debug!("空窗口 {}/{}", empty_streak, options.empty_streak_threshold);
            if empty_streak >= options.empty_streak_threshold {
                info!("连续 {} 个空窗口，榜单翻完", empty_streak);
                break;
            }
        }

        if window_end >= options.max_pages {
            warn!("已达到硬页数上限 {}，停止翻页", options.max_pages);
            break;
        }
        next_page = window_end + 1;

        // 窗口之间的礼貌等待，只发生在协调任务里
        if !options.window_delay.is_zero() {
            tokio::time::sleep(options.window_delay).await;
        }
    }

    // 按页码升序合并
    let rows: Vec<Row> = pages_by_index.into_values().flatten().collect();
    stats.total_rows = rows.len();

    PaginationOutcome {
        rows,
        stats,
        failures,
    }
}
