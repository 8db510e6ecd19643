//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次完整的抓取运行。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、构建 HttpClient
//! 2. **运行时段检查**：开始时调用一次交易时段判定，非时段直接跳过
//! 3. **榜单遍历**：依次处理每个夜间榜单，榜单间礼貌等待
//! 4. **文档组装**：把各榜单的行与来源记录组装成 Bundle
//! 5. **结果写出**：整体覆盖写出 JSON 文件
//! 6. **全局统计**：汇总所有榜单的抓取结果

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::infrastructure::HttpClient;
use crate::models::{Bundle, RankingTarget, SourceStatus, NIGHT_TARGETS};
use crate::services::{is_eligible_window, jst_now, BundleWriter, JpCalendar};
use crate::workflow::{TargetFlow, TargetOutcome};

/// 应用主结构
pub struct App {
    config: Config,
    http: HttpClient,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let http = HttpClient::new(&config)?;

        Ok(Self { config, http })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 运行时段检查：只在交易日的夜间时段抓取
        if !self.config.skip_window_gate {
            let now = jst_now();
            let calendar = JpCalendar::new();
            if !is_eligible_window(now, &calendar) {
                info!(
                    "⏸ 当前不在夜间交易时段（JST {}），本次运行跳过",
                    now.format("%Y-%m-%d %H:%M")
                );
                return Ok(());
            }
        }

        // 处理所有榜单
        let outcomes = self.process_all_targets().await;

        // 组装并写出输出文档
        let bundle = assemble_bundle(outcomes);
        BundleWriter::new(&self.config).write(&bundle).await?;

        print_final_stats(&bundle, &self.config);

        Ok(())
    }

    /// 依次处理所有榜单
    async fn process_all_targets(&self) -> Vec<TargetOutcome> {
        let flow = TargetFlow::new(self.http.clone(), &self.config);
        let mut outcomes = Vec::new();

        for (idx, target) in NIGHT_TARGETS.iter().enumerate() {
            log_target_start(idx + 1, NIGHT_TARGETS.len(), target);

            match flow.run(*target).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    // 单个榜单整体失败不中断运行，输出里留下原因
                    error!("{} ❌ 处理过程中发生错误: {}", target, e);
                    outcomes.push(TargetOutcome {
                        target: *target,
                        rows: Vec::new(),
                        source: SourceStatus {
                            key: target.key.to_string(),
                            url: target.url(&self.config.base_url),
                            error: Some(e.to_string()),
                        },
                        stats: Default::default(),
                    });
                }
            }

            // 榜单之间的礼貌等待
            if idx + 1 < NIGHT_TARGETS.len() && self.config.target_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.target_delay_ms)).await;
            }
        }

        outcomes
    }
}

/// 把各榜单的结果组装成输出文档
fn assemble_bundle(outcomes: Vec<TargetOutcome>) -> Bundle {
    let now = jst_now();
    let mut sources = Vec::new();
    let mut items = BTreeMap::new();

    for outcome in outcomes {
        sources.push(outcome.source);
        items.insert(outcome.target.key.to_string(), outcome.rows);
    }

    Bundle::new(
        format!("{} JST", now.format("%Y-%m-%d %H:%M:%S")),
        now.format("%Y-%m-%d").to_string(),
        sources,
        items,
    )
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 夜间PTS榜单抓取");
    info!("📊 窗口并发数: {}", config.concurrency);
    info!("📄 输出文件: {}", config.output_path);
    info!("{}", "=".repeat(60));
}

fn log_target_start(num: usize, total: usize, target: &RankingTarget) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 个榜单 {}", num, total, target);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(bundle: &Bundle, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部抓取完成统计");
    info!("完成时间: {}", bundle.generated_at);
    info!("{}", "=".repeat(60));
    for source in &bundle.sources {
        let count = bundle.items.get(&source.key).map_or(0, Vec::len);
        match &source.error {
            None => info!("✅ {}: {} 行", source.key, count),
            Some(e) => info!("❌ {}: {}", source.key, e),
        }
    }
    info!("合计 {} 行", bundle.total_rows());
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", config.output_path);
}
