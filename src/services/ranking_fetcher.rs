//! 榜单页面抓取服务 - 业务能力层
//!
//! 只负责"抓取并解析第 n 页"能力，不关心窗口和终止

use async_trait::async_trait;
use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::HttpClient;
use crate::models::{PageResult, RankingTarget};
use crate::services::TableParser;

/// 页面抓取能力的抽象
///
/// 翻页控制器只依赖这个接口，测试中注入脚本化的假实现
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取指定页码
    ///
    /// # 参数
    /// - `page`: 页码（从 1 开始）
    ///
    /// # 返回
    /// 返回行数据或空页信号；网络 / 解析失败返回错误
    async fn fetch_page(&self, page: usize) -> AppResult<PageResult>;
}

/// Kabutan 榜单抓取服务
///
/// 职责：
/// - 拼接指定页码的地址
/// - 通过 HttpClient 取回 HTML
/// - 委托 TableParser 抽出行
/// - 不认识窗口 / 空窗口计数
pub struct RankingFetcher {
    http: HttpClient,
    parser: TableParser,
    target: RankingTarget,
    base_url: String,
}

impl RankingFetcher {
    /// 创建新的榜单抓取服务
    pub fn new(http: HttpClient, target: RankingTarget, base_url: &str) -> AppResult<Self> {
        Ok(Self {
            http,
            parser: TableParser::new()?,
            target,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait]
impl PageFetcher for RankingFetcher {
    async fn fetch_page(&self, page: usize) -> AppResult<PageResult> {
        let url = self.target.page_url(&self.base_url, page);

        debug!("{} 请求第 {} 页: {}", self.target, page, url);

        let html = self.http.get_html(&url).await?;
        let result = self.parser.parse(&html);

        match &result {
            PageResult::Rows(rows) => {
                debug!("{} 第 {} 页解析出 {} 行", self.target, page, rows.len());
            }
            PageResult::Empty => {
                debug!("{} 第 {} 页为空", self.target, page);
            }
        }

        Ok(result)
    }
}
