//! HTTP 客户端 - 基础设施层
//!
//! 持有唯一的 reqwest::Client 资源，只暴露"取 HTML"的能力

use std::time::Duration;

use crate::config::Config;
use crate::error::FetchError;

/// HTTP 客户端
///
/// 职责：
/// - 持有唯一的 reqwest::Client 资源
/// - 暴露 get_html() 能力
/// - 不认识榜单 / 页码
/// - 不处理业务流程
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// 创建新的 HTTP 客户端
    ///
    /// 超时与 User-Agent 来自配置，站点规约要求带上可识别的 UA
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|source| FetchError::ClientBuildFailed { source })?;

        Ok(Self { client })
    }

    /// 请求页面并返回 HTML 文本
    ///
    /// # 参数
    /// - `url`: 完整的页面地址
    ///
    /// # 返回
    /// 返回响应正文（UTF-8 文本）
    pub async fn get_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::bad_status(url, status.as_u16()));
        }

        response.text().await.map_err(|source| FetchError::BodyReadFailed {
            url: url.to_string(),
            source,
        })
    }
}
