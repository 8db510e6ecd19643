/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 每个窗口并发请求的页数
    pub concurrency: usize,
    /// 连续空窗口达到此值后停止翻页
    pub empty_streak_threshold: usize,
    /// 单个榜单最多抓取的页数（防止死循环的硬上限）
    pub max_pages: usize,
    /// 窗口之间的礼貌等待（毫秒）
    pub window_delay_ms: u64,
    /// 榜单之间的礼貌等待（毫秒）
    pub target_delay_ms: u64,
    /// 站点根地址
    pub base_url: String,
    /// 输出 JSON 文件路径
    pub output_path: String,
    /// HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 请求头中的 User-Agent
    pub user_agent: String,
    /// 是否跳过交易时段检查（调试用）
    pub skip_window_gate: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: 4,
            empty_streak_threshold: 2,
            max_pages: 50,
            window_delay_ms: 1000,
            target_delay_ms: 1000,
            base_url: "https://kabutan.jp".to_string(),
            output_path: "public/pts.json".to_string(),
            request_timeout_secs: 30,
            user_agent: "Mozilla/5.0 (compatible; pts-bot/1.0; +https://github.com/yourname/pts-night)"
                .to_string(),
            skip_window_gate: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            concurrency: std::env::var("PTS_CONCURRENCY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.concurrency),
            empty_streak_threshold: std::env::var("PTS_EMPTY_STREAK_THRESHOLD").ok().and_then(|v| v.parse().ok()).unwrap_or(default.empty_streak_threshold),
            max_pages: std::env::var("PTS_MAX_PAGES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_pages),
            window_delay_ms: std::env::var("PTS_WINDOW_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.window_delay_ms),
            target_delay_ms: std::env::var("PTS_TARGET_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.target_delay_ms),
            base_url: std::env::var("PTS_BASE_URL").unwrap_or(default.base_url),
            output_path: std::env::var("PTS_OUTPUT_PATH").unwrap_or(default.output_path),
            request_timeout_secs: std::env::var("PTS_REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            user_agent: std::env::var("PTS_USER_AGENT").unwrap_or(default.user_agent),
            skip_window_gate: std::env::var("PTS_SKIP_WINDOW_GATE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.skip_window_gate),
            verbose_logging: std::env::var("PTS_VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sane() {
        let config = Config::default();
        assert!(config.concurrency > 0);
        assert!(config.empty_streak_threshold >= 1);
        assert!(config.max_pages >= config.concurrency);
        assert!(config.output_path.ends_with(".json"));
    }
}
