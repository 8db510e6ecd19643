//! 抓取目标定义
//!
//! 站点的榜单构成可能变化，需要时在 `NIGHT_TARGETS` 中增减

use std::fmt::Display;

/// 抓取目标（一个警戒榜单）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingTarget {
    /// 输出 JSON 中的键名
    pub key: &'static str,
    /// 站点上的路径
    pub path: &'static str,
}

/// 夜间 PTS 的三个警戒榜单
pub const NIGHT_TARGETS: &[RankingTarget] = &[
    RankingTarget {
        key: "night_up",
        path: "/warning/pts_night_price_increase",
    },
    RankingTarget {
        key: "night_down",
        path: "/warning/pts_night_price_decrease",
    },
    RankingTarget {
        key: "night_vol",
        path: "/warning/pts_night_volume",
    },
];

impl RankingTarget {
    /// 榜单首页地址（不带页码参数）
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }

    /// 指定页码的地址
    pub fn page_url(&self, base_url: &str, page: usize) -> String {
        format!("{}{}?page={}", base_url, self.path, page)
    }
}

impl Display for RankingTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[榜单 {}]", self.key)
    }
}
