//! 交易日历与运行时段判定 - 业务能力层
//!
//! 夜间 PTS 时段只出现在交易日的晚上，非交易日直接跳过本次运行。
//! 判定是纯函数，"现在几点"由调用方传入，模块本身不读时钟状态。

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc, Weekday};
use std::collections::HashSet;

/// 夜间 PTS 时段的开始时刻（JST 的小时）
const NIGHT_SESSION_START_HOUR: u32 = 17;

/// 交易日历抽象
///
/// 测试中注入固定日历，生产中使用 `JpCalendar`
pub trait TradingCalendar: Send + Sync {
    /// 指定日期是否为交易日
    fn is_business_day(&self, date: NaiveDate) -> bool;
}

/// 日本市场交易日历
///
/// 职责：
/// - 周末 / 祝日 / 年末年始休市判定
/// - 祝日表按年度静态维护，需要时增加年份
pub struct JpCalendar {
    holidays: HashSet<NaiveDate>,
}

impl JpCalendar {
    /// 创建内置祝日表的日历
    pub fn new() -> Self {
        let mut calendar = Self {
            holidays: HashSet::new(),
        };
        calendar.load_jp_holidays_2025();
        calendar.load_jp_holidays_2026();
        calendar
    }

    /// 2025 年日本祝日（振替休日含む）
    pub fn load_jp_holidays_2025(&mut self) {
        self.insert_holidays(
            2025,
            &[
                (1, 1),   // 元日
                (1, 13),  // 成人の日
                (2, 11),  // 建国記念の日
                (2, 23),  // 天皇誕生日
                (2, 24),  // 振替休日
                (3, 20),  // 春分の日
                (4, 29),  // 昭和の日
                (5, 3),   // 憲法記念日
                (5, 4),   // みどりの日
                (5, 5),   // こどもの日
                (5, 6),   // 振替休日
                (7, 21),  // 海の日
                (8, 11),  // 山の日
                (9, 15),  // 敬老の日
                (9, 23),  // 秋分の日
                (10, 13), // スポーツの日
                (11, 3),  // 文化の日
                (11, 23), // 勤労感謝の日
                (11, 24), // 振替休日
            ],
        );
    }

    /// 2026 年日本祝日（振替休日含む）
    pub fn load_jp_holidays_2026(&mut self) {
        self.insert_holidays(
            2026,
            &[
                (1, 1),   // 元日
                (1, 12),  // 成人の日
                (2, 11),  // 建国記念の日
                (2, 23),  // 天皇誕生日
                (3, 20),  // 春分の日
                (4, 29),  // 昭和の日
                (5, 3),   // 憲法記念日
                (5, 4),   // みどりの日
                (5, 5),   // こどもの日
                (5, 6),   // 振替休日
                (7, 20),  // 海の日
                (8, 11),  // 山の日
                (9, 21),  // 敬老の日
                (9, 22),  // 国民の休日
                (9, 23),  // 秋分の日
                (10, 12), // スポーツの日
                (11, 3),  // 文化の日
                (11, 23), // 勤労感謝の日
            ],
        );
    }

    fn insert_holidays(&mut self, year: i32, dates: &[(u32, u32)]) {
        for &(month, day) in dates {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                self.holidays.insert(date);
            }
        }
    }
}

impl Default for JpCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl TradingCalendar for JpCalendar {
    fn is_business_day(&self, date: NaiveDate) -> bool {
        // 周末休市
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }

        // 年末年始休市（12/31〜1/3）
        let (month, day) = (date.month(), date.day());
        if (month == 12 && day == 31) || (month == 1 && day <= 3) {
            return false;
        }

        !self.holidays.contains(&date)
    }
}

/// 取得当前 JST 时刻
///
/// 站点与输出的时间基准固定为 JST，不随运行环境时区变化
pub fn jst_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst_offset())
}

fn jst_offset() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

/// 夜间交易时段判定
///
/// # 参数
/// - `now`: 当前 JST 时刻
/// - `calendar`: 交易日历
///
/// # 返回
/// 交易日的 17:00〜23:59（JST）返回 true
pub fn is_eligible_window(now: DateTime<FixedOffset>, calendar: &dyn TradingCalendar) -> bool {
    if !calendar.is_business_day(now.date_naive()) {
        return false;
    }

    now.hour() >= NIGHT_SESSION_START_HOUR
}
