pub mod bundle_writer;
pub mod ranking_fetcher;
pub mod table_parser;
pub mod trading_calendar;

pub use bundle_writer::BundleWriter;
pub use ranking_fetcher::{PageFetcher, RankingFetcher};
pub use table_parser::TableParser;
pub use trading_calendar::{is_eligible_window, jst_now, JpCalendar, TradingCalendar};
