//! # 暦・時刻
//!
//! UTC を基準にした時刻・暦の値オブジェクトと、期間の演算を提供する。
//!
//! ## 概念モデル
//!
//! - **Timestamp**: エポックからのミリ秒で表す時点
//! - **CalendarDay**: 暦上の 1 日（`YYYY-MM-DD`）
//! - **MonthOfYear**: 暦上の年月（`YYYY/MM`）
//! - **Day / Month / Year / DayOfWeek**: 暦の構成単位
//! - **Duration**: ミリ秒で表す時間の長さ
//! - **TimestampInterval**: 開始・終了を持つ期間
//! - **Hour**: 日付を持たない時刻（`HH:MM`）
//!
//! タイムゾーン・ロケールは扱わない。暦のフィールドはすべて UTC で算出する。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use koyomi_domain::time::{DayOfWeek, Timestamp, TimestampInterval};
//!
//! let interval = TimestampInterval::new(
//!     Timestamp::parse("2024-07-22")?,
//!     Timestamp::parse("2024-07-30")?,
//! )?;
//! assert_eq!(interval.total_days_of_week(DayOfWeek::Monday), 2);
//! # Ok(())
//! # }
//! ```

mod calendar_day;
mod day;
mod day_of_week;
mod duration;
mod hour;
mod month;
mod month_of_year;
mod timestamp;
mod timestamp_interval;
mod year;

pub use calendar_day::*;
pub use day::*;
pub use day_of_week::*;
pub use duration::*;
pub use hour::*;
pub use month::*;
pub use month_of_year::*;
pub use timestamp::*;
pub use timestamp_interval::*;
pub use year::*;
