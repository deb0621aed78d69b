//! # 時間の長さ
//!
//! ミリ秒単位の符号付きの時間の長さ。
//!
//! ## 単位
//!
//! | 単位 | ミリ秒 |
//! |------|--------|
//! | 秒 | 1,000 |
//! | 分 | 60 秒 |
//! | 時間 | 60 分 |
//! | 日 | 24 時間 |
//! | 週 | 7 日 |
//! | 月（概算） | 30 日 |
//! | 年（概算） | 365 日 |

use chrono::TimeDelta;

use crate::{DomainError, value_object::ValueObject};

/// 1 秒のミリ秒数
pub const MILLISECONDS_PER_SECOND: i64 = 1_000;
/// 1 分のミリ秒数
pub const MILLISECONDS_PER_MINUTE: i64 = 60 * MILLISECONDS_PER_SECOND;
/// 1 時間のミリ秒数
pub const MILLISECONDS_PER_HOUR: i64 = 60 * MILLISECONDS_PER_MINUTE;
/// 1 日のミリ秒数
pub const MILLISECONDS_PER_DAY: i64 = 24 * MILLISECONDS_PER_HOUR;
/// 1 週のミリ秒数
pub const MILLISECONDS_PER_WEEK: i64 = 7 * MILLISECONDS_PER_DAY;
/// 概算の 1 か月（30 日）のミリ秒数
pub const MILLISECONDS_PER_APPROXIMATE_MONTH: i64 = 30 * MILLISECONDS_PER_DAY;
/// 概算の 1 年（365 日）のミリ秒数
pub const MILLISECONDS_PER_APPROXIMATE_YEAR: i64 = 365 * MILLISECONDS_PER_DAY;

/// 時間の長さ（値オブジェクト）
///
/// 合計（`total_*`）は単位換算した値を小数で返し、
/// 成分（`days` / `hours` / ...）は「日・時・分・秒・ミリ秒」の各桁を返す。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::time::Duration;
///
/// let duration = Duration::from_milliseconds(35_940_000);
/// assert_eq!(duration.hours(), 9);
/// assert_eq!(duration.minutes(), 59);
/// assert_eq!(duration.total_minutes(), 599.0);
///
/// let extended = duration.add(&Duration::from_minutes(1)?)?;
/// assert_eq!(extended.hours(), 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(i64);

impl Duration {
    /// 長さ 0
    pub const ZERO: Self = Self(0);

    /// ミリ秒から作成する
    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self(milliseconds)
    }

    /// 秒から作成する
    ///
    /// # エラー
    ///
    /// ミリ秒換算で i64 の範囲を超える場合は `DomainError::InvalidDuration` を返す。
    pub fn from_seconds(seconds: i64) -> Result<Self, DomainError> {
        Self::scaled(seconds, MILLISECONDS_PER_SECOND)
    }

    /// 分から作成する
    ///
    /// # エラー
    ///
    /// ミリ秒換算で i64 の範囲を超える場合は `DomainError::InvalidDuration` を返す。
    pub fn from_minutes(minutes: i64) -> Result<Self, DomainError> {
        Self::scaled(minutes, MILLISECONDS_PER_MINUTE)
    }

    /// 時間から作成する
    ///
    /// # エラー
    ///
    /// ミリ秒換算で i64 の範囲を超える場合は `DomainError::InvalidDuration` を返す。
    pub fn from_hours(hours: i64) -> Result<Self, DomainError> {
        Self::scaled(hours, MILLISECONDS_PER_HOUR)
    }

    /// 日数から作成する
    ///
    /// # エラー
    ///
    /// ミリ秒換算で i64 の範囲を超える場合は `DomainError::InvalidDuration` を返す。
    pub fn from_days(days: i64) -> Result<Self, DomainError> {
        Self::scaled(days, MILLISECONDS_PER_DAY)
    }

    /// chrono の `TimeDelta` から作成する（ミリ秒未満は切り捨て）
    pub fn from_time_delta(delta: TimeDelta) -> Self {
        Self(delta.num_milliseconds())
    }

    fn scaled(amount: i64, unit_millis: i64) -> Result<Self, DomainError> {
        amount
            .checked_mul(unit_millis)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDuration(format!("{amount} × {unit_millis} ms")))
    }

    /// 内部のミリ秒を取得する
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// 長さ 0 か
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// chrono の `TimeDelta` に変換する
    ///
    /// # エラー
    ///
    /// `TimeDelta` の範囲外の場合は `DomainError::Validation` を返す。
    pub fn to_time_delta(self) -> Result<TimeDelta, DomainError> {
        TimeDelta::try_milliseconds(self.0).ok_or_else(|| {
            DomainError::Validation(format!("{} ms は TimeDelta の範囲外です", self.0))
        })
    }

    /// 他の時間の長さを加える
    ///
    /// # エラー
    ///
    /// 結果が i64 の範囲を超える場合は `DomainError::InvalidDuration` を返す。
    pub fn add(&self, other: &Self) -> Result<Self, DomainError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDuration(format!("{} ms + {} ms", self.0, other.0)))
    }

    /// 他の時間の長さを引く
    ///
    /// # エラー
    ///
    /// 結果が i64 の範囲を超える場合は `DomainError::InvalidDuration` を返す。
    pub fn subtract(&self, other: &Self) -> Result<Self, DomainError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDuration(format!("{} ms - {} ms", self.0, other.0)))
    }

    // --- 合計 ---

    /// 合計日数
    pub fn total_days(&self) -> f64 {
        self.total_in(MILLISECONDS_PER_DAY)
    }

    /// 合計時間
    pub fn total_hours(&self) -> f64 {
        self.total_in(MILLISECONDS_PER_HOUR)
    }

    /// 合計分
    pub fn total_minutes(&self) -> f64 {
        self.total_in(MILLISECONDS_PER_MINUTE)
    }

    /// 合計秒
    pub fn total_seconds(&self) -> f64 {
        self.total_in(MILLISECONDS_PER_SECOND)
    }

    /// 合計ミリ秒
    pub fn total_milliseconds(&self) -> f64 {
        self.0 as f64
    }

    /// 合計週
    pub fn total_weeks(&self) -> f64 {
        self.total_in(MILLISECONDS_PER_WEEK)
    }

    /// 合計月（30 日換算）
    pub fn total_approximate_months(&self) -> f64 {
        self.total_in(MILLISECONDS_PER_APPROXIMATE_MONTH)
    }

    /// 合計年（365 日換算）
    pub fn total_approximate_years(&self) -> f64 {
        self.total_in(MILLISECONDS_PER_APPROXIMATE_YEAR)
    }

    fn total_in(&self, unit_millis: i64) -> f64 {
        self.0 as f64 / unit_millis as f64
    }

    // --- 成分 ---

    /// 日の成分
    pub fn days(&self) -> i64 {
        self.0.div_euclid(MILLISECONDS_PER_DAY)
    }

    /// 時の成分（0〜23）
    pub fn hours(&self) -> i64 {
        self.0.div_euclid(MILLISECONDS_PER_HOUR).rem_euclid(24)
    }

    /// 分の成分（0〜59）
    pub fn minutes(&self) -> i64 {
        self.0.div_euclid(MILLISECONDS_PER_MINUTE).rem_euclid(60)
    }

    /// 秒の成分（0〜59）
    pub fn seconds(&self) -> i64 {
        self.0.div_euclid(MILLISECONDS_PER_SECOND).rem_euclid(60)
    }

    /// ミリ秒の成分（0〜999）
    pub fn milliseconds(&self) -> i64 {
        self.0.rem_euclid(MILLISECONDS_PER_SECOND)
    }
}

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        Self::from_time_delta(delta)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ValueObject for Duration {
    type Primitive = i64;

    const NAME: &'static str = "Duration";

    fn value_of(&self) -> i64 {
        self.0
    }

    fn from_primitive(primitive: i64) -> Result<Self, DomainError> {
        Ok(Self(primitive))
    }
}
