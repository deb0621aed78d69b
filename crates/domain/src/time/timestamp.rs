//! # タイムスタンプ
//!
//! エポックからのミリ秒で表す UTC の時点。
//! 暦のフィールド（年・月・日・曜日など）はすべて UTC で算出する。

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};

use super::{
    CalendarDay, Day, DayOfWeek, Duration, Month, MonthOfYear, Year,
    duration::{
        MILLISECONDS_PER_APPROXIMATE_MONTH, MILLISECONDS_PER_APPROXIMATE_YEAR,
        MILLISECONDS_PER_DAY, MILLISECONDS_PER_HOUR, MILLISECONDS_PER_MINUTE,
        MILLISECONDS_PER_SECOND, MILLISECONDS_PER_WEEK,
    },
};
use crate::{
    DomainError,
    clock::{Clock, SystemClock},
    value_object::ValueObject,
};

/// タイムスタンプの生成元
///
/// [`Timestamp::new`] が受け付ける入力の種類。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimestampValue<'a> {
    /// 既存のタイムスタンプ
    Timestamp(Timestamp),
    /// chrono の日時
    DateTime(DateTime<Utc>),
    /// エポックミリ秒
    Millis(i64),
    /// 日時文字列
    Text(&'a str),
}

impl From<Timestamp> for TimestampValue<'_> {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for TimestampValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<i64> for TimestampValue<'_> {
    fn from(value: i64) -> Self {
        Self::Millis(value)
    }
}

impl<'a> From<&'a str> for TimestampValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// タイムスタンプ（値オブジェクト）
///
/// UTC の時点をミリ秒精度で保持する。ミリ秒未満は切り捨てる。
///
/// # 不変条件
///
/// - 常に chrono で表現可能な範囲内の有限な時点
/// - ミリ秒未満の端数を持たない
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::time::{DayOfWeek, Month, Timestamp};
///
/// let ts = Timestamp::new(1_721_606_400_000_i64)?;
/// assert_eq!(ts.month(), Month::July);
/// assert_eq!(ts.day_of_week(), DayOfWeek::Monday);
///
/// let next = ts.add_days(1)?;
/// assert_eq!(next.to_millis(), 1_721_692_800_000);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// 任意の入力から生成する
    ///
    /// # エラー
    ///
    /// - 文字列が日時として解釈できない場合は `DomainError::InvalidTimestamp` を返す
    /// - ミリ秒が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す
    pub fn new<'a>(value: impl Into<TimestampValue<'a>>) -> Result<Self, DomainError> {
        match value.into() {
            TimestampValue::Timestamp(timestamp) => Ok(timestamp),
            TimestampValue::DateTime(datetime) => Ok(Self::from(datetime)),
            TimestampValue::Millis(millis) => Self::from_millis(millis),
            TimestampValue::Text(text) => Self::parse(text),
        }
    }

    /// システム時刻の現在時点
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// 指定した Clock の現在時点
    pub fn now_with(clock: &impl Clock) -> Self {
        clock.now()
    }

    /// エポックミリ秒から生成する
    ///
    /// # エラー
    ///
    /// 表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn from_millis(millis: i64) -> Result<Self, DomainError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidTimestamp(millis.to_string()))
    }

    /// エポック秒から生成する
    ///
    /// # エラー
    ///
    /// 表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn from_seconds(seconds: i64) -> Result<Self, DomainError> {
        seconds
            .checked_mul(MILLISECONDS_PER_SECOND)
            .ok_or_else(|| DomainError::InvalidTimestamp(format!("{seconds}s")))
            .and_then(Self::from_millis)
    }

    /// 日時文字列を解釈する
    ///
    /// 受け付ける形式:
    ///
    /// - RFC 3339（オフセット付き、UTC に変換）
    /// - `YYYY-MM-DDTHH:MM:SS[.fff]`（UTC とみなす）
    /// - `YYYY-MM-DD`（UTC の 0 時）
    ///
    /// # エラー
    ///
    /// いずれの形式にも一致しない場合は `DomainError::InvalidTimestamp` を返す。
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let text = text.trim();

        if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self::from(datetime.with_timezone(&Utc)));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Ok(Self::from(naive.and_utc()));
            }
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(|date| Self::from(date.and_time(NaiveTime::MIN).and_utc()))
            .map_err(|_| DomainError::InvalidTimestamp(text.to_string()))
    }

    // --- 比較 ---

    /// 他の時点より前か
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// 他の時点より後か
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// 他の時点以前か
    pub fn is_before_or_equal(&self, other: &Self) -> bool {
        self <= other
    }

    /// 他の時点以後か
    pub fn is_after_or_equal(&self, other: &Self) -> bool {
        self >= other
    }

    /// 他の時点とミリ秒単位で一致するか
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    /// 同じ暦日か
    pub fn is_same_day(&self, other: &Self) -> bool {
        self.calendar_day() == other.calendar_day()
    }

    /// 同じ年月か
    pub fn is_same_month(&self, other: &Self) -> bool {
        self.month_of_year() == other.month_of_year()
    }

    /// 同じ年か
    pub fn is_same_year(&self, other: &Self) -> bool {
        self.year() == other.year()
    }

    // --- 暦のフィールド（UTC） ---

    /// 日
    pub fn day(&self) -> Day {
        Day::from_calendar(self.0.day())
    }

    /// 月
    pub fn month(&self) -> Month {
        Month::from_calendar(self.0.month0())
    }

    /// 年
    pub fn year(&self) -> Year {
        Year::new(i64::from(self.0.year()))
    }

    /// 時（0〜23）
    pub fn hours(&self) -> u32 {
        self.0.hour()
    }

    /// 分（0〜59）
    pub fn minutes(&self) -> u32 {
        self.0.minute()
    }

    /// 秒（0〜59）
    pub fn seconds(&self) -> u32 {
        self.0.second()
    }

    /// ミリ秒（0〜999）
    pub fn milliseconds(&self) -> u32 {
        self.0.timestamp_subsec_millis()
    }

    /// 曜日
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_timestamp(*self)
    }

    /// 暦日
    pub fn calendar_day(&self) -> CalendarDay {
        CalendarDay::from_timestamp(*self)
    }

    /// 年月
    pub fn month_of_year(&self) -> MonthOfYear {
        MonthOfYear::from_timestamp(*self)
    }

    // --- 演算 ---

    /// ミリ秒を加算する（負数で減算）
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_milliseconds(&self, millis: i64) -> Result<Self, DomainError> {
        TimeDelta::try_milliseconds(millis)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or_else(|| DomainError::InvalidTimestamp(format!("{self} + {millis}ms")))
    }

    /// 秒を加算する
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_seconds(&self, seconds: i64) -> Result<Self, DomainError> {
        self.add_units(seconds, MILLISECONDS_PER_SECOND)
    }

    /// 分を加算する
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_minutes(&self, minutes: i64) -> Result<Self, DomainError> {
        self.add_units(minutes, MILLISECONDS_PER_MINUTE)
    }

    /// 時間を加算する
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_hours(&self, hours: i64) -> Result<Self, DomainError> {
        self.add_units(hours, MILLISECONDS_PER_HOUR)
    }

    /// 日数（24 時間単位）を加算する
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_days(&self, days: i64) -> Result<Self, DomainError> {
        self.add_units(days, MILLISECONDS_PER_DAY)
    }

    /// 週（7 日単位）を加算する
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_weeks(&self, weeks: i64) -> Result<Self, DomainError> {
        self.add_units(weeks, MILLISECONDS_PER_WEEK)
    }

    /// 概算の月（30 日単位）を加算する
    ///
    /// 暦上の月末処理は行わない。
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_approximate_months(&self, months: i64) -> Result<Self, DomainError> {
        self.add_units(months, MILLISECONDS_PER_APPROXIMATE_MONTH)
    }

    /// 概算の年（365 日単位）を加算する
    ///
    /// 閏年は考慮しない。
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_approximate_years(&self, years: i64) -> Result<Self, DomainError> {
        self.add_units(years, MILLISECONDS_PER_APPROXIMATE_YEAR)
    }

    /// 時間の長さを加算する
    ///
    /// # エラー
    ///
    /// 結果が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す。
    pub fn add_duration(&self, duration: Duration) -> Result<Self, DomainError> {
        self.add_milliseconds(duration.as_millis())
    }

    /// 分・秒・ミリ秒を 0 にした時点
    pub fn to_exact_hour(self) -> Self {
        let truncated = self
            .0
            .with_minute(0)
            .and_then(|dt| dt.with_second(0))
            .and_then(|dt| dt.with_nanosecond(0))
            .unwrap_or(self.0);
        Self(truncated)
    }

    fn add_units(&self, amount: i64, unit_millis: i64) -> Result<Self, DomainError> {
        amount
            .checked_mul(unit_millis)
            .ok_or_else(|| {
                DomainError::InvalidTimestamp(format!("{self} + {amount} x {unit_millis}ms"))
            })
            .and_then(|millis| self.add_milliseconds(millis))
    }

    // --- 変換 ---

    /// エポックミリ秒
    pub fn to_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// エポック秒（四捨五入）
    pub fn to_seconds(self) -> i64 {
        (self.to_millis() + MILLISECONDS_PER_SECOND / 2).div_euclid(MILLISECONDS_PER_SECOND)
    }

    /// chrono の日時
    pub fn to_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    /// ミリ秒未満を切り捨てて変換する
    fn from(datetime: DateTime<Utc>) -> Self {
        let nanos = datetime.nanosecond();
        Self(
            datetime
                .with_nanosecond(nanos - nanos % 1_000_000)
                .unwrap_or(datetime),
        )
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = DomainError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = DomainError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_millis())
    }
}

impl ValueObject for Timestamp {
    type Primitive = i64;

    const NAME: &'static str = "Timestamp";

    fn value_of(&self) -> i64 {
        self.to_millis()
    }

    fn from_primitive(primitive: i64) -> Result<Self, DomainError> {
        Self::from_millis(primitive)
    }
}
