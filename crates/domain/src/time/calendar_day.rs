//! # 暦日
//!
//! 年・月・日の組で表す暦上の 1 日。正規形は `YYYY-MM-DD`（ゼロ埋め）。
//!
//! ## 設計方針
//!
//! - **形式チェックが先**: 文字列は `^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$` に一致しなければ、
//!   日付として解釈できても `DomainError::InvalidDayFormat` にする
//! - **実在する日付のみ**: 2 月 30 日のような日付は `DomainError::InvalidDay`
//! - **UTC 基準**: タイムスタンプからの変換・タイムスタンプへの変換は UTC の 0 時

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use regex::Regex;

use super::{Day, DayOfWeek, Month, MonthOfYear, Timestamp, Year};
use crate::{
    DomainError,
    clock::{Clock, SystemClock},
    value_object::ValueObject,
};

// `\d` は Unicode の数字にも一致するため ASCII に限定する
static DAY_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})$")
        .expect("暦日の正規表現はコンパイル可能")
});

/// 暦日の生成元
///
/// [`CalendarDay::new`] が受け付ける入力の種類。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalendarDayValue<'a> {
    /// `YYYY-MM-DD` 形式の文字列
    Text(&'a str),
    /// chrono の日時
    DateTime(DateTime<Utc>),
    /// エポックミリ秒
    Millis(f64),
    /// タイムスタンプ
    Timestamp(Timestamp),
}

impl<'a> From<&'a str> for CalendarDayValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for CalendarDayValue<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<f64> for CalendarDayValue<'_> {
    fn from(value: f64) -> Self {
        Self::Millis(value)
    }
}

impl From<Timestamp> for CalendarDayValue<'_> {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

/// 暦日（値オブジェクト）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::time::{CalendarDay, DayOfWeek};
///
/// let day = CalendarDay::parse("2025-1-5")?;
/// assert_eq!(day.to_string(), "2025-01-05");
/// assert_eq!(day.day_of_week(), DayOfWeek::Sunday);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// 任意の入力から生成する
    ///
    /// # エラー
    ///
    /// - 文字列が `YYYY-MM-DD` 形式でない場合は `DomainError::InvalidDayFormat` を返す
    /// - 実在しない日付・非有限数の場合は `DomainError::InvalidDay` を返す
    pub fn new<'a>(value: impl Into<CalendarDayValue<'a>>) -> Result<Self, DomainError> {
        match value.into() {
            CalendarDayValue::Text(text) => Self::parse(text),
            CalendarDayValue::DateTime(datetime) => Ok(Self(datetime.date_naive())),
            CalendarDayValue::Millis(millis) => Self::try_from(millis),
            CalendarDayValue::Timestamp(timestamp) => Ok(Self::from_timestamp(timestamp)),
        }
    }

    /// システム時刻の今日（UTC）
    pub fn today() -> Self {
        Self::today_with(&SystemClock)
    }

    /// 指定した Clock の今日（UTC）
    pub fn today_with(clock: &impl Clock) -> Self {
        Self::from_timestamp(clock.now())
    }

    /// `YYYY-MM-DD` 形式の文字列を解釈する
    ///
    /// 月・日は 1 桁でもよい。
    ///
    /// # エラー
    ///
    /// - 形式に一致しない場合は `DomainError::InvalidDayFormat` を返す
    /// - 実在しない日付の場合は `DomainError::InvalidDay` を返す
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let Some(captures) = DAY_FORMAT.captures(text) else {
            return Err(DomainError::InvalidDayFormat(text.to_string()));
        };

        let invalid = || DomainError::InvalidDay(text.to_string());
        let year = captures[1].parse::<i32>().map_err(|_| invalid())?;
        let month = captures[2].parse::<u32>().map_err(|_| invalid())?;
        let day = captures[3].parse::<u32>().map_err(|_| invalid())?;

        Self::from_ymd(year, month, day)
    }

    /// 年・月・日から生成する
    ///
    /// # エラー
    ///
    /// 実在しない日付の場合は `DomainError::InvalidDay` を返す。
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDay(format!("{year}-{month}-{day}")))
    }

    /// タイムスタンプの暦日（UTC）
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self(timestamp.to_datetime().date_naive())
    }

    // --- 比較（正規形の辞書順） ---

    /// 他の暦日より前か
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// 他の暦日より後か
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    /// 他の暦日と同じか
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    // --- 暦のフィールド ---

    /// 年
    pub fn year(&self) -> Year {
        Year::new(i64::from(self.0.year()))
    }

    /// 月
    pub fn month(&self) -> Month {
        Month::from_calendar(self.0.month0())
    }

    /// 日
    pub fn day(&self) -> Day {
        Day::from_calendar(self.0.day())
    }

    /// 曜日
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from_timestamp(self.to_timestamp())
    }

    /// 年月
    pub fn month_of_year(&self) -> MonthOfYear {
        MonthOfYear::new(self.month(), self.year())
    }

    /// UTC の 0 時のタイムスタンプ
    pub fn to_timestamp(self) -> Timestamp {
        Timestamp::from(self.0.and_time(NaiveTime::MIN).and_utc())
    }

    /// chrono の日付
    pub fn to_naive_date(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<f64> for CalendarDay {
    type Error = DomainError;

    /// エポックミリ秒から変換する（小数部は切り捨て）
    ///
    /// # エラー
    ///
    /// 非有限数・表現可能な範囲外の場合は `DomainError::InvalidDay` を返す。
    fn try_from(millis: f64) -> Result<Self, Self::Error> {
        if !millis.is_finite() {
            return Err(DomainError::InvalidDay(millis.to_string()));
        }
        Timestamp::from_millis(millis.trunc() as i64)
            .map(Self::from_timestamp)
            .map_err(|_| DomainError::InvalidDay(millis.to_string()))
    }
}

impl TryFrom<&str> for CalendarDay {
    type Error = DomainError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl From<Timestamp> for CalendarDay {
    fn from(timestamp: Timestamp) -> Self {
        Self::from_timestamp(timestamp)
    }
}

impl std::str::FromStr for CalendarDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl ValueObject for CalendarDay {
    type Primitive = String;

    const NAME: &'static str = "CalendarDay";

    fn value_of(&self) -> String {
        self.to_string()
    }

    fn from_primitive(primitive: String) -> Result<Self, DomainError> {
        Self::parse(&primitive)
    }
}
