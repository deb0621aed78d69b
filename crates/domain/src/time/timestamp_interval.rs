//! # 期間
//!
//! 開始・終了のタイムスタンプを持つ閉区間。
//!
//! ## 設計方針
//!
//! - **開始 ≤ 終了**: 生成時に検証し、逆転した期間は作れない
//! - **唯一の可変値**: `modify_start` / `modify_end` は `&mut self` で更新し、
//!   検証に失敗した場合は変更しない
//! - **日単位の走査**: 曜日の集計・暦日の列挙は開始から 24 時間ずつ進め、
//!   終了を超えたところで止める

use serde::{Deserialize, Serialize};

use super::{CalendarDay, DayOfWeek, Duration, Timestamp};
use crate::{DomainError, value_object::ValueObject};

/// 期間のプリミティブ表現（エポックミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampIntervalPrimitives {
    pub start: i64,
    pub end:   i64,
}

/// 期間
///
/// # 不変条件
///
/// - `start <= end`（生成時・更新後とも）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::time::{Timestamp, TimestampInterval};
///
/// let first = TimestampInterval::new(
///     Timestamp::parse("2024-07-22")?,
///     Timestamp::parse("2024-07-28")?,
/// )?;
/// let second = TimestampInterval::new(
///     Timestamp::parse("2024-07-24")?,
///     Timestamp::parse("2024-07-30")?,
/// )?;
///
/// let overlap = first.overlapping_interval(&second).unwrap();
/// assert_eq!(overlap.start(), second.start());
/// assert_eq!(overlap.end(), first.end());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimestampInterval {
    start: Timestamp,
    end:   Timestamp,
}

impl TimestampInterval {
    /// 開始・終了から生成する
    ///
    /// 開始と終了が同じ時点の期間は許容する。
    ///
    /// # エラー
    ///
    /// 開始が終了より後の場合は `DomainError::InvalidTimestampInterval` を返す。
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, DomainError> {
        if start.is_after(&end) {
            return Err(Self::invalid(start, end));
        }
        Ok(Self { start, end })
    }

    /// プリミティブ表現から復元する
    ///
    /// # エラー
    ///
    /// - ミリ秒が表現可能な範囲外の場合は `DomainError::InvalidTimestamp` を返す
    /// - 開始が終了より後の場合は `DomainError::InvalidTimestampInterval` を返す
    pub fn from_primitives(primitives: TimestampIntervalPrimitives) -> Result<Self, DomainError> {
        Self::new(
            Timestamp::from_millis(primitives.start)?,
            Timestamp::from_millis(primitives.end)?,
        )
    }

    /// プリミティブ表現に変換する
    pub fn to_primitives(self) -> TimestampIntervalPrimitives {
        TimestampIntervalPrimitives {
            start: self.start.to_millis(),
            end:   self.end.to_millis(),
        }
    }

    /// 開始
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// 終了
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// 長さ（終了 − 開始）
    pub fn duration(&self) -> Duration {
        Duration::from_milliseconds(self.end.to_millis() - self.start.to_millis())
    }

    /// 期間内に含まれる指定曜日の数
    ///
    /// 開始から 24 時間ずつ進めた各時点のうち、終了以前のものを数える。
    pub fn total_days_of_week(&self, day_of_week: DayOfWeek) -> usize {
        self.daily_steps()
            .filter(|timestamp| timestamp.day_of_week() == day_of_week)
            .count()
    }

    /// 期間内の暦日の一覧
    ///
    /// 開始から 24 時間ずつ進めた各時点のうち、終了以前のものの暦日。
    pub fn days_between_interval(&self) -> Vec<CalendarDay> {
        self.daily_steps().map(CalendarDay::from_timestamp).collect()
    }

    /// 他の期間と重なる部分
    ///
    /// 遅い方の開始から早い方の終了まで。端点が接するだけの場合は重ならない。
    pub fn overlapping_interval(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if start >= end {
            return None;
        }
        Some(Self { start, end })
    }

    /// 時点が期間に含まれるか（両端を含む）
    pub fn includes(&self, timestamp: &Timestamp) -> bool {
        timestamp.is_after_or_equal(&self.start) && timestamp.is_before_or_equal(&self.end)
    }

    /// 開始を変更する
    ///
    /// # エラー
    ///
    /// 新しい開始が終了より前でない場合は `DomainError::InvalidTimestampInterval` を返し、
    /// 期間は変更しない。
    pub fn modify_start(&mut self, start: Timestamp) -> Result<(), DomainError> {
        if !start.is_before(&self.end) {
            tracing::debug!(
                start = %start,
                end = %self.end,
                "期間の開始の変更を拒否しました"
            );
            return Err(Self::invalid(start, self.end));
        }
        self.start = start;
        Ok(())
    }

    /// 終了を変更する
    ///
    /// # エラー
    ///
    /// 開始が新しい終了より前でない場合は `DomainError::InvalidTimestampInterval` を返し、
    /// 期間は変更しない。
    pub fn modify_end(&mut self, end: Timestamp) -> Result<(), DomainError> {
        if !self.start.is_before(&end) {
            tracing::debug!(
                start = %self.start,
                end = %end,
                "期間の終了の変更を拒否しました"
            );
            return Err(Self::invalid(self.start, end));
        }
        self.end = end;
        Ok(())
    }

    fn daily_steps(&self) -> impl Iterator<Item = Timestamp> + '_ {
        std::iter::successors(Some(self.start), |timestamp| timestamp.add_days(1).ok())
            .take_while(|timestamp| timestamp.is_before_or_equal(&self.end))
    }

    fn invalid(start: Timestamp, end: Timestamp) -> DomainError {
        DomainError::InvalidTimestampInterval {
            start: start.to_millis(),
            end:   end.to_millis(),
        }
    }
}

impl TryFrom<TimestampIntervalPrimitives> for TimestampInterval {
    type Error = DomainError;

    fn try_from(primitives: TimestampIntervalPrimitives) -> Result<Self, Self::Error> {
        Self::from_primitives(primitives)
    }
}

impl From<TimestampInterval> for TimestampIntervalPrimitives {
    fn from(interval: TimestampInterval) -> Self {
        interval.to_primitives()
    }
}

impl std::fmt::Display for TimestampInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl ValueObject for TimestampInterval {
    type Primitive = TimestampIntervalPrimitives;

    const NAME: &'static str = "TimestampInterval";

    fn value_of(&self) -> TimestampIntervalPrimitives {
        self.to_primitives()
    }

    fn from_primitive(primitive: TimestampIntervalPrimitives) -> Result<Self, DomainError> {
        Self::from_primitives(primitive)
    }
}
