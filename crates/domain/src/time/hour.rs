//! # 時刻
//!
//! 日付を持たない時刻（`HH:MM`）。加算・差分は 24 時間で循環する。

use crate::{DomainError, value_object::ValueObject};

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// 時刻（値オブジェクト）
///
/// # バリデーション
///
/// - 時は 0〜23（`DomainError::InvalidHour`）
/// - 分は 0〜59（`DomainError::InvalidMinutes`）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::time::Hour;
///
/// let late: Hour = "23:30".parse()?;
/// let early = late.add_minutes(45);
/// assert_eq!(early.to_string(), "00:15");
/// assert_eq!(late.diff_in_minutes(&early), 45);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour {
    hours:   u32,
    minutes: u32,
}

impl Hour {
    /// 時・分から生成する
    ///
    /// # エラー
    ///
    /// - 時が 23 を超える場合は `DomainError::InvalidHour` を返す
    /// - 分が 59 を超える場合は `DomainError::InvalidMinutes` を返す
    pub fn new(hours: u32, minutes: u32) -> Result<Self, DomainError> {
        if hours >= 24 {
            return Err(DomainError::InvalidHour(hours.to_string()));
        }
        if minutes >= MINUTES_PER_HOUR {
            return Err(DomainError::InvalidMinutes(minutes.to_string()));
        }
        Ok(Self { hours, minutes })
    }

    /// `H:M` 形式の文字列を解釈する
    ///
    /// # エラー
    ///
    /// - `:` を含まない、または時が数値でない場合は `DomainError::InvalidHour` を返す
    /// - 分が数値でない場合は `DomainError::InvalidMinutes` を返す
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let (hours, minutes) = text
            .split_once(':')
            .ok_or_else(|| DomainError::InvalidHour(text.to_string()))?;
        let hours = hours
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidHour(hours.to_string()))?;
        let minutes = minutes
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidMinutes(minutes.to_string()))?;

        Self::new(hours, minutes)
    }

    /// 時
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// 分
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// 0 時からの経過分
    pub fn minutes_of_day(&self) -> u32 {
        self.hours * MINUTES_PER_HOUR + self.minutes
    }

    /// 分を加算する（24 時間で循環、負数で減算）
    pub fn add_minutes(&self, minutes: i64) -> Self {
        let minutes_per_day = i64::from(MINUTES_PER_DAY);
        // 先に 1 日分に縮めておけば加算は桁あふれしない
        let offset = minutes.rem_euclid(minutes_per_day);
        let total = ((i64::from(self.minutes_of_day()) + offset) % minutes_per_day) as u32;
        Self {
            hours:   total / MINUTES_PER_HOUR,
            minutes: total % MINUTES_PER_HOUR,
        }
    }

    /// この時刻から他の時刻までの分数
    ///
    /// 他の時刻の方が早い場合は翌日の時刻として数える。
    pub fn diff_in_minutes(&self, other: &Self) -> u32 {
        (other.minutes_of_day() + MINUTES_PER_DAY - self.minutes_of_day()) % MINUTES_PER_DAY
    }

    /// 他の時刻より後か
    pub fn is_greater_than(&self, other: &Self) -> bool {
        self > other
    }

    /// 他の時刻より前か
    pub fn is_less_than(&self, other: &Self) -> bool {
        self < other
    }
}

impl TryFrom<&str> for Hour {
    type Error = DomainError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl std::str::FromStr for Hour {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl ValueObject for Hour {
    type Primitive = String;

    const NAME: &'static str = "Hour";

    fn value_of(&self) -> String {
        self.to_string()
    }

    fn from_primitive(primitive: String) -> Result<Self, DomainError> {
        Self::parse(&primitive)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn hour(text: &str) -> Hour {
        Hour::parse(text).unwrap()
    }

    // --- 生成テスト ---

    #[rstest]
    #[case("00:00", "00:00")]
    #[case("9:5", "09:05")]
    #[case("23:59", "23:59")]
    fn test_文字列から生成すると正規形になる(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(hour(input).to_string(), expected);
    }

    #[rstest]
    #[case("24:00")]
    #[case("0900")]
    #[case("xx:00")]
    #[case("")]
    fn test_不正な時は拒否する(#[case] input: &str) {
        assert!(matches!(
            Hour::parse(input),
            Err(DomainError::InvalidHour(_))
        ));
    }

    #[rstest]
    #[case("10:60")]
    #[case("10:")]
    #[case("10:-1")]
    fn test_不正な分は拒否する(#[case] input: &str) {
        assert!(matches!(
            Hour::parse(input),
            Err(DomainError::InvalidMinutes(_))
        ));
    }

    // --- 演算テスト ---

    #[rstest]
    #[case("10:30", 45, "11:15")]
    #[case("23:30", 45, "00:15")]
    #[case("00:15", -30, "23:45")]
    #[case("12:00", 24 * 60, "12:00")]
    #[case("01:00", i64::MAX, "19:07")]
    #[case("01:00", i64::MIN, "06:52")]
    fn test_分の加算は24時間で循環する(
        #[case] start: &str,
        #[case] minutes: i64,
        #[case] expected: &str,
    ) {
        assert_eq!(hour(start).add_minutes(minutes).to_string(), expected);
    }

    #[rstest]
    #[case("09:00", "17:30", 510)]
    #[case("22:00", "02:00", 240)]
    #[case("08:00", "08:00", 0)]
    fn test_差分は翌日に循環する(
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: u32,
    ) {
        assert_eq!(hour(from).diff_in_minutes(&hour(to)), expected);
    }

    // --- 比較テスト ---

    #[test]
    fn test_時を優先して比較する() {
        assert!(hour("10:00").is_greater_than(&hour("09:59")));
        assert!(hour("09:30").is_less_than(&hour("09:31")));
        assert!(!hour("09:30").is_less_than(&hour("09:30")));
    }
}
