//! # 年月
//!
//! 月と年の組。正規形は `YYYY/MM`（ゼロ埋め）。

use super::{CalendarDay, Month, Timestamp, TimestampInterval, Year};
use crate::{DomainError, value_object::ValueObject};

/// 年月（値オブジェクト）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::time::MonthOfYear;
///
/// let january: MonthOfYear = "2022/1".parse()?;
/// assert_eq!(january.to_string(), "2022/01");
/// assert_eq!(january.number_of_days(), 31);
///
/// let interval = january.timestamp_interval()?;
/// assert_eq!(interval.start().to_millis(), 1_640_995_200_000);
/// assert_eq!(interval.end().to_millis(), 1_643_587_200_000);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthOfYear {
    year:  Year,
    month: Month,
}

impl MonthOfYear {
    /// 月と年から作成する
    pub fn new(month: Month, year: Year) -> Self {
        Self { year, month }
    }

    /// 月番号と年から生成する
    ///
    /// 月を先に検証する。
    ///
    /// # エラー
    ///
    /// - 月が 1〜12 以外の場合は `DomainError::NotInEnum` を返す
    /// - 年が整数でない場合は `DomainError::InvalidInteger` を返す
    pub fn from_numbers(month: f64, year: f64) -> Result<Self, DomainError> {
        let month = Month::try_from(month)?;
        let year = Year::try_from(year)?;
        Ok(Self::new(month, year))
    }

    /// タイムスタンプの年月（UTC）
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self::new(timestamp.month(), timestamp.year())
    }

    /// `YYYY/MM` 形式の文字列を解釈する
    ///
    /// 月・年はそれぞれ数値として解釈し、[`from_numbers`](Self::from_numbers) で検証する。
    ///
    /// # エラー
    ///
    /// - `/` で区切られた 2 つの数値でない場合は `DomainError::InvalidMonthOfYearFormat` を返す
    /// - 月・年の検証エラーは [`from_numbers`](Self::from_numbers) と同じ
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidMonthOfYearFormat(text.to_string());

        let (year, month) = text.split_once('/').ok_or_else(invalid)?;
        let year = year.trim().parse::<f64>().map_err(|_| invalid())?;
        let month = month.trim().parse::<f64>().map_err(|_| invalid())?;

        Self::from_numbers(month, year)
    }

    /// 月
    pub fn month(&self) -> Month {
        self.month
    }

    /// 年
    pub fn year(&self) -> Year {
        self.year
    }

    /// 月の日数（2 月は閏年で 29）
    pub fn number_of_days(&self) -> u32 {
        self.month.number_of_days(self.year)
    }

    /// 月初 0 時（UTC）から月末日の 0 時（UTC）までの期間
    ///
    /// 終了は月末日の開始時点であり、月の終わりではない。
    ///
    /// # エラー
    ///
    /// 年が表現可能な範囲外の場合は `DomainError::InvalidDay` を返す。
    pub fn timestamp_interval(&self) -> Result<TimestampInterval, DomainError> {
        let year = i32::try_from(self.year.as_i64())
            .map_err(|_| DomainError::InvalidDay(self.to_string()))?;
        let first = CalendarDay::from_ymd(year, self.month.number(), 1)?;
        let last = CalendarDay::from_ymd(year, self.month.number(), self.number_of_days())?;

        TimestampInterval::new(first.to_timestamp(), last.to_timestamp())
    }
}

impl From<Timestamp> for MonthOfYear {
    fn from(timestamp: Timestamp) -> Self {
        Self::from_timestamp(timestamp)
    }
}

impl TryFrom<&str> for MonthOfYear {
    type Error = DomainError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::parse(text)
    }
}

impl std::str::FromStr for MonthOfYear {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}", self.year.as_i64(), self.month.number())
    }
}

impl ValueObject for MonthOfYear {
    type Primitive = String;

    const NAME: &'static str = "MonthOfYear";

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

    // --- 生成テスト ---

    #[rstest]
    #[case(-1.0, 2022.0)]
    #[case(1.1, 2022.0)]
    #[case(13.0, 2022.0)]
    fn test_不正な月は列挙エラー(#[case] month: f64, #[case] year: f64) {
        assert!(matches!(
            MonthOfYear::from_numbers(month, year),
            Err(DomainError::NotInEnum { .. })
        ));
    }

    #[test]
    fn test_不正な年は整数エラー() {
        assert!(matches!(
            MonthOfYear::from_numbers(1.0, 2022.1),
            Err(DomainError::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_月が先に検証される() {
        assert!(matches!(
            MonthOfYear::from_numbers(13.0, 2022.1),
            Err(DomainError::NotInEnum { .. })
        ));
    }

    #[rstest]
    #[case("2022/05", "2022/05")]
    #[case("2022/1", "2022/01")]
    fn test_文字列から生成できる(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(MonthOfYear::parse(input).unwrap().to_string(), expected);
    }

    #[test]
    fn test_文字列の不正な月は列挙エラー() {
        assert!(matches!(
            MonthOfYear::parse("2022/13"),
            Err(DomainError::NotInEnum { .. })
        ));
    }

    #[test]
    fn test_文字列の不正な年は整数エラー() {
        assert!(matches!(
            MonthOfYear::parse("2022.1/05"),
            Err(DomainError::InvalidInteger(_))
        ));
    }

    #[rstest]
    #[case("2022")]
    #[case("")]
    #[case("2022/")]
    #[case("/05")]
    #[case("abcd/05")]
    fn test_形式に一致しない文字列は形式エラー(#[case] input: &str) {
        assert!(matches!(
            MonthOfYear::parse(input),
            Err(DomainError::InvalidMonthOfYearFormat(_))
        ));
    }

    #[test]
    fn test_タイムスタンプから生成できる() {
        let timestamp = Timestamp::parse("2024-07-22T12:00:00Z").unwrap();

        let month_of_year = MonthOfYear::from_timestamp(timestamp);

        assert_eq!(month_of_year, MonthOfYear::new(Month::July, Year::new(2024)));
    }

    // --- 日数テスト ---

    #[rstest]
    #[case(Month::January, 2022, 31)]
    #[case(Month::February, 2022, 28)]
    #[case(Month::February, 2024, 29)]
    #[case(Month::November, 2024, 30)]
    fn test_月の日数(#[case] month: Month, #[case] year: i64, #[case] expected: u32) {
        assert_eq!(
            MonthOfYear::new(month, Year::new(year)).number_of_days(),
            expected
        );
    }

    // --- 期間テスト ---

    #[test]
    fn test_期間は月初から月末日の0時まで() {
        let january = MonthOfYear::new(Month::January, Year::new(2022));

        let interval = january.timestamp_interval().unwrap();

        assert_eq!(interval.start().to_millis(), 1_640_995_200_000);
        assert_eq!(interval.end().to_millis(), 1_643_587_200_000);
    }

    #[test]
    fn test_閏年の2月の期間() {
        let february = MonthOfYear::new(Month::February, Year::new(2024));

        let interval = february.timestamp_interval().unwrap();

        assert_eq!(interval.end().calendar_day().to_string(), "2024-02-29");
    }

    #[test]
    fn test_年月の順序は時系列() {
        let december = MonthOfYear::parse("2021/12").unwrap();
        let january = MonthOfYear::parse("2022/01").unwrap();

        assert!(december < january);
    }
}
