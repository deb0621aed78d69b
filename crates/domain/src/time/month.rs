//! # 月
//!
//! 1 月〜12 月の列挙値。外部との連携用に 0 始まりのインデックスも持つ。

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::Year;
use crate::{DomainError, value_object::ValueObject, value_objects::EnumeratedValue};

/// 平年の月ごとの日数（1 月始まり）
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// 月（値オブジェクト）
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::time::Month;
///
/// let month = Month::try_from(5.0)?;
/// assert_eq!(month, Month::May);
/// assert_eq!(month.number(), 5);
/// assert_eq!(month.index(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[repr(u32)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// 月番号（1〜12）
    pub fn number(&self) -> u32 {
        *self as u32
    }

    /// 0 始まりのインデックス（0〜11）
    pub fn index(&self) -> u32 {
        self.number() - 1
    }

    /// 月番号から生成する
    ///
    /// # エラー
    ///
    /// 1〜12 以外の場合は `DomainError::NotInEnum` を返す。
    pub fn from_number(number: u32) -> Result<Self, DomainError> {
        Self::from_candidate(number)
    }

    /// 指定した年におけるこの月の日数
    pub fn number_of_days(&self, year: Year) -> u32 {
        match self {
            Self::February if year.is_leap_year() => 29,
            _ => DAYS_IN_MONTH[self.index() as usize],
        }
    }

    /// chrono の 0 始まりの月から生成する
    pub(crate) fn from_calendar(month0: u32) -> Self {
        Self::ALL[(month0 as usize).min(Self::ALL.len() - 1)]
    }
}

impl EnumeratedValue for Month {
    type Primitive = u32;

    fn primitive(&self) -> u32 {
        self.number()
    }
}

impl TryFrom<u32> for Month {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl TryFrom<f64> for Month {
    type Error = DomainError;

    /// 小数・負数・NaN を含め、候補にない値はすべて `DomainError::NotInEnum`
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|month| f64::from(month.number()) == value)
            .ok_or_else(|| Self::not_in_enum(value))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl ValueObject for Month {
    type Primitive = u32;

    const NAME: &'static str = "Month";

    fn value_of(&self) -> u32 {
        self.number()
    }

    fn from_primitive(primitive: u32) -> Result<Self, DomainError> {
        Self::from_number(primitive)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Month::January, 1, 0)]
    #[case(Month::June, 6, 5)]
    #[case(Month::December, 12, 11)]
    fn test_月番号とインデックス(
        #[case] month: Month,
        #[case] number: u32,
        #[case] index: u32,
    ) {
        assert_eq!(month.number(), number);
        assert_eq!(month.index(), index);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(0.0)]
    #[case(1.1)]
    #[case(13.0)]
    #[case(f64::NAN)]
    fn test_候補にない数値は拒否する(#[case] input: f64) {
        assert!(matches!(
            Month::try_from(input),
            Err(DomainError::NotInEnum { .. })
        ));
    }

    #[test]
    fn test_月番号から生成できる() {
        assert_eq!(Month::try_from(2_u32).unwrap(), Month::February);
        assert_eq!(Month::try_from(12.0).unwrap(), Month::December);
    }

    #[rstest]
    #[case(Month::January, 2022, 31)]
    #[case(Month::February, 2022, 28)]
    #[case(Month::February, 2024, 29)]
    #[case(Month::February, 1900, 28)]
    #[case(Month::February, 2000, 29)]
    #[case(Month::April, 2024, 30)]
    fn test_月の日数(#[case] month: Month, #[case] year: i64, #[case] expected: u32) {
        assert_eq!(month.number_of_days(Year::new(year)), expected);
    }

    #[test]
    fn test_名前の文字列表現() {
        let name: &str = Month::September.into();
        assert_eq!(name, "september");
        assert_eq!(Month::September.to_string(), "9");
    }

    #[test]
    fn test_0始まりの月から生成する() {
        assert_eq!(Month::from_calendar(0), Month::January);
        assert_eq!(Month::from_calendar(11), Month::December);
    }
}
