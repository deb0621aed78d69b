//! # 曜日
//!
//! 曜日名と曜日番号（日曜日 = 0 〜 土曜日 = 6）の対応を持つ列挙値。

use chrono::Datelike;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::Timestamp;
use crate::{DomainError, value_object::ValueObject, value_objects::EnumeratedValue};

/// 曜日（値オブジェクト）
///
/// | 曜日 | 番号 |
/// |------|------|
/// | `sunday` | 0 |
/// | `monday` | 1 |
/// | `tuesday` | 2 |
/// | `wednesday` | 3 |
/// | `thursday` | 4 |
/// | `friday` | 5 |
/// | `saturday` | 6 |
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::time::{DayOfWeek, Timestamp};
///
/// let monday = DayOfWeek::from_timestamp(Timestamp::parse("2024-05-27")?);
/// assert_eq!(monday, DayOfWeek::Monday);
/// assert_eq!(monday.to_number(), 1);
/// assert_eq!(monday.to_string(), "monday");
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// 曜日番号（日曜日 = 0 〜 土曜日 = 6）
    pub fn to_number(self) -> u32 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// 曜日番号から生成する
    ///
    /// # エラー
    ///
    /// 0〜6 以外の場合は `DomainError::InvalidDay` を返す。
    pub fn from_number(number: u32) -> Result<Self, DomainError> {
        Self::iter()
            .find(|day| day.to_number() == number)
            .ok_or_else(|| DomainError::InvalidDay(number.to_string()))
    }

    /// タイムスタンプの曜日（UTC）
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        match timestamp.to_datetime().weekday() {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }

    /// 曜日名（小文字）
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl EnumeratedValue for DayOfWeek {
    type Primitive = &'static str;

    fn primitive(&self) -> &'static str {
        self.name()
    }
}

impl std::str::FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| Self::not_in_enum(s))
    }
}

impl From<Timestamp> for DayOfWeek {
    fn from(timestamp: Timestamp) -> Self {
        Self::from_timestamp(timestamp)
    }
}

impl ValueObject for DayOfWeek {
    type Primitive = u32;

    const NAME: &'static str = "DayOfWeek";

    fn value_of(&self) -> u32 {
        self.to_number()
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
    #[case(DayOfWeek::Sunday, 0)]
    #[case(DayOfWeek::Monday, 1)]
    #[case(DayOfWeek::Tuesday, 2)]
    #[case(DayOfWeek::Wednesday, 3)]
    #[case(DayOfWeek::Thursday, 4)]
    #[case(DayOfWeek::Friday, 5)]
    #[case(DayOfWeek::Saturday, 6)]
    fn test_曜日番号の対応(#[case] day: DayOfWeek, #[case] number: u32) {
        assert_eq!(day.to_number(), number);
        assert_eq!(DayOfWeek::from_number(number).unwrap(), day);
    }

    #[rstest]
    #[case(7)]
    #[case(23)]
    fn test_範囲外の曜日番号は拒否する(#[case] number: u32) {
        assert!(matches!(
            DayOfWeek::from_number(number),
            Err(DomainError::InvalidDay(_))
        ));
    }

    #[rstest]
    #[case("2024-05-27", DayOfWeek::Monday)]
    #[case("2024-06-02", DayOfWeek::Sunday)]
    #[case("2024-12-31", DayOfWeek::Tuesday)]
    #[case("2025-01-31", DayOfWeek::Friday)]
    fn test_タイムスタンプの曜日(#[case] date: &str, #[case] expected: DayOfWeek) {
        let timestamp = Timestamp::parse(date).unwrap();

        assert_eq!(DayOfWeek::from_timestamp(timestamp), expected);
    }

    #[test]
    fn test_曜日名から生成できる() {
        assert_eq!("sunday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert!(matches!(
            "Sunday".parse::<DayOfWeek>(),
            Err(DomainError::NotInEnum { .. })
        ));
    }

    #[test]
    fn test_曜日名の候補一覧() {
        assert_eq!(
            DayOfWeek::candidates(),
            vec!["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"]
        );
    }
}
