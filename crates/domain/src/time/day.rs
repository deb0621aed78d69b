//! # 日
//!
//! 月内の日（1〜31）。月ごとの日数との整合は [`CalendarDay`](super::CalendarDay) が担う。

use crate::DomainError;

define_checked_number! {
    /// 日（値オブジェクト）
    ///
    /// # バリデーション
    ///
    /// - 整数であること（`DomainError::InvalidInteger`）
    /// - 1 以上 31 以下であること（`DomainError::InvalidDay`）
    ///
    /// 月の日数とは照合しないため、`Day::new(31.0)` は常に成功する。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use koyomi_domain::time::Day;
    ///
    /// assert_eq!(Day::new(15.0).unwrap().as_u32(), 15);
    /// assert!(Day::new(32.0).is_err());
    /// ```
    pub struct Day {
        rules: [
            |v| v.fract() == 0.0 => DomainError::InvalidInteger(v),
            |v| (1.0..=31.0).contains(&v) => DomainError::InvalidDay(v.to_string()),
        ],
    }
}

impl Day {
    /// chrono から得た日（1〜31）から生成する
    pub(crate) fn from_calendar(day: u32) -> Self {
        Self(f64::from(day))
    }

    /// u32 として取得する
    pub fn as_u32(&self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u32> for Day {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1.0)]
    #[case(28.0)]
    #[case(31.0)]
    fn test_1から31の日を受け入れる(#[case] input: f64) {
        assert_eq!(Day::new(input).unwrap().as_f64(), input);
    }

    #[rstest]
    #[case(0.0)]
    #[case(32.0)]
    #[case(-1.0)]
    fn test_範囲外の日は拒否する(#[case] input: f64) {
        assert!(matches!(Day::new(input), Err(DomainError::InvalidDay(_))));
    }

    #[test]
    fn test_小数の日は整数エラーになる() {
        assert!(matches!(
            Day::new(1.5),
            Err(DomainError::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_u32から変換できる() {
        assert_eq!(Day::try_from(7_u32).unwrap().as_u32(), 7);
        assert!(Day::try_from(0_u32).is_err());
    }

    #[test]
    fn test_表示形式は整数() {
        assert_eq!(Day::new(5.0).unwrap().to_string(), "5");
    }
}
