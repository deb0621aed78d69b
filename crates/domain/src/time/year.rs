//! # 年
//!
//! グレゴリオ暦の年。閏年の判定と年間日数を提供する。

use derive_more::Display;

use crate::{DomainError, value_object::ValueObject, value_objects::Integer};

/// 年（値オブジェクト）
///
/// # 使用例
///
/// ```rust
/// use koyomi_domain::time::Year;
///
/// let year = Year::new(2024);
/// assert!(year.is_leap_year());
/// assert_eq!(year.number_of_days(), 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(i64);

impl Year {
    /// 指定した年を作成する
    pub fn new(year: i64) -> Self {
        Self(year)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// 閏年か
    ///
    /// 4 で割り切れ 100 で割り切れない年、または 400 で割り切れる年。
    pub fn is_leap_year(&self) -> bool {
        (self.0 % 4 == 0 && self.0 % 100 != 0) || self.0 % 400 == 0
    }

    /// 年間の日数（366 または 365）
    pub fn number_of_days(&self) -> u32 {
        if self.is_leap_year() { 366 } else { 365 }
    }
}

impl TryFrom<f64> for Year {
    type Error = DomainError;

    /// # エラー
    ///
    /// 整数でない場合、または i64 の範囲外の場合は `DomainError::InvalidInteger` を返す。
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Integer::new(value)
            .map_err(|_| DomainError::InvalidInteger(value))
            .map(|integer| Self(integer.as_i64()))
    }
}

impl From<i64> for Year {
    fn from(year: i64) -> Self {
        Self(year)
    }
}

impl ValueObject for Year {
    type Primitive = i64;

    const NAME: &'static str = "Year";

    fn value_of(&self) -> i64 {
        self.0
    }

    fn from_primitive(primitive: i64) -> Result<Self, DomainError> {
        Ok(Self(primitive))
    }
}
