//! # 基本値オブジェクト
//!
//! 暦・時刻の値オブジェクトが利用する、汎用的な検証付きスカラー型を定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 生成時に検証し、不正な値の存在を型レベルで排除
//! - **不変性**: 一度作成したら変更不可。演算は新しいインスタンスを返す
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`NumberValue`] | `f64` | 有限な数値 |
//! | [`Integer`] | `f64` | 整数値 |
//! | [`NonNegativeNumber`] | `f64` | 0 以上の数値 |
//! | [`StringValue`] | `String` | 最大長付き文字列 |
//! | [`EnumeratedValue`] | trait | 候補値の集合に制限された値 |

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{DomainError, value_object::ValueObject};

// =========================================================================
// NumberValue（数値）
// =========================================================================

define_checked_number! {
    /// 有限な数値（値オブジェクト）
    ///
    /// # バリデーション
    ///
    /// - NaN・無限大は無効
    pub struct NumberValue {
        rules: [],
    }
}

impl NumberValue {
    /// 0 かどうか
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// 他の値より大きいか
    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// 他の値以上か
    pub fn is_greater_or_equal_than(&self, other: &Self) -> bool {
        self.0 >= other.0
    }

    /// 他の値より小さいか
    pub fn is_less_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// 他の値以下か
    pub fn is_less_or_equal_than(&self, other: &Self) -> bool {
        self.0 <= other.0
    }

    /// 加算する
    ///
    /// # エラー
    ///
    /// 結果が有限数でない場合は `DomainError::InvalidNumber` を返す。
    pub fn add(&self, other: &Self) -> Result<Self, DomainError> {
        Self::new(self.0 + other.0)
    }

    /// 減算する
    ///
    /// # エラー
    ///
    /// 結果が有限数でない場合は `DomainError::InvalidNumber` を返す。
    pub fn subtract(&self, other: &Self) -> Result<Self, DomainError> {
        Self::new(self.0 - other.0)
    }

    /// 乗算する
    ///
    /// # エラー
    ///
    /// 結果が有限数でない場合は `DomainError::InvalidNumber` を返す。
    pub fn multiply(&self, other: &Self) -> Result<Self, DomainError> {
        Self::new(self.0 * other.0)
    }

    /// 除算する
    ///
    /// # エラー
    ///
    /// 0 除算などで結果が有限数でない場合は `DomainError::InvalidNumber` を返す。
    pub fn divide(&self, other: &Self) -> Result<Self, DomainError> {
        Self::new(self.0 / other.0)
    }
}

// =========================================================================
// Integer（整数）
// =========================================================================

/// i64 に変換可能な f64 の下限（-2^63、含む）
const I64_LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;
/// i64 に変換可能な f64 の上限（2^63、含まない）
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

define_checked_number! {
    /// 整数値（値オブジェクト）
    ///
    /// # バリデーション
    ///
    /// - NaN・無限大は無効
    /// - 小数部を持つ値は無効
    /// - i64 で表現できない値は無効
    pub struct Integer {
        rules: [
            |v| v.fract() == 0.0 => DomainError::InvalidInteger(v),
            |v| (I64_LOWER_BOUND..I64_UPPER_BOUND).contains(&v) => DomainError::InvalidInteger(v),
        ],
    }
}

impl Integer {
    /// i64 として取得する
    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

// =========================================================================
// NonNegativeNumber（非負数）
// =========================================================================

define_checked_number! {
    /// 0 以上の数値（値オブジェクト）
    ///
    /// # バリデーション
    ///
    /// - NaN・無限大は無効
    /// - 負の値は無効
    pub struct NonNegativeNumber {
        rules: [
            |v| v >= 0.0 => DomainError::NegativeNumber(v),
        ],
    }
}

// =========================================================================
// StringValue（文字列）
// =========================================================================

/// 文字列の既定の最大長
pub const DEFAULT_STRING_MAX_LENGTH: usize = 512;

/// 最大長付き文字列（値オブジェクト）
///
/// # バリデーション
///
/// - 文字数（`chars().count()`）が最大長以下
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::value_objects::StringValue;
///
/// let value = StringValue::new("2024-07-22")?;
/// assert_eq!(value.as_str(), "2024-07-22");
/// assert!(StringValue::with_max_length("abcd", 3).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{_0}")]
pub struct StringValue(String);

impl StringValue {
    /// 既定の最大長（512 文字）で生成する
    ///
    /// # エラー
    ///
    /// 最大長を超える場合は `DomainError::StringTooLong` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_max_length(value, DEFAULT_STRING_MAX_LENGTH)
    }

    /// 最大長を指定して生成する
    ///
    /// # エラー
    ///
    /// 最大長を超える場合は `DomainError::StringTooLong` を返す。
    pub fn with_max_length(value: impl Into<String>, max_length: usize) -> Result<Self, DomainError> {
        let value = value.into();
        let length = value.chars().count();
        if length > max_length {
            return Err(DomainError::StringTooLong { length, max_length });
        }
        Ok(Self(value))
    }

    /// 空文字列かどうか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for StringValue {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StringValue {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl ValueObject for StringValue {
    type Primitive = String;

    const NAME: &'static str = "StringValue";

    fn value_of(&self) -> String {
        self.0.clone()
    }

    fn from_primitive(primitive: String) -> Result<Self, DomainError> {
        Self::new(primitive)
    }
}

// =========================================================================
// EnumeratedValue（列挙値）
// =========================================================================

/// 候補値の集合に制限された値
///
/// strum の `EnumIter` を derive した enum に実装し、
/// 各バリアントに対応するプリミティブ値を [`primitive`](EnumeratedValue::primitive)
/// で定義する。候補の一覧と逆引きはデフォルトメソッドで提供される。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::{time::Month, value_objects::EnumeratedValue};
///
/// assert_eq!(Month::from_candidate(5)?, Month::May);
/// assert_eq!(Month::candidates().len(), 12);
/// assert!(Month::from_candidate(13).is_err());
/// # Ok(())
/// # }
/// ```
pub trait EnumeratedValue: IntoEnumIterator + Copy {
    /// 候補値の型
    type Primitive: PartialEq + std::fmt::Display;

    /// このバリアントに対応するプリミティブ値
    fn primitive(&self) -> Self::Primitive;

    /// すべての候補値
    fn candidates() -> Vec<Self::Primitive> {
        Self::iter().map(|variant| variant.primitive()).collect()
    }

    /// プリミティブ値からバリアントを逆引きする
    ///
    /// # エラー
    ///
    /// 候補に含まれない値の場合は `DomainError::NotInEnum` を返す。
    fn from_candidate(value: Self::Primitive) -> Result<Self, DomainError> {
        Self::iter()
            .find(|variant| variant.primitive() == value)
            .ok_or_else(|| Self::not_in_enum(value))
    }

    /// 候補一覧付きの `DomainError::NotInEnum` を作成する
    fn not_in_enum(value: impl std::fmt::Display) -> DomainError {
        let candidates = Self::candidates()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        DomainError::NotInEnum {
            value: value.to_string(),
            candidates,
        }
    }
}

// =========================================================================
// テスト
// =========================================================================
