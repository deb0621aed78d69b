//! # 値オブジェクト基盤
//!
//! すべての値オブジェクトが実装する [`ValueObject`] トレイトと、
//! 値の欠損を表す [`Nullable`] を定義する。
//!
//! ## 設計方針
//!
//! - **継承ではなく合成**: 共通の振る舞いはトレイトのデフォルトメソッドで提供し、
//!   検証ロジックは各型のコンストラクタ（または `define_checked_number!`）に置く
//! - **欠損は型で表す**: 値が無いことを `Option` 由来の [`Nullable::Null`] で表現し、
//!   欠損値へのアクセスは `DomainError::NullObject` として返す
//! - **欠損は生成エラーではない**: 入力が無い場合は検証を行わず `Null` になる
//!
//! ## 含まれる型
//!
//! | 型 | 種別 | 用途 |
//! |---|------|------|
//! | [`ValueObject`] | trait | 値の取り出し・等価比較・再生成 |
//! | [`Nullable`] | enum | 値の有無を持つラッパー（Null Object） |

use std::fmt::{Debug, Display};

use crate::DomainError;

// =========================================================================
// ValueObject（値オブジェクト）
// =========================================================================

/// 値オブジェクトの共通インターフェース
///
/// 単一のプリミティブ値を保持する不変オブジェクト。
/// 生成後に値が変わることはなく、[`clone_with`](ValueObject::clone_with) は
/// 常に新しいインスタンスを返す。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::{time::Year, value_object::ValueObject};
///
/// let year = Year::new(2024);
/// assert_eq!(year.value_of(), 2024);
///
/// let next = year.clone_with(Some(2025))?;
/// assert!(next.is_not_equal(&year));
/// assert_eq!(year.value_of(), 2024);
/// # Ok(())
/// # }
/// ```
pub trait ValueObject: Clone + PartialEq + Debug + Display {
    /// 保持するプリミティブ値の型
    type Primitive: Clone + PartialEq + Debug;

    /// 型名（Null Object エラーのメッセージに使用）
    const NAME: &'static str;

    /// プリミティブ値を取得する
    fn value_of(&self) -> Self::Primitive;

    /// プリミティブ値から検証付きで生成する
    ///
    /// # エラー
    ///
    /// 値が型の不変条件を満たさない場合は型ごとの `DomainError` を返す。
    fn from_primitive(primitive: Self::Primitive) -> Result<Self, DomainError>;

    /// 同じプリミティブ型を持つ値オブジェクトと値が等しいか
    fn is_equal<O>(&self, other: &O) -> bool
    where
        O: ValueObject<Primitive = Self::Primitive>,
    {
        self.value_of() == other.value_of()
    }

    /// 同じプリミティブ型を持つ値オブジェクトと値が異なるか
    fn is_not_equal<O>(&self, other: &O) -> bool
    where
        O: ValueObject<Primitive = Self::Primitive>,
    {
        !self.is_equal(other)
    }

    /// 指定した値（省略時は現在の値）から新しいインスタンスを生成する
    ///
    /// # エラー
    ///
    /// 指定した値が不変条件を満たさない場合は `DomainError` を返す。
    fn clone_with(&self, primitive: Option<Self::Primitive>) -> Result<Self, DomainError> {
        Self::from_primitive(primitive.unwrap_or_else(|| self.value_of()))
    }
}

// =========================================================================
// Nullable（Null Object）
// =========================================================================

/// 値の有無を持つ値オブジェクトのラッパー
///
/// `Null` に対して許される操作は [`is_null_object`](Nullable::is_null_object) と
/// [`value_of`](Nullable::value_of)（`None` を返す）のみ。
/// それ以外のアクセスは `DomainError::NullObject` になる。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::{DomainError, time::Year, value_object::Nullable};
///
/// let year: Nullable<Year> = Nullable::new(None::<f64>)?;
/// assert!(year.is_null_object());
/// assert_eq!(year.value_of(), None);
///
/// let error = year.get().unwrap_err();
/// assert_eq!(error.to_string(), "[NullObjectError]: Year is NullObject");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Nullable<T> {
    /// 値あり
    Value(T),
    /// 値なし（Null Object）
    Null,
}

impl<T: ValueObject> Nullable<T> {
    /// 任意の入力から生成する
    ///
    /// `None` の場合は検証を行わず `Null` を返す。
    ///
    /// # エラー
    ///
    /// `Some` の値が `T` の不変条件を満たさない場合は `DomainError` を返す。
    pub fn new<V>(value: Option<V>) -> Result<Self, DomainError>
    where
        T: TryFrom<V, Error = DomainError>,
    {
        match value {
            Some(value) => T::try_from(value).map(Self::Value),
            None => Ok(Self::Null),
        }
    }

    /// Null Object を作成する
    pub fn null() -> Self {
        Self::Null
    }

    /// Null Object かどうか
    pub fn is_null_object(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// プリミティブ値を取得する（Null Object の場合は `None`）
    pub fn value_of(&self) -> Option<T::Primitive> {
        match self {
            Self::Value(value) => Some(value.value_of()),
            Self::Null => None,
        }
    }

    /// 保持する値オブジェクトへの参照を取得する
    ///
    /// # エラー
    ///
    /// Null Object の場合は `DomainError::NullObject` を返す。
    pub fn get(&self) -> Result<&T, DomainError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Null => Err(Self::null_object_error()),
        }
    }

    /// 保持する値オブジェクトを取り出す
    ///
    /// # エラー
    ///
    /// Null Object の場合は `DomainError::NullObject` を返す。
    pub fn into_inner(self) -> Result<T, DomainError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Null => Err(Self::null_object_error()),
        }
    }

    /// `Option` として参照する
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Null => None,
        }
    }

    fn null_object_error() -> DomainError {
        tracing::debug!(type_name = T::NAME, "Null Object の値にアクセスしました");
        DomainError::NullObject {
            type_name: T::NAME,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        time::{Timestamp, Year},
        value_objects::{Integer, NumberValue},
    };

    // --- ValueObject テスト ---

    #[test]
    fn test_同じプリミティブ値なら型が違っても等しい() {
        let number = NumberValue::new(5.0).unwrap();
        let integer = Integer::new(5.0).unwrap();

        assert!(number.is_equal(&integer));
        assert!(!number.is_not_equal(&integer));
    }

    #[test]
    fn test_異なる値は等しくない() {
        let a = NumberValue::new(5.0).unwrap();
        let b = NumberValue::new(6.0).unwrap();

        assert!(a.is_not_equal(&b));
    }

    #[test]
    fn test_clone_withは値を省略すると同じ値の新しいインスタンスを返す() {
        let year = Year::new(2024);

        let cloned = year.clone_with(None).unwrap();

        assert_eq!(cloned, year);
    }

    #[test]
    fn test_clone_withは元のインスタンスを変更しない() {
        let year = Year::new(2024);

        let cloned = year.clone_with(Some(1999)).unwrap();

        assert_eq!(cloned.value_of(), 1999);
        assert_eq!(year.value_of(), 2024);
    }

    #[test]
    fn test_clone_withは不正な値でエラーを返す() {
        let integer = Integer::new(1.0).unwrap();

        let result = integer.clone_with(Some(1.5));

        assert!(matches!(result, Err(DomainError::InvalidInteger(_))));
    }

    // --- Nullable テスト ---

    #[test]
    fn test_値がない場合はnull_objectになる() {
        let year: Nullable<Year> = Nullable::new(None::<f64>).unwrap();

        assert!(year.is_null_object());
        assert_eq!(year.value_of(), None);
    }

    #[test]
    fn test_値がある場合は検証される() {
        let result: Result<Nullable<Year>, _> = Nullable::new(Some(2024.5));

        assert!(matches!(result, Err(DomainError::InvalidInteger(_))));
    }

    #[test]
    fn test_値がある場合は値オブジェクトを保持する() {
        let year: Nullable<Year> = Nullable::new(Some(2024.0)).unwrap();

        assert!(!year.is_null_object());
        assert_eq!(year.value_of(), Some(2024));
        assert_eq!(year.get().unwrap(), &Year::new(2024));
    }

    #[rstest]
    #[case(Nullable::<Year>::null().get().map(|_| ()).unwrap_err(), "Year")]
    #[case(Nullable::<Timestamp>::null().into_inner().map(|_| ()).unwrap_err(), "Timestamp")]
    fn test_null_objectへのアクセスは型名付きのエラーになる(
        #[case] error: DomainError,
        #[case] type_name: &str,
    ) {
        assert_eq!(
            error.to_string(),
            format!("[NullObjectError]: {type_name} is NullObject")
        );
    }

    #[test]
    fn test_optionから変換できる() {
        let value: Nullable<Year> = Some(Year::new(2000)).into();
        let null: Nullable<Year> = None.into();

        assert_eq!(value.as_option(), Some(&Year::new(2000)));
        assert!(null.is_null_object());
    }
}
