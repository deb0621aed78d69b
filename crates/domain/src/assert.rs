//! # 事前条件チェック
//!
//! 値オブジェクトのコンストラクタ・演算で使う条件チェック関数。
//!
//! ## 設計方針
//!
//! - **Result で返す**: 条件違反はパニックではなく `Err` として呼び出し元へ返す
//! - **エラー指定の柔軟性**: 文字列メッセージと [`DomainError`] のどちらも受け付け、
//!   文字列は [`DomainError::Validation`] に変換する

use crate::DomainError;

/// 条件が偽のとき指定したエラーを返す
///
/// # エラー
///
/// `condition` が `false` の場合、`error` を [`DomainError`] に変換して返す。
/// 文字列を渡した場合は `DomainError::Validation` になる。
///
/// # 使用例
///
/// ```rust
/// use koyomi_domain::{DomainError, assert::ensure};
///
/// assert!(ensure(1 < 2, "順序が不正です").is_ok());
///
/// let error = ensure(false, "順序が不正です").unwrap_err();
/// assert!(matches!(error, DomainError::Validation(_)));
/// ```
pub fn ensure(condition: bool, error: impl Into<DomainError>) -> Result<(), DomainError> {
    if condition {
        Ok(())
    } else {
        Err(error.into())
    }
}
