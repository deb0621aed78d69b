//! # ドメイン層エラー定義
//!
//! 値オブジェクトの生成・演算で発生する不正状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **単一のエラーファミリー**: すべての検証失敗を [`DomainError`] の
//!   バリアントとして表現し、パターンマッチで処理可能にする
//! - **種別による分類**: [`DomainError::kind`] で [`ErrorKind`] に集約し、
//!   呼び出し側はバリアントを網羅せずに大分類で扱える
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//!
//! ## エラーの種類
//!
//! | 種別 | バリアント | 用途 |
//! |-----|-----------|------|
//! | `InvalidFormat` | `InvalidDayFormat`, `InvalidMonthOfYearFormat` | 文字列の形式不正 |
//! | `InvalidValue` | `Validation`, `InvalidDay`, `InvalidTimestamp`, `NotInEnum` など | 値が不変条件を満たさない |
//! | `InvalidRange` | `InvalidTimestampInterval` | 期間の開始・終了が逆転 |
//! | `InvalidNumber` | `InvalidNumber`, `InvalidInteger` | 非有限数・非整数 |
//! | `NullObject` | `NullObject` | 値の欠損した Null Object の使用 |
//!
//! ## 使用例
//!
//! ```rust
//! use koyomi_domain::{DomainError, ErrorKind, time::CalendarDay};
//!
//! let error = CalendarDay::parse("2022-01-001").unwrap_err();
//! assert!(matches!(error, DomainError::InvalidDayFormat(_)));
//! assert_eq!(error.kind(), ErrorKind::InvalidFormat);
//! ```

use strum::IntoStaticStr;
use thiserror::Error;

/// エラーの大分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// 文字列の形式が不正
    InvalidFormat,
    /// 値が不変条件を満たさない
    InvalidValue,
    /// 範囲（開始・終了の順序）が不正
    InvalidRange,
    /// 数値として不正（非有限数・非整数）
    InvalidNumber,
    /// Null Object の使用
    NullObject,
}

/// ドメイン層で発生するエラー
///
/// 値オブジェクトの生成時・演算時に同期的に返される。
/// ドメイン層の内部で握りつぶすことはなく、必ず直近の呼び出し元へ伝播する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// 汎用のバリデーションエラー
    ///
    /// [`ensure`](crate::assert::ensure) に文字列メッセージを渡した場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 数値として扱えない値（NaN・無限大）
    #[error("不正な数値です: {0}")]
    InvalidNumber(f64),

    /// 整数でない値
    #[error("不正な整数値です: {0}")]
    InvalidInteger(f64),

    /// 負の値
    #[error("値は 0 以上である必要があります: {0}")]
    NegativeNumber(f64),

    /// 文字列長の上限超過
    #[error("文字列長 {length} が上限 {max_length} を超えています")]
    StringTooLong {
        /// 実際の文字数
        length:     usize,
        /// 許容される最大文字数
        max_length: usize,
    },

    /// 列挙値の候補に含まれない値
    #[error("値 {value} は列挙値 [{candidates}] に含まれていません")]
    NotInEnum {
        /// 入力値
        value:      String,
        /// 候補値（カンマ区切り）
        candidates: String,
    },

    /// 暦として成立しない日付
    #[error("不正な日付です: {0}")]
    InvalidDay(String),

    /// `YYYY-MM-DD` 形式に一致しない日付文字列
    #[error("不正な日付形式です: {0}（YYYY-MM-DD 形式で指定してください）")]
    InvalidDayFormat(String),

    /// `YYYY/MM` 形式に一致しない年月文字列
    #[error("不正な年月形式です: {0}（YYYY/MM 形式で指定してください）")]
    InvalidMonthOfYearFormat(String),

    /// 解釈できない、または表現可能な範囲外のタイムスタンプ
    #[error("不正なタイムスタンプです: {0}")]
    InvalidTimestamp(String),

    /// ミリ秒換算で i64 の範囲を超える時間の長さ
    #[error("時間の長さが表現可能な範囲を超えています: {0}")]
    InvalidDuration(String),

    /// 0〜23 の範囲外の時
    #[error("不正な時です: {0}")]
    InvalidHour(String),

    /// 0〜59 の範囲外の分
    #[error("不正な分です: {0}")]
    InvalidMinutes(String),

    /// 開始が終了より後の期間
    ///
    /// 値はエポックミリ秒。
    #[error("不正な期間です: 開始 ({start}) は終了 ({end}) より前である必要があります")]
    InvalidTimestampInterval {
        /// 開始（エポックミリ秒）
        start: i64,
        /// 終了（エポックミリ秒）
        end:   i64,
    },

    /// 値の欠損した Null Object を使用した
    #[error("[NullObjectError]: {type_name} is NullObject")]
    NullObject {
        /// 本来の値オブジェクトの型名
        type_name: &'static str,
    },
}

impl DomainError {
    /// エラーの大分類を返す
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDayFormat(_) | Self::InvalidMonthOfYearFormat(_) => {
                ErrorKind::InvalidFormat
            }
            Self::Validation(_)
            | Self::NegativeNumber(_)
            | Self::StringTooLong { .. }
            | Self::NotInEnum { .. }
            | Self::InvalidDay(_)
            | Self::InvalidTimestamp(_)
            | Self::InvalidDuration(_)
            | Self::InvalidHour(_)
            | Self::InvalidMinutes(_) => ErrorKind::InvalidValue,
            Self::InvalidTimestampInterval { .. } => ErrorKind::InvalidRange,
            Self::InvalidNumber(_) | Self::InvalidInteger(_) => ErrorKind::InvalidNumber,
            Self::NullObject { .. } => ErrorKind::NullObject,
        }
    }
}

impl From<String> for DomainError {
    fn from(message: String) -> Self {
        Self::Validation(message)
    }
}

impl From<&str> for DomainError {
    fn from(message: &str) -> Self {
        Self::Validation(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DomainError::InvalidDayFormat("2022-01".to_string()), ErrorKind::InvalidFormat)]
    #[case(DomainError::InvalidMonthOfYearFormat("2022".to_string()), ErrorKind::InvalidFormat)]
    #[case(DomainError::InvalidDay("NaN".to_string()), ErrorKind::InvalidValue)]
    #[case(DomainError::Validation("x".to_string()), ErrorKind::InvalidValue)]
    #[case(DomainError::InvalidDuration("x".to_string()), ErrorKind::InvalidValue)]
    #[case(DomainError::InvalidTimestampInterval { start: 2, end: 1 }, ErrorKind::InvalidRange)]
    #[case(DomainError::InvalidNumber(f64::NAN), ErrorKind::InvalidNumber)]
    #[case(DomainError::InvalidInteger(1.5), ErrorKind::InvalidNumber)]
    #[case(DomainError::NullObject { type_name: "Year" }, ErrorKind::NullObject)]
    fn test_バリアントごとのエラー種別(#[case] error: DomainError, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn test_文字列からはバリデーションエラーになる() {
        let error: DomainError = "条件違反".into();
        assert!(matches!(error, DomainError::Validation(ref m) if m == "条件違反"));
    }

    #[test]
    fn test_null_objectエラーのメッセージに型名が含まれる() {
        let error = DomainError::NullObject { type_name: "Timestamp" };
        assert_eq!(error.to_string(), "[NullObjectError]: Timestamp is NullObject");
    }

    #[test]
    fn test_期間エラーのメッセージに開始と終了が含まれる() {
        let error = DomainError::InvalidTimestampInterval { start: 20, end: 10 };
        let message = error.to_string();
        assert!(message.contains("(20)"));
        assert!(message.contains("(10)"));
    }

    #[test]
    fn test_エラー種別の文字列表現はスネークケース() {
        let kind: &str = ErrorKind::InvalidFormat.into();
        assert_eq!(kind, "invalid_format");
        assert_eq!(ErrorKind::NullObject.to_string(), "null_object");
    }
}
