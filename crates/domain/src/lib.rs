//! # Koyomi ドメイン層
//!
//! 自己検証する値オブジェクトと、それを土台にした暦・時刻の演算を提供する。
//!
//! ## 設計方針
//!
//! このクレートは DDD（ドメイン駆動設計）の値オブジェクトの原則に従い、以下を提供する:
//!
//! - **値オブジェクト**: 生成時に検証され、不正な状態を表現できない不変オブジェクト
//!   （例: CalendarDay, MonthOfYear）
//! - **Null Object**: 値の欠損を型で表し、欠損値の利用をエラーとして返す
//! - **暦・時刻の演算**: 期間の重なり・包含・曜日の集計など
//! - **ドメインエラー**: 不変条件違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! 利用側 → domain
//!          ↑ (dev) shared
//! ```
//!
//! ドメイン層は I/O を一切持たない。ログは `tracing` のファサードにのみ出力し、
//! サブスクライバの初期化は `koyomi-shared` に任せる。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`assert`] - 事前条件チェック
//! - [`value_object`] - 値オブジェクトの共通トレイトと Null Object
//! - [`value_objects`] - 汎用的な検証付きスカラー型
//! - [`clock`] - 現在時刻の取得元
//! - [`time`] - 暦・時刻の値オブジェクトと期間
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use koyomi_domain::{DomainError, time::CalendarDay};
//!
//! // 暦日の生成
//! let day = CalendarDay::parse("2024-07-22")?;
//! assert_eq!(day.to_timestamp().to_millis(), 1_721_606_400_000);
//!
//! // ドメインエラー
//! let error = CalendarDay::parse("2024-02-30").unwrap_err();
//! assert!(matches!(error, DomainError::InvalidDay(_)));
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod assert;
pub mod clock;
pub mod error;
pub mod time;
pub mod value_object;
pub mod value_objects;

pub use error::{DomainError, ErrorKind};
