//! # Koyomi 共有ユーティリティ
//!
//! このクレートは、Koyomi のクレートと利用側アプリケーションで共通に使う
//! ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ドメイン層のテストや利用側アプリケーションから依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - サブスクライバの依存は `observability` フィーチャーの背後に置く

pub mod observability;

pub use observability::{LogFormat, TracingConfig};
