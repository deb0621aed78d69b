//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//! ドメイン層は `tracing` のイベントを出すだけで、出力先や形式はここで決める。
//!
//! ## 環境変数
//!
//! | 変数 | 用途 | 既定値 |
//! |------|------|--------|
//! | `LOG_FORMAT` | 出力形式（`json` / `pretty`） | `pretty` |
//! | `RUST_LOG` | ログレベルのフィルタ | [`DEFAULT_FILTER`] |

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,koyomi=debug";

/// ログ出力形式
///
/// 環境変数 `LOG_FORMAT` で切り替える。
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（集約基盤向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// 前後の空白と大文字・小文字は無視する。
    /// 不正な値の場合は [`Pretty`](LogFormat::Pretty) にフォールバックし、
    /// stderr に警告を出力する。
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => {
                eprintln!("WARNING: unknown LOG_FORMAT={s:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る
    ///
    /// 未設定の場合は [`Pretty`](LogFormat::Pretty) をデフォルトとする。
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// 設定値としての文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// 利用側のコンポーネント名（初期化ログに出力）
    pub component:      String,
    /// ログ出力形式
    pub log_format:     LogFormat,
    /// `RUST_LOG` 未設定時のフィルタ
    pub default_filter: String,
}

impl TracingConfig {
    /// 新しい設定を作成する
    pub fn new(component: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            component: component.into(),
            log_format,
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }

    /// 環境変数から設定を読み取る
    ///
    /// `LOG_FORMAT` 環境変数で出力形式を決定する。
    pub fn from_env(component: impl Into<String>) -> Self {
        Self::new(component, LogFormat::from_env())
    }

    /// `RUST_LOG` 未設定時のフィルタを差し替える
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` 環境変数でログレベルを制御可能。
/// 未設定の場合は [`TracingConfig::default_filter`] を使う。
///
/// JSON モードではイベントのフィールドがトップレベルに展開される:
/// - `timestamp`, `level`, `target`, `message` と各フィールド
///
/// # エラー
///
/// グローバルなサブスクライバが既に設定されている場合はエラーを返す。
#[cfg(feature = "observability")]
pub fn init_tracing(
    config: &TracingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_filter.as_str().into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(
        component = %config.component,
        log_format = %config.log_format,
        "トレーシングを初期化しました"
    );
    Ok(())
}

/// テスト用のトレーシングを初期化する
///
/// 出力はテストハーネスのキャプチャに流れる。
/// 複数のテストから呼ばれることを前提とし、2 回目以降の呼び出しは何もしない。
#[cfg(feature = "observability")]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ===== LogFormat::parse テスト =====

    #[test]
    fn test_parse_jsonでjsonを返す() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    }

    #[test]
    fn test_parse_prettyでprettyを返す() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    }

    #[test]
    fn test_parse_大文字と空白を無視する() {
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("Pretty"), LogFormat::Pretty);
    }

    #[test]
    fn test_parse_不正な値でprettyにフォールバックする() {
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
    }

    // ===== LogFormat 表示テスト =====

    #[test]
    fn test_表示形式は設定値と同じ() {
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::default().as_str(), "pretty");
    }

    // ===== TracingConfig テスト =====

    #[test]
    fn test_newでフィールドが正しく設定される() {
        let config = TracingConfig::new("calendar-batch", LogFormat::Json);

        assert_eq!(config.component, "calendar-batch");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.default_filter, DEFAULT_FILTER);
    }

    #[test]
    fn test_既定のフィルタを差し替えられる() {
        let config =
            TracingConfig::new("calendar-batch", LogFormat::Pretty).with_default_filter("warn");

        assert_eq!(config.default_filter, "warn");
    }

    // ===== init_tracing テスト =====

    #[cfg(feature = "observability")]
    #[test]
    fn test_二重初期化はエラーを返す() {
        let config = TracingConfig::new("test", LogFormat::Pretty);

        let _ = init_tracing(&config);

        assert!(init_tracing(&config).is_err());
    }
}
