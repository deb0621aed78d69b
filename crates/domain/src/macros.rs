/// 検証付き f64 Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`f64` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Display)`
/// - `new()`: 有限数チェック + 追加ルールの検証
/// - `as_f64()`: 内部値の取得
/// - `TryFrom<f64>` impl（`new()` に委譲）
/// - `ValueObject` impl（`Primitive = f64`）
///
/// # ルール
///
/// `rules` には `|値| 条件 => エラー` の形式で検証ルールを列挙する。
/// 有限数チェックの後、記述順に評価され、最初に条件を満たさなかった
/// ルールのエラーを返す。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use koyomi_domain::value_objects::Integer;
///
/// let integer = Integer::new(42.0)?;
/// assert_eq!(integer.as_i64(), 42);
/// assert!(Integer::new(4.2).is_err());
/// # Ok(())
/// # }
/// ```
macro_rules! define_checked_number {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            rules: [
                $( |$v:ident| $cond:expr => $err:expr ),* $(,)?
            ] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, PartialOrd,
            serde::Serialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(f64);

        impl $Name {
            /// 検証して生成する
            ///
            /// # エラー
            ///
            /// - NaN・無限大の場合は `DomainError::InvalidNumber` を返す
            /// - 型ごとのルールを満たさない場合はルールのエラーを返す
            pub fn new(value: f64) -> Result<Self, $crate::DomainError> {
                if !value.is_finite() {
                    return Err($crate::DomainError::InvalidNumber(value));
                }
                $(
                    {
                        let $v = value;
                        if !($cond) {
                            return Err($err);
                        }
                    }
                )*
                Ok(Self(value))
            }

            /// 内部の f64 値を取得する
            pub fn as_f64(&self) -> f64 {
                self.0
            }
        }

        impl TryFrom<f64> for $Name {
            type Error = $crate::DomainError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl $crate::value_object::ValueObject for $Name {
            type Primitive = f64;

            const NAME: &'static str = stringify!($Name);

            fn value_of(&self) -> f64 {
                self.0
            }

            fn from_primitive(primitive: f64) -> Result<Self, $crate::DomainError> {
                Self::new(primitive)
            }
        }
    };
}
