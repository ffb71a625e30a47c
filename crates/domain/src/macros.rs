/// 整数ベースの ID 型を定義する宣言型マクロ
///
/// プラットフォームの参照 API が払い出す整数 ID をラップする
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`u32` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: 生の整数から作成
/// - `as_u32()`: 内部値への変換
///
/// # 使用例
///
/// ```rust
/// use returnflow_domain::seller::SellerId;
///
/// let id = SellerId::new(42);
/// assert_eq!(id.as_u32(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
macro_rules! define_entity_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(u32);

        impl $Name {
            /// 生の整数値から ID を作成する
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// 内部の整数値を取得する
            pub const fn as_u32(self) -> u32 {
                self.0
            }
        }
    };
}

/// バリデーション付き String Newtype の共通メソッドを生成する内部マクロ
///
/// `define_validated_string!` の PII / 非 PII 両アームで共有される
/// `new()`, `as_str()`, `into_string()` を一括生成する。
macro_rules! _validated_string_common {
    ($Name:ident, $label:expr, $max_length:expr) => {
        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                if value.chars().count() > $max_length {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は {} 文字以内である必要があります",
                        $label, $max_length
                    )));
                }

                Ok(Self(value))
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
    };
}

/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: trim + 空チェック + 最大長チェック
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
///
/// # PII モード
///
/// `pii: true` を指定すると PII 保護モードになる:
/// - `Debug` 出力を `[REDACTED]` にマスクする
/// - `Display` impl を生成しない（平文出力を防止）
///
/// `pii` を指定しない場合（デフォルト）:
/// - `derive(Debug)` で通常の Debug 出力
/// - `Display` impl を生成（平文出力）
///
/// # 引数
///
/// - `$label`: エラーメッセージに使うラベル（例: `"販売店名"`）
/// - `$max_length`: 最大文字数（`chars().count()` でカウント）
/// - `pii`: （任意）`true` を指定すると PII 保護モード
macro_rules! define_validated_string {
    // PII アーム: Debug をマスク、Display を生成しない
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr,
            pii: true $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        $vis struct $Name(String);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&"[REDACTED]").finish()
            }
        }

        _validated_string_common!($Name, $label, $max_length);
    };
    // 非 PII アーム: derive(Debug) + Display 生成
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
        )]
        $vis struct $Name(String);

        _validated_string_common!($Name, $label, $max_length);

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
