//! # 共通値オブジェクト
//!
//! 複数のエンティティで共有される値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 生成時に検証し、不正な値の存在を型レベルで排除
//! - **不変性**: 一度作成したら変更不可
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 用途 |
//! |---|-----------|------|
//! | [`Email`] | `String` | 通知の送信元・宛先メールアドレス |
//! | [`MobileNumber`] | `String` | SMS 通知の対象となる携帯電話番号（PII） |

use serde::{Deserialize, Serialize};

use crate::DomainError;

// =========================================================================
// Email（メールアドレス）
// =========================================================================

/// メールアドレス（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形式である（local / domain とも非空）
    /// - 最大 255 文字
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        // 基本的な構造検証: local@domain の形式であること
        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.chars().count() > 255 {
            return Err(DomainError::Validation(
                "メールアドレスは 255 文字以内である必要があります".to_string(),
            ));
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

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// MobileNumber（携帯電話番号）
// =========================================================================

define_validated_string! {
    /// 携帯電話番号（値オブジェクト）
    ///
    /// SMS ゲートウェイは販売店 ID と顧客 ID から送信先を解決するため、
    /// この値自体が外部へ渡ることはない。存在の有無が SMS チャネルの
    /// 送信条件になる。
    ///
    /// PII のため `Debug` 出力はマスクされる。
    pub struct MobileNumber {
        label: "携帯電話番号",
        max_length: 32,
        pii: true,
    }
}
