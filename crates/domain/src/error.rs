//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **分類コードへのマッピング**: サービス層でステータスコードに変換可能
//!
//! ## エラーの種類と分類コードの対応
//!
//! | エラー種別 | 分類コード | 用途 |
//! |-----------|----------|------|
//! | `Validation` | 400 | 入力値の検証失敗 |
//! | `NotFound` | 400 | 参照エンティティが存在しない（呼び出し側の入力不正として扱う） |
//! | `IncompleteTemplate` | 500 | テンプレートデータの整合性違反 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// ビジネスロジックの実行中に発生する例外状態を表現する。
/// サービス層でこのエラーを受け取り、適切な分類コードに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    ///
    /// 指定された ID のエンティティが参照 API に存在しない場合に使用する。
    /// `entity_type` にはエンティティの種類（"販売店", "顧客" など）を指定し、
    /// エラーメッセージを具体的にする。
    #[error("{entity_type}が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"販売店", "顧客", "従業員" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },

    /// テンプレートデータの必須フィールドが空
    ///
    /// 通知送信前の整合性チェックで検出される。送信は一切行われない。
    #[error("テンプレートデータ ({field}) が空です")]
    IncompleteTemplate {
        /// 最初に検出された空フィールドのキー名（例: "DATE"）
        field: &'static str,
    },
}
