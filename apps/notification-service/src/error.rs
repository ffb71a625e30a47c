//! # 通知サービス エラー定義
//!
//! ユースケースで発生するエラーと、分類コードへの変換を定義する。
//!
//! ## エラーの種類と分類コードの対応
//!
//! | エラー種別 | 分類コード | 用途 |
//! |-----------|----------|------|
//! | `BadRequest` | 400 | 入力値の検証失敗 |
//! | `NotFound` | 400 | 参照エンティティが存在しない（呼び出し側の入力不正として扱う） |
//! | `IncompleteTemplate` | 500 | テンプレートデータの整合性違反 |
//! | `Infra` | 500 | コラボレーターとの通信失敗 |
//! | `Internal` | 500 | その他の内部エラー |
//!
//! 検証フェーズのエラーはオペレーション全体を中断する。テンプレート検証を
//! 通過した後の送信失敗はチャネル単位で結果に畳み込まれ、このエラー型では
//! 表現されない。

use http::StatusCode;
use returnflow_domain::DomainError;
use returnflow_infra::InfraError;
use thiserror::Error;

/// 通知サービスで発生するエラー
#[derive(Debug, Error)]
pub enum OperationError {
    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// 参照エンティティが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// テンプレートデータの必須フィールドが空
    #[error("テンプレートデータ ({0}) が空です")]
    IncompleteTemplate(&'static str),

    /// インフラエラー
    #[error("インフラエラー: {0}")]
    Infra(#[from] InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl OperationError {
    /// エラーの分類コードを返す
    ///
    /// 存在しない参照（`NotFound`）は呼び出し側の入力不正として
    /// 400 に分類する。
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::IncompleteTemplate(_) | Self::Infra(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for OperationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(msg) => Self::BadRequest(msg),
            DomainError::NotFound { entity_type, id } => {
                Self::NotFound(format!("{entity_type}が見つかりません: {id}"))
            }
            DomainError::IncompleteTemplate { field } => Self::IncompleteTemplate(field),
        }
    }
}
