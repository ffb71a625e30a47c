//! # インフラ層エラー定義
//!
//! 参照 API や送信ゲートウェイとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: reqwest::Error, serde_json::Error, tera::Error などをラップ
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **SpanTrace 自動捕捉**: `From` 実装や convenience constructor で
//!   エラー生成時の呼び出し経路を自動記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Http, Smtp, Template 等）

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// `From<reqwest::Error>` 等の変換や convenience constructor でエラーを生成すると、
/// その時点のスパン情報が自動的にキャプチャされる。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// 参照 API 呼び出し、SMTP 送信、テンプレートレンダリングなどで発生する
/// エラーの具体的な種別。サービス層でこのエラー種別に応じて分類コードに
/// 変換する。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// HTTP リクエストエラー
    ///
    /// 参照 API・SMS ゲートウェイへの接続失敗、非 2xx レスポンスなど。
    #[error("HTTP リクエストエラー: {0}")]
    Http(#[source] reqwest::Error),

    /// SMTP 送信エラー
    ///
    /// lettre のエラー型はトランスポートごとのジェネリクスを持つため、
    /// 手動で String にマップする。
    #[error("SMTP 送信エラー: {0}")]
    Smtp(String),

    /// テンプレートレンダリングエラー
    ///
    /// メッセージカタログのテンプレート登録・レンダリング失敗。
    #[error("テンプレートエラー: {0}")]
    Template(String),

    /// シリアライズ/デシリアライズエラー
    ///
    /// JSON の変換に失敗した場合に使用する。
    #[error("シリアライズエラー: {0}")]
    Serialization(#[source] serde_json::Error),

    /// コラボレーターのペイロード不正
    ///
    /// 参照 API が返したレコードがドメインの不変条件を満たさない場合に
    /// 使用する。
    #[error("入力エラー: {0}")]
    InvalidInput(String),

    /// 予期しないエラー
    ///
    /// 上記に分類できない予期しないエラー。
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// InfraError を分解して InfraErrorKind と SpanTrace を取り出す
    pub fn into_parts(self) -> (InfraErrorKind, SpanTrace) {
        (self.kind, self.span_trace)
    }

    // ===== Convenience constructors =====

    /// SMTP 送信エラーを生成する
    pub fn smtp(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Smtp(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }

    /// テンプレートエラーを生成する
    pub fn template(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Template(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }

    /// ペイロード不正エラーを生成する
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::InvalidInput(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<reqwest::Error> for InfraError {
    fn from(source: reqwest::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Http(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(source: serde_json::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Serialization(source),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl From<tera::Error> for InfraError {
    fn from(source: tera::Error) -> Self {
        Self {
            kind:       InfraErrorKind::Template(source.to_string()),
            span_trace: SpanTrace::capture(),
        }
    }
}
