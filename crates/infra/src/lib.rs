//! # ReturnFlow インフラ層
//!
//! 外部コラボレーターとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートは返品ステータス通知オペレーションが依存するコラボレーターを
//! trait で抽象化し、その具体的な実装を提供する。外部システムの詳細を
//! カプセル化し、ユースケース層をインフラの変更から保護する。
//!
//! ## 責務
//!
//! - **エンティティディレクトリ**: 販売店・取引先・従業員・ステータスの参照 API クライアント
//! - **メッセージカタログ**: テンプレートキーから件名・本文をレンダリング
//! - **メッセージング**: SMTP / Noop によるメール送信
//! - **SMS 通知**: SMS ゲートウェイ / Noop による送信
//!
//! ## 依存関係
//!
//! ```text
//! notification-service → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`catalog`] - メッセージカタログ（ローカライズ・レンダリング）
//! - [`directory`] - エンティティディレクトリ（参照 API クライアント）
//! - [`error`] - インフラ層エラー定義
//! - [`messaging`] - メール送信クライアント
//! - [`sms`] - SMS 通知クライアント

pub mod catalog;
pub mod directory;
pub mod error;
pub mod messaging;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod sms;

pub use error::InfraError;
