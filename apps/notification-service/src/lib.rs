//! # ReturnFlow 通知サービス
//!
//! 返品ステータスイベントを処理し、関係者へ通知するユースケースを提供する。
//!
//! ## 設計方針
//!
//! - **単一のエントリポイント**: [`ReturnStatusUseCase::execute`] が
//!   1 リクエストを受け取り、チャネル別の通知結果を返す
//! - **依存性注入**: コラボレーター（ディレクトリ、カタログ、送信クライアント）
//!   は trait で抽象化し、`Arc<dyn Trait>` で外部から注入する
//! - **ライブラリクレート**: トランスポート（HTTP サーバー、キュー等）は
//!   呼び出し側が所有するため、このクレートはバイナリを持たない
//!
//! ## モジュール構成
//!
//! - [`bootstrap`] - 設定からのコラボレーター組み立て
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - サービス層エラーと分類コード
//! - [`usecase`] - 返品ステータス通知ユースケース

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod usecase;

pub use error::OperationError;
pub use usecase::return_status::{ReturnStatusDeps, ReturnStatusUseCase};
