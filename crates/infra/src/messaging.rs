//! # メッセージ送信
//!
//! 通知メールの送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`MessagingClient`] trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（Mailpit 開発用 / SMTP リレー）、Noop（テスト用）
//! - **fire-and-forget**: 送信の成否はユースケース側でログに畳み込まれ、
//!   オペレーションを中断しない

mod noop;
mod smtp;

use async_trait::async_trait;
pub use noop::NoopMessagingClient;
use returnflow_domain::{
    contractor::ContractorId,
    notification::{NotificationEvent, OutboundEmail},
    seller::SellerId,
    status::StatusCode,
};
pub use smtp::SmtpMessagingClient;

use crate::error::InfraError;

/// 送信ディスパッチに付与するタグ
///
/// すべての送信はイベント種別でタグ付けされる。顧客宛の送信は追加で
/// 顧客 ID と遷移先ステータスを持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTag {
    /// 通知イベント種別
    pub event:         NotificationEvent,
    /// 宛先の顧客 ID（顧客宛送信のみ）
    pub client_id:     Option<ContractorId>,
    /// 遷移先ステータス（顧客宛送信のみ）
    pub target_status: Option<StatusCode>,
}

impl DispatchTag {
    /// イベント種別のみのタグを作成する（従業員宛送信用）
    pub fn event_only(event: NotificationEvent) -> Self {
        Self {
            event,
            client_id: None,
            target_status: None,
        }
    }

    /// 顧客宛送信のタグを作成する
    pub fn for_client(
        event: NotificationEvent,
        client_id: ContractorId,
        target_status: StatusCode,
    ) -> Self {
        Self {
            event,
            client_id: Some(client_id),
            target_status: Some(target_status),
        }
    }
}

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// メールのバッチを送信する
    async fn send_batch(
        &self,
        batch: &[OutboundEmail],
        seller_id: SellerId,
        tag: &DispatchTag,
    ) -> Result<(), InfraError>;
}
