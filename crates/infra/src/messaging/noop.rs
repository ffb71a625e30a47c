//! Noop メール送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! テスト環境や通知無効化時に使用する。

use async_trait::async_trait;
use returnflow_domain::{notification::OutboundEmail, seller::SellerId};

use super::{DispatchTag, MessagingClient};
use crate::error::InfraError;

/// Noop メール送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopMessagingClient;

#[async_trait]
impl MessagingClient for NoopMessagingClient {
    async fn send_batch(
        &self,
        batch: &[OutboundEmail],
        seller_id: SellerId,
        tag: &DispatchTag,
    ) -> Result<(), InfraError> {
        tracing::info!(
            seller_id = %seller_id,
            event = %tag.event,
            count = batch.len(),
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use returnflow_domain::{notification::NotificationEvent, value_objects::Email};

    use super::*;

    #[tokio::test]
    async fn test_send_batchがエラーを返さない() {
        let client = NoopMessagingClient;
        let email = OutboundEmail {
            email_from: Email::new("noreply@example.com").unwrap(),
            email_to:   Email::new("manager@example.com").unwrap(),
            subject:    "テスト件名".to_string(),
            message:    "テスト本文".to_string(),
        };
        let tag = DispatchTag::event_only(NotificationEvent::ChangeReturnStatus);

        let result = client.send_batch(&[email], SellerId::new(10), &tag).await;
        assert!(result.is_ok());
    }
}
