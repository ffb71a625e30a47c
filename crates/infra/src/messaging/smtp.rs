//! SMTP メール送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 開発環境では Mailpit（ローカル SMTP サーバー）に接続する。

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Message, header::ContentType},
};
use returnflow_domain::{notification::OutboundEmail, seller::SellerId};

use super::{DispatchTag, MessagingClient};
use crate::error::InfraError;

/// SMTP メール送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// Mailpit（開発）や SMTP リレー（テスト環境）で使用する。
pub struct SmtpMessagingClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMessagingClient {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名（例: "localhost"）
    /// - `port`: SMTP サーバーのポート番号（例: 1025 for Mailpit）
    pub fn new(host: &str, port: u16) -> Self {
        // builder_dangerous: TLS なしで接続（Mailpit 等のローカル SMTP 向け）
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self { transport }
    }
}

#[async_trait]
impl MessagingClient for SmtpMessagingClient {
    async fn send_batch(
        &self,
        batch: &[OutboundEmail],
        seller_id: SellerId,
        tag: &DispatchTag,
    ) -> Result<(), InfraError> {
        for email in batch {
            let message = Message::builder()
                .from(email.email_from.as_str().parse().map_err(|e| {
                    InfraError::invalid_input(format!("送信元アドレス不正: {e}"))
                })?)
                .to(email.email_to.as_str().parse().map_err(|e| {
                    InfraError::invalid_input(format!("宛先アドレス不正: {e}"))
                })?)
                .subject(&email.subject)
                .header(ContentType::TEXT_PLAIN)
                .body(email.message.clone())
                .map_err(|e| InfraError::smtp(format!("メッセージ構築失敗: {e}")))?;

            self.transport
                .send(message)
                .await
                .map_err(|e| InfraError::smtp(format!("SMTP 送信失敗: {e}")))?;

            // ディスパッチタグは SMTP ヘッダには載せず、トレースにのみ記録する
            tracing::debug!(
                seller_id = %seller_id,
                event = %tag.event,
                to = %email.email_to,
                "通知メールを送信"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmtpMessagingClient>();
    }
}
