//! # 通知サービス設定
//!
//! 環境変数から通知サービスの設定を読み込む。

use std::env;

/// 通知サービスの設定
///
/// 送信バックエンドは環境変数で切り替える:
/// - `NOTIFICATION_BACKEND`: メール送信（"smtp" | "noop"）
/// - `SMS_BACKEND`: SMS 送信（"http" | "noop"）
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// メール送信バックエンド（"smtp" | "noop"）
    pub mail_backend:       String,
    /// SMTP ホスト（mail_backend=smtp の場合に使用）
    pub smtp_host:          String,
    /// SMTP ポート（mail_backend=smtp の場合に使用）
    pub smtp_port:          u16,
    /// SMS 送信バックエンド（"http" | "noop"）
    pub sms_backend:        String,
    /// SMS ゲートウェイのベース URL
    pub sms_gateway_url:    String,
    /// プラットフォーム参照 API のベース URL
    pub directory_base_url: String,
}

impl NotificationConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            mail_backend:       env::var("NOTIFICATION_BACKEND")
                .unwrap_or_else(|_| "noop".to_string()),
            smtp_host:          env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
            smtp_port:          env::var("SMTP_PORT")
                .unwrap_or_else(|_| "1025".to_string())
                .parse()
                .expect("SMTP_PORT は有効なポート番号である必要があります"),
            sms_backend:        env::var("SMS_BACKEND").unwrap_or_else(|_| "noop".to_string()),
            sms_gateway_url:    env::var("SMS_GATEWAY_URL")
                .unwrap_or_else(|_| "http://localhost:18090".to_string()),
            directory_base_url: env::var("DIRECTORY_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:13001".to_string()),
        }
    }
}
