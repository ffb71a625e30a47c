//! # SMS 通知送信
//!
//! SMS ゲートウェイ経由の顧客向け通知を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: [`SmsNotifier`] trait で SMS 送信を抽象化
//! - **ゲートウェイが宛先を解決**: 販売店 ID と顧客 ID を渡し、電話番号は
//!   ゲートウェイ側で解決される（PII をこの層から外へ出さない）
//! - **成否とエラーは独立**: ゲートウェイは送信フラグとエラーメッセージを
//!   別々に返す（[`SmsDispatch`]）

use async_trait::async_trait;
use returnflow_domain::{
    contractor::ContractorId,
    notification::NotificationEvent,
    seller::SellerId,
    status::StatusCode,
    template::TemplateData,
};
use serde::{Deserialize, Serialize};

use crate::error::InfraError;

/// SMS 送信結果
///
/// ゲートウェイの契約上、送信フラグとエラーメッセージは独立しており、
/// 両方が設定されるケースもある。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SmsDispatch {
    /// ゲートウェイが送信成功を報告したかどうか
    pub sent:  bool,
    /// ゲートウェイが返したエラーメッセージ
    pub error: Option<String>,
}

/// SMS 通知トレイト
#[async_trait]
pub trait SmsNotifier: Send + Sync {
    /// SMS 通知を送信する
    async fn send(
        &self,
        seller_id: SellerId,
        client_id: ContractorId,
        event: NotificationEvent,
        target_status: StatusCode,
        template_data: &TemplateData,
    ) -> Result<SmsDispatch, InfraError>;
}

/// SMS ゲートウェイへのリクエストペイロード
#[derive(Debug, Serialize)]
struct SmsRequest<'a> {
    seller_id:     u32,
    client_id:     u32,
    event:         &'a str,
    target_status: u32,
    template_data: serde_json::Value,
}

/// HTTP SMS 通知
///
/// SMS ゲートウェイの `POST /sms/notifications` を呼び出す。
#[derive(Clone)]
pub struct HttpSmsNotifier {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpSmsNotifier {
    /// 新しい SMS 通知インスタンスを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: SMS ゲートウェイのベース URL（例: `http://localhost:18090`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SmsNotifier for HttpSmsNotifier {
    async fn send(
        &self,
        seller_id: SellerId,
        client_id: ContractorId,
        event: NotificationEvent,
        target_status: StatusCode,
        template_data: &TemplateData,
    ) -> Result<SmsDispatch, InfraError> {
        let url = format!("{}/sms/notifications", self.base_url);
        let event: &'static str = event.into();
        let payload = SmsRequest {
            seller_id: seller_id.as_u32(),
            client_id: client_id.as_u32(),
            event,
            target_status: target_status.as_u32(),
            template_data: template_data.to_json(),
        };

        let response = self.client.post(&url).json(&payload).send().await?;
        let dispatch: SmsDispatch = response.error_for_status()?.json().await?;
        Ok(dispatch)
    }
}

/// Noop SMS 通知（ログ出力のみ）
///
/// 送信せずログのみ記録する。`sent` は false のまま返す。
#[derive(Debug, Clone)]
pub struct NoopSmsNotifier;

#[async_trait]
impl SmsNotifier for NoopSmsNotifier {
    async fn send(
        &self,
        seller_id: SellerId,
        client_id: ContractorId,
        event: NotificationEvent,
        _target_status: StatusCode,
        _template_data: &TemplateData,
    ) -> Result<SmsDispatch, InfraError> {
        tracing::info!(
            seller_id = %seller_id,
            client_id = %client_id,
            event = %event,
            "Noop: SMS 送信をスキップ"
        );
        Ok(SmsDispatch::default())
    }
}
