//! 顧客への返品ステータス通知

use returnflow_domain::{
    contractor::Contractor,
    notification::{NotificationEvent, OutboundEmail},
    seller::SellerId,
    status::StatusCode,
    template::TemplateData,
    value_objects::Email,
};
use returnflow_infra::{
    catalog::{MessageKey, MessageParams},
    messaging::DispatchTag,
};
use returnflow_shared::{event_log::event, log_business_event};

use super::{ClientChannels, ReturnStatusUseCase};
use crate::error::OperationError;

impl ReturnStatusUseCase {
    /// ステータス変更イベントの顧客通知（メール + SMS）
    ///
    /// ## メールチャネル
    ///
    /// 送信元アドレスと顧客メールアドレスの両方がある場合のみ送信する。
    /// `by_email` はディスパッチした時点で立てる（fire-and-forget、
    /// 配達確認はしない）。
    ///
    /// ## SMS チャネル
    ///
    /// 顧客の携帯番号が登録されている場合のみゲートウェイを呼び出す。
    /// `is_sent` はゲートウェイの成功フラグをそのまま写し、エラー
    /// メッセージは成功フラグと独立に `message` へ写す。ゲートウェイ
    /// 呼び出し自体の失敗もチャネル局所で、オペレーションは中断しない。
    pub(super) async fn notify_client(
        &self,
        email_from: Option<&Email>,
        client: &Contractor,
        template_data: &TemplateData,
        seller_id: SellerId,
        target_status: StatusCode,
    ) -> Result<ClientChannels, OperationError> {
        let mut channels = ClientChannels::default();

        // メールチャネル
        if let (Some(email_from), Some(client_email)) = (email_from, client.email()) {
            let subject = self.deps.catalog.render(
                MessageKey::ComplaintClientEmailSubject,
                Some(MessageParams::Template(template_data)),
                seller_id,
            )?;
            let message = self.deps.catalog.render(
                MessageKey::ComplaintClientEmailBody,
                Some(MessageParams::Template(template_data)),
                seller_id,
            )?;

            let tag = DispatchTag::for_client(
                NotificationEvent::ChangeReturnStatus,
                client.id(),
                target_status,
            );
            let email = OutboundEmail {
                email_from: email_from.clone(),
                email_to:   client_email.clone(),
                subject,
                message,
            };

            match self.deps.messaging.send_batch(&[email], seller_id, &tag).await {
                Ok(()) => {
                    log_business_event!(
                        event.category = event::category::NOTIFICATION,
                        event.action = event::action::NOTIFICATION_SENT,
                        event.entity_type = event::entity_type::CONTRACTOR,
                        event.entity_id = %client.id(),
                        event.seller_id = %seller_id,
                        event.result = event::result::SUCCESS,
                        "顧客通知メールを送信"
                    );
                }
                Err(e) => {
                    log_business_event!(
                        event.category = event::category::NOTIFICATION,
                        event.action = event::action::NOTIFICATION_FAILED,
                        event.entity_type = event::entity_type::CONTRACTOR,
                        event.entity_id = %client.id(),
                        event.seller_id = %seller_id,
                        event.result = event::result::FAILURE,
                        error = %e,
                        "顧客通知メールの送信に失敗"
                    );
                }
            }
            // ディスパッチした時点で成功扱い（配達確認はしない）
            channels.by_email = true;
        }

        // SMS チャネル
        if client.mobile().is_some() {
            match self
                .deps
                .sms
                .send(
                    seller_id,
                    client.id(),
                    NotificationEvent::ChangeReturnStatus,
                    target_status,
                    template_data,
                )
                .await
            {
                Ok(dispatch) => {
                    channels.by_sms.is_sent = dispatch.sent;
                    if let Some(error) = dispatch.error {
                        channels.by_sms.message = error;
                    }

                    let result = if channels.by_sms.is_sent {
                        event::result::SUCCESS
                    } else {
                        event::result::FAILURE
                    };
                    log_business_event!(
                        event.category = event::category::NOTIFICATION,
                        event.action = event::action::NOTIFICATION_SENT,
                        event.entity_type = event::entity_type::CONTRACTOR,
                        event.entity_id = %client.id(),
                        event.seller_id = %seller_id,
                        event.result = result,
                        "顧客 SMS 通知を送信"
                    );
                }
                Err(e) => {
                    channels.by_sms.message = e.to_string();
                    tracing::error!(
                        error.category = returnflow_shared::event_log::error::category::EXTERNAL_SERVICE,
                        error.kind = returnflow_shared::event_log::error::kind::SMS_GATEWAY,
                        error = %e,
                        "SMS ゲートウェイの呼び出しに失敗"
                    );
                }
            }
        }

        Ok(channels)
    }
}
