//! 従業員への返品ステータス通知

use returnflow_domain::{
    notification::{NotificationEvent, NotificationPermit, OutboundEmail},
    seller::SellerId,
    template::TemplateData,
    value_objects::Email,
};
use returnflow_infra::{
    catalog::{MessageKey, MessageParams},
    messaging::DispatchTag,
};
use returnflow_shared::{event_log::event, log_business_event};

use super::ReturnStatusUseCase;
use crate::error::OperationError;

impl ReturnStatusUseCase {
    /// 返品イベントの受信を許可された従業員へメールを送る
    ///
    /// 送信元アドレスが未設定、または許可された宛先が存在しない場合は
    /// 何もしない。送信は fire-and-forget で、トランスポートの失敗は
    /// ログに記録するのみで処理を中断しない。
    ///
    /// 戻り値は「送信を試行したかどうか」。配達確認は行わない。
    pub(super) async fn notify_employees(
        &self,
        email_from: Option<&Email>,
        template_data: &TemplateData,
        seller_id: SellerId,
    ) -> Result<bool, OperationError> {
        let Some(email_from) = email_from else {
            return Ok(false);
        };

        let recipients = self
            .deps
            .sellers
            .emails_by_permit(seller_id, NotificationPermit::GoodsReturn)
            .await?;
        if recipients.is_empty() {
            return Ok(false);
        }

        let subject = self.deps.catalog.render(
            MessageKey::ComplaintEmployeeEmailSubject,
            Some(MessageParams::Template(template_data)),
            seller_id,
        )?;
        let message = self.deps.catalog.render(
            MessageKey::ComplaintEmployeeEmailBody,
            Some(MessageParams::Template(template_data)),
            seller_id,
        )?;

        let tag = DispatchTag::event_only(NotificationEvent::ChangeReturnStatus);
        for recipient in recipients {
            let email = OutboundEmail {
                email_from: email_from.clone(),
                email_to:   recipient,
                subject:    subject.clone(),
                message:    message.clone(),
            };
            let recipient_address = email.email_to.clone();

            match self.deps.messaging.send_batch(&[email], seller_id, &tag).await {
                Ok(()) => {
                    log_business_event!(
                        event.category = event::category::NOTIFICATION,
                        event.action = event::action::NOTIFICATION_SENT,
                        event.entity_type = event::entity_type::EMPLOYEE,
                        event.seller_id = %seller_id,
                        event.recipient = %recipient_address,
                        event.result = event::result::SUCCESS,
                        "従業員通知メールを送信"
                    );
                }
                Err(e) => {
                    log_business_event!(
                        event.category = event::category::NOTIFICATION,
                        event.action = event::action::NOTIFICATION_FAILED,
                        event.entity_type = event::entity_type::EMPLOYEE,
                        event.seller_id = %seller_id,
                        event.recipient = %recipient_address,
                        event.result = event::result::FAILURE,
                        error = %e,
                        "従業員通知メールの送信に失敗"
                    );
                }
            }
        }

        Ok(true)
    }
}
