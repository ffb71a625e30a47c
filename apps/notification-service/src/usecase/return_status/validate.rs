//! 返品イベントリクエストの検証

use returnflow_domain::{
    contractor::ContractorId,
    notification::{NotificationType, ReturnEventRequest},
    seller::SellerId,
};

use super::{ReturnStatusUseCase, ValidatedReturnEvent};
use crate::error::OperationError;

impl ReturnStatusUseCase {
    /// リクエストを検証し、型付きコンテキストへ解決する
    ///
    /// ## 検証内容
    ///
    /// 1. `resellerId` が非ゼロであること
    /// 2. `notificationType` が既知の種別コードであること
    /// 3. 販売店が存在すること
    /// 4. 顧客が存在し、顧客種別かつ当該販売店に属すること
    ///
    /// 4 は「存在しない」「種別不一致」「所属不一致」を区別せず、
    /// 単一の「顧客が見つかりません」エラーとして返す。
    pub(super) async fn validate(
        &self,
        request: &ReturnEventRequest,
    ) -> Result<ValidatedReturnEvent, OperationError> {
        if request.reseller_id == 0 {
            return Err(OperationError::BadRequest("resellerId が空です".to_string()));
        }

        let notification_type = NotificationType::from_code(request.notification_type)
            .ok_or_else(|| {
                OperationError::BadRequest("notificationType が空か不正です".to_string())
            })?;

        let seller_id = SellerId::new(request.reseller_id);
        let seller = self
            .deps
            .sellers
            .find_by_id(seller_id)
            .await?
            .ok_or_else(|| {
                OperationError::NotFound(format!("販売店が見つかりません: {seller_id}"))
            })?;

        let client_id = ContractorId::new(request.client_id);
        let client = self
            .deps
            .contractors
            .find_by_id(client_id)
            .await?
            .filter(|c| c.is_customer() && c.belongs_to(seller_id))
            .ok_or_else(|| {
                OperationError::NotFound(format!("顧客が見つかりません: {client_id}"))
            })?;

        Ok(ValidatedReturnEvent {
            notification_type,
            seller,
            client,
        })
    }
}
