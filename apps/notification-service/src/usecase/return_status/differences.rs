//! 差分メッセージの解決

use returnflow_domain::{
    notification::{NotificationType, StatusDifferences},
    seller::SellerId,
    status::StatusCode,
};
use returnflow_infra::catalog::{MessageKey, MessageParams};

use super::ReturnStatusUseCase;
use crate::error::OperationError;

impl ReturnStatusUseCase {
    /// 通知種別に応じた差分説明文を解決する
    ///
    /// - 新規: 固定の「新規ポジション追加」メッセージ。リクエストに差分
    ///   ブロックがあっても無視する
    /// - ステータス変更かつ差分ブロックあり: 遷移元・遷移先のステータス名で
    ///   パラメータ化した「ステータス変更」メッセージ。遷移先が未設定の
    ///   場合は空の名前でレンダリングする
    /// - それ以外: 空文字列（後段のテンプレート検証で必ず弾かれる）
    pub(super) async fn resolve_differences(
        &self,
        notification_type: NotificationType,
        differences: Option<&StatusDifferences>,
        seller_id: SellerId,
    ) -> Result<String, OperationError> {
        match (notification_type, differences) {
            (NotificationType::New, _) => Ok(self.deps.catalog.render(
                MessageKey::NewPositionAdded,
                None,
                seller_id,
            )?),
            (NotificationType::Change, Some(differences)) => {
                let from = self.status_name(differences.from).await?;
                let to = match differences.target() {
                    Some(code) => self.status_name(code).await?,
                    None => String::new(),
                };

                Ok(self.deps.catalog.render(
                    MessageKey::PositionStatusChanged,
                    Some(MessageParams::StatusTransition {
                        from: &from,
                        to:   &to,
                    }),
                    seller_id,
                )?)
            }
            (NotificationType::Change, None) => Ok(String::new()),
        }
    }

    /// ステータスコードを表示名へ解決する
    async fn status_name(&self, code: StatusCode) -> Result<String, OperationError> {
        let name = self.deps.statuses.name_of(code).await?.ok_or_else(|| {
            OperationError::NotFound(format!("ステータスが見つかりません: {code}"))
        })?;
        Ok(name.into_string())
    }
}
