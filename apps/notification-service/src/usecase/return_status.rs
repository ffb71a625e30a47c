//! # 返品ステータス通知ユースケース
//!
//! 返品イベントリクエストを 1 件処理し、従業員・顧客への通知結果を返す。
//!
//! ## 処理フロー
//!
//! ```text
//! 検証 → 担当者解決 → 差分解決 → テンプレート構築 → テンプレート検証
//!      → 従業員通知 → [顧客通知] → 結果返却
//! ```
//!
//! ## 設計方針
//!
//! - **検証フェーズは即時中断**: テンプレート検証までの失敗はエラーとして
//!   返し、部分的な結果は返さない
//! - **送信フェーズはチャネル局所**: テンプレート検証を通過した後の失敗は
//!   チャネル単位で結果に畳み込まれ、オペレーションを中断しない
//! - **結果は値として合成**: 各通知ステップの戻り値から
//!   [`NotificationOutcome`] を一度だけ組み立てる

mod differences;
mod notify_client;
mod notify_employees;
mod validate;

use std::sync::Arc;

use returnflow_domain::{
    contractor::Contractor,
    employee::{Employee, EmployeeId},
    notification::{NotificationOutcome, NotificationType, ReturnEventRequest, SmsOutcome},
    seller::Seller,
    template::TemplateData,
};
use returnflow_infra::{
    catalog::MessageCatalog,
    directory::{ContractorDirectory, EmployeeDirectory, SellerDirectory, StatusDirectory},
    messaging::MessagingClient,
    sms::SmsNotifier,
};
use returnflow_shared::{event_log::event, log_business_event};

use crate::error::OperationError;

/// 検証済みの返品イベント
///
/// バリデーターを通過したリクエストから解決された型付きコンテキスト。
#[derive(Debug, Clone)]
pub struct ValidatedReturnEvent {
    pub notification_type: NotificationType,
    pub seller:            Seller,
    pub client:            Contractor,
}

/// 顧客向けチャネルの通知結果
///
/// 顧客通知ステップの戻り値。オペレーションが最終結果へ合成する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientChannels {
    pub by_email: bool,
    pub by_sms:   SmsOutcome,
}

/// ユースケースの依存一式
pub struct ReturnStatusDeps {
    pub sellers:     Arc<dyn SellerDirectory>,
    pub contractors: Arc<dyn ContractorDirectory>,
    pub employees:   Arc<dyn EmployeeDirectory>,
    pub statuses:    Arc<dyn StatusDirectory>,
    pub catalog:     Arc<dyn MessageCatalog>,
    pub messaging:   Arc<dyn MessagingClient>,
    pub sms:         Arc<dyn SmsNotifier>,
}

/// 返品ステータス通知ユースケース
///
/// 1 リクエストを同期的に（単一の await 連鎖で）処理する。並行送信・
/// リトライ・バッチングは行わない。
pub struct ReturnStatusUseCase {
    deps: ReturnStatusDeps,
}

impl ReturnStatusUseCase {
    /// 新しいユースケースを作成する
    pub fn new(deps: ReturnStatusDeps) -> Self {
        Self { deps }
    }

    /// 返品ステータスイベントを処理する
    ///
    /// ## 処理フロー
    ///
    /// 1. リクエストと参照エンティティの検証
    /// 2. 担当者・検品担当の解決
    /// 3. 差分メッセージの解決
    /// 4. テンプレートデータの構築と検証
    /// 5. 従業員へのメール通知
    /// 6. ステータス変更イベントで遷移先がある場合のみ、顧客への
    ///    メール・SMS 通知
    ///
    /// ## エラー
    ///
    /// - 入力値の検証失敗（400）
    /// - 販売店・顧客・従業員が見つからない（400）
    /// - テンプレートデータの整合性違反（500）
    /// - コラボレーターとの通信失敗（500）
    pub async fn execute(
        &self,
        request: ReturnEventRequest,
    ) -> Result<NotificationOutcome, OperationError> {
        // 1. 検証
        let context = self.validate(&request).await?;
        let seller_id = context.seller.id();

        // 2. 担当者・検品担当を解決
        let creator = self.find_employee(request.creator_id, "担当者").await?;
        let expert = self.find_employee(request.expert_id, "検品担当").await?;

        // 3. 差分メッセージを解決
        let differences = self
            .resolve_differences(
                context.notification_type,
                request.differences.as_ref(),
                seller_id,
            )
            .await?;

        // 4. テンプレートデータを構築・検証
        let template_data =
            TemplateData::build(&request, &context.client, &creator, &expert, differences);
        template_data.validate()?;

        // 5. 従業員通知
        let email_from = self.deps.sellers.email_from(seller_id).await?;
        let employee_by_email = self
            .notify_employees(email_from.as_ref(), &template_data, seller_id)
            .await?;

        // 6. 顧客通知（ステータス変更 + 遷移先ありの場合のみ）
        let target_status = request.differences.as_ref().and_then(|d| d.target());
        let client_channels = match (context.notification_type, target_status) {
            (NotificationType::Change, Some(target)) => {
                self.notify_client(
                    email_from.as_ref(),
                    &context.client,
                    &template_data,
                    seller_id,
                    target,
                )
                .await?
            }
            _ => ClientChannels::default(),
        };

        log_business_event!(
            event.category = event::category::RETURN,
            event.action = event::action::RETURN_STATUS_PROCESSED,
            event.entity_type = event::entity_type::RETURN_EVENT,
            event.entity_id = request.complaint_id,
            event.seller_id = %seller_id,
            event.result = event::result::SUCCESS,
            "返品ステータスイベント処理完了"
        );

        Ok(NotificationOutcome {
            employee_by_email,
            client_by_email: client_channels.by_email,
            client_by_sms: client_channels.by_sms,
        })
    }

    /// 従業員を解決する
    ///
    /// 見つからない場合は検証フェーズと同じ致命クラスのエラーになる。
    async fn find_employee(
        &self,
        raw_id: u32,
        label: &'static str,
    ) -> Result<Employee, OperationError> {
        let id = EmployeeId::new(raw_id);
        self.deps
            .employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| OperationError::NotFound(format!("{label}が見つかりません: {id}")))
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use returnflow_domain::notification::StatusDifferences;
    use returnflow_domain::status::StatusCode;

    use super::{test_helpers::*, *};

    #[tokio::test]
    async fn test_新規イベントは従業員のみに通知する() {
        // Arrange
        let world = TestWorld::seeded();
        let sut = world.build();

        // Act
        let outcome = sut.execute(make_new_request()).await.unwrap();

        // Assert
        let expected = NotificationOutcome {
            employee_by_email: true,
            client_by_email:   false,
            client_by_sms:     SmsOutcome::default(),
        };
        assert_eq!(outcome, expected);
        assert_eq!(world.messaging.sent_batches().len(), 1);
        assert!(world.sms.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ステータス変更イベントは顧客にも通知する() {
        // Arrange
        let world = TestWorld::seeded();
        let sut = world.build();

        // Act
        let outcome = sut.execute(make_change_request()).await.unwrap();

        // Assert
        let expected = NotificationOutcome {
            employee_by_email: true,
            client_by_email:   true,
            client_by_sms:     SmsOutcome {
                is_sent: true,
                message: String::new(),
            },
        };
        assert_eq!(outcome, expected);
        // 従業員宛 1 バッチ + 顧客宛 1 バッチ
        assert_eq!(world.messaging.sent_batches().len(), 2);
        assert_eq!(world.sms.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_遷移先のないステータス変更は顧客通知を行わない() {
        // Arrange
        let world = TestWorld::seeded();
        let sut = world.build();

        let request = ReturnEventRequest {
            differences: Some(StatusDifferences {
                from: StatusCode::new(1),
                to:   None,
            }),
            ..make_change_request()
        };

        // Act
        let outcome = sut.execute(request).await.unwrap();

        // Assert: 従業員通知のみ。顧客側の結果は初期値のまま
        assert!(outcome.employee_by_email);
        assert!(!outcome.client_by_email);
        assert_eq!(outcome.client_by_sms, SmsOutcome::default());
        assert_eq!(world.messaging.sent_batches().len(), 1);
        assert!(world.sms.calls().is_empty());
    }

    #[tokio::test]
    async fn test_担当者が見つからない場合は400で中断する() {
        // Arrange
        let world = TestWorld::seeded();
        let sut = world.build();

        let request = ReturnEventRequest {
            creator_id: 999,
            ..make_new_request()
        };

        // Act
        let error = sut.execute(request).await.unwrap_err();

        // Assert
        assert!(matches!(&error, OperationError::NotFound(_)));
        assert_eq!(error.status_code().as_u16(), 400);
        assert!(world.messaging.sent_batches().is_empty());
    }

    #[tokio::test]
    async fn test_日付が空の場合はテンプレート検証で中断する() {
        // Arrange
        let world = TestWorld::seeded();
        let sut = world.build();

        let request = ReturnEventRequest {
            date: String::new(),
            ..make_new_request()
        };

        // Act
        let error = sut.execute(request).await.unwrap_err();

        // Assert: DATE フィールドを名指しした 500 エラーで、通知は一切行われない
        assert!(matches!(&error, OperationError::IncompleteTemplate("DATE")));
        assert_eq!(error.status_code().as_u16(), 500);
        assert!(world.messaging.sent_batches().is_empty());
        assert!(world.sms.calls().is_empty());
    }
}
