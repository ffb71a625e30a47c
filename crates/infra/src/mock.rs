//! # テスト用モックコラボレーター
//!
//! ユースケーステストで使用するインメモリのモック実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! returnflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use returnflow_domain::{
    contractor::{Contractor, ContractorId},
    employee::{Employee, EmployeeId},
    notification::{NotificationEvent, NotificationPermit, OutboundEmail},
    seller::{Seller, SellerId},
    status::{StatusCode, StatusName},
    template::TemplateData,
    value_objects::Email,
};

use crate::{
    catalog::{MessageCatalog, MessageKey, MessageParams},
    directory::{ContractorDirectory, EmployeeDirectory, SellerDirectory, StatusDirectory},
    error::InfraError,
    messaging::{DispatchTag, MessagingClient},
    sms::{SmsDispatch, SmsNotifier},
};

// ===== MockSellerDirectory =====

#[derive(Clone, Default)]
pub struct MockSellerDirectory {
    sellers:    Arc<Mutex<Vec<Seller>>>,
    email_from: Arc<Mutex<HashMap<u32, Email>>>,
    permitted:  Arc<Mutex<HashMap<u32, Vec<Email>>>>,
}

impl MockSellerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_seller(&self, seller: Seller) {
        self.sellers.lock().unwrap().push(seller);
    }

    pub fn set_email_from(&self, seller_id: SellerId, email: Email) {
        self.email_from
            .lock()
            .unwrap()
            .insert(seller_id.as_u32(), email);
    }

    pub fn add_permitted_email(&self, seller_id: SellerId, email: Email) {
        self.permitted
            .lock()
            .unwrap()
            .entry(seller_id.as_u32())
            .or_default()
            .push(email);
    }
}

#[async_trait]
impl SellerDirectory for MockSellerDirectory {
    async fn find_by_id(&self, id: SellerId) -> Result<Option<Seller>, InfraError> {
        Ok(self
            .sellers
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn email_from(&self, seller_id: SellerId) -> Result<Option<Email>, InfraError> {
        Ok(self
            .email_from
            .lock()
            .unwrap()
            .get(&seller_id.as_u32())
            .cloned())
    }

    async fn emails_by_permit(
        &self,
        seller_id: SellerId,
        _permit: NotificationPermit,
    ) -> Result<Vec<Email>, InfraError> {
        Ok(self
            .permitted
            .lock()
            .unwrap()
            .get(&seller_id.as_u32())
            .cloned()
            .unwrap_or_default())
    }
}

// ===== MockContractorDirectory =====

#[derive(Clone, Default)]
pub struct MockContractorDirectory {
    contractors: Arc<Mutex<Vec<Contractor>>>,
}

impl MockContractorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contractor(&self, contractor: Contractor) {
        self.contractors.lock().unwrap().push(contractor);
    }
}

#[async_trait]
impl ContractorDirectory for MockContractorDirectory {
    async fn find_by_id(&self, id: ContractorId) -> Result<Option<Contractor>, InfraError> {
        Ok(self
            .contractors
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }
}

// ===== MockEmployeeDirectory =====

#[derive(Clone, Default)]
pub struct MockEmployeeDirectory {
    employees: Arc<Mutex<Vec<Employee>>>,
}

impl MockEmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_employee(&self, employee: Employee) {
        self.employees.lock().unwrap().push(employee);
    }
}

#[async_trait]
impl EmployeeDirectory for MockEmployeeDirectory {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        Ok(self
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id() == id)
            .cloned())
    }
}

// ===== MockStatusDirectory =====

#[derive(Clone, Default)]
pub struct MockStatusDirectory {
    names: Arc<Mutex<HashMap<u32, StatusName>>>,
}

impl MockStatusDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_status(&self, code: StatusCode, name: StatusName) {
        self.names.lock().unwrap().insert(code.as_u32(), name);
    }
}

#[async_trait]
impl StatusDirectory for MockStatusDirectory {
    async fn name_of(&self, code: StatusCode) -> Result<Option<StatusName>, InfraError> {
        Ok(self.names.lock().unwrap().get(&code.as_u32()).cloned())
    }
}

// ===== MockMessagingClient =====

/// 送信されたメールバッチの記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentBatch {
    pub emails:    Vec<OutboundEmail>,
    pub seller_id: SellerId,
    pub tag:       DispatchTag,
}

/// テスト用のモック MessagingClient
///
/// 送信されたバッチを記録する。`set_failure` で送信失敗を再現できる。
#[derive(Clone, Default)]
pub struct MockMessagingClient {
    sent:    Arc<Mutex<Vec<SentBatch>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockMessagingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みの送信バッチを取得する
    pub fn sent_batches(&self) -> Vec<SentBatch> {
        self.sent.lock().unwrap().clone()
    }

    /// 以降の送信をすべて失敗させる
    pub fn set_failure(&self, msg: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(msg.into());
    }
}

#[async_trait]
impl MessagingClient for MockMessagingClient {
    async fn send_batch(
        &self,
        batch: &[OutboundEmail],
        seller_id: SellerId,
        tag: &DispatchTag,
    ) -> Result<(), InfraError> {
        if let Some(msg) = self.failure.lock().unwrap().clone() {
            return Err(InfraError::smtp(msg));
        }

        self.sent.lock().unwrap().push(SentBatch {
            emails: batch.to_vec(),
            seller_id,
            tag: tag.clone(),
        });
        Ok(())
    }
}

// ===== MockSmsNotifier =====

/// SMS 送信呼び出しの記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsCall {
    pub seller_id:     SellerId,
    pub client_id:     ContractorId,
    pub event:         NotificationEvent,
    pub target_status: StatusCode,
}

/// テスト用のモック SmsNotifier
///
/// 呼び出しを記録し、設定された応答を返す。既定では送信成功を報告する。
#[derive(Clone)]
pub struct MockSmsNotifier {
    response: Arc<Mutex<SmsDispatch>>,
    failure:  Arc<Mutex<Option<String>>>,
    calls:    Arc<Mutex<Vec<SmsCall>>>,
}

impl Default for MockSmsNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSmsNotifier {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(SmsDispatch {
                sent:  true,
                error: None,
            })),
            failure:  Arc::new(Mutex::new(None)),
            calls:    Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// ゲートウェイの応答を設定する
    pub fn respond_with(&self, dispatch: SmsDispatch) {
        *self.response.lock().unwrap() = dispatch;
    }

    /// 以降の呼び出しをトランスポートレベルで失敗させる
    pub fn fail_with(&self, msg: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(msg.into());
    }

    /// 記録済みの呼び出しを取得する
    pub fn calls(&self) -> Vec<SmsCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsNotifier for MockSmsNotifier {
    async fn send(
        &self,
        seller_id: SellerId,
        client_id: ContractorId,
        event: NotificationEvent,
        target_status: StatusCode,
        _template_data: &TemplateData,
    ) -> Result<SmsDispatch, InfraError> {
        self.calls.lock().unwrap().push(SmsCall {
            seller_id,
            client_id,
            event,
            target_status,
        });

        if let Some(msg) = self.failure.lock().unwrap().clone() {
            return Err(InfraError::unexpected(msg));
        }

        Ok(self.response.lock().unwrap().clone())
    }
}

// ===== StaticMessageCatalog =====

/// テスト用の固定文字列カタログ
///
/// レンダリング結果をキーごとに固定文字列で返す。tera を経由せず、
/// カタログ呼び出し自体を検証したいテストで使用する。
/// 通常のユースケーステストでは実物の `TeraMessageCatalog` を使えばよい。
#[derive(Clone, Default)]
pub struct StaticMessageCatalog {
    messages: Arc<Mutex<HashMap<&'static str, String>>>,
}

impl StaticMessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// キーに対する固定のレンダリング結果を設定する
    pub fn set_message(&self, key: MessageKey, message: impl Into<String>) {
        self.messages
            .lock()
            .unwrap()
            .insert(key.into(), message.into());
    }
}

impl MessageCatalog for StaticMessageCatalog {
    fn render(
        &self,
        key: MessageKey,
        _params: Option<MessageParams<'_>>,
        _seller_id: SellerId,
    ) -> Result<String, InfraError> {
        let key_str: &'static str = key.into();
        self.messages
            .lock()
            .unwrap()
            .get(key_str)
            .cloned()
            .ok_or_else(|| InfraError::template(format!("未登録のメッセージキー: {key_str}")))
    }
}
