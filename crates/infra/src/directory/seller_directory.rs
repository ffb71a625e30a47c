//! 販売店ディレクトリ
//!
//! 販売店の存在確認に加え、通知の送信元アドレスと宛先許可リストの
//! 解決もこのディレクトリが担う。

use async_trait::async_trait;
use returnflow_domain::{
    notification::NotificationPermit,
    seller::{Seller, SellerId, SellerName},
    value_objects::Email,
};
use serde::Deserialize;

use crate::error::InfraError;

/// 販売店ディレクトリトレイト
#[async_trait]
pub trait SellerDirectory: Send + Sync {
    /// 販売店を ID で取得する
    ///
    /// 存在しない場合は `Ok(None)` を返す。
    async fn find_by_id(&self, id: SellerId) -> Result<Option<Seller>, InfraError>;

    /// 販売店の通知送信元アドレスを取得する
    ///
    /// 未設定の場合は `Ok(None)` を返す（通知はスキップされる）。
    async fn email_from(&self, seller_id: SellerId) -> Result<Option<Email>, InfraError>;

    /// 指定の許可を持つ通知宛先メールアドレス一覧を取得する
    async fn emails_by_permit(
        &self,
        seller_id: SellerId,
        permit: NotificationPermit,
    ) -> Result<Vec<Email>, InfraError>;
}

/// 参照 API の販売店レコード
#[derive(Debug, Deserialize)]
struct SellerDto {
    id:   u32,
    name: String,
}

impl SellerDto {
    fn into_domain(self) -> Result<Seller, InfraError> {
        let name = SellerName::new(self.name)
            .map_err(|e| InfraError::invalid_input(format!("販売店レコード不正: {e}")))?;
        Ok(Seller::new(SellerId::new(self.id), name))
    }
}

/// 参照 API の通知設定レコード
#[derive(Debug, Deserialize)]
struct NotificationSettingsDto {
    email_from: Option<String>,
}

/// HTTP 販売店ディレクトリ
///
/// プラットフォーム参照 API の `/internal/sellers` 系エンドポイントを
/// 呼び出す。
#[derive(Clone)]
pub struct HttpSellerDirectory {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpSellerDirectory {
    /// 新しい販売店ディレクトリを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: 参照 API のベース URL（例: `http://localhost:13001`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SellerDirectory for HttpSellerDirectory {
    async fn find_by_id(&self, id: SellerId) -> Result<Option<Seller>, InfraError> {
        let url = format!("{}/internal/sellers/{}", self.base_url, id);

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let dto: SellerDto = response.error_for_status()?.json().await?;
        dto.into_domain().map(Some)
    }

    async fn email_from(&self, seller_id: SellerId) -> Result<Option<Email>, InfraError> {
        let url = format!(
            "{}/internal/sellers/{}/notification-settings",
            self.base_url, seller_id
        );

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let dto: NotificationSettingsDto = response.error_for_status()?.json().await?;
        match dto.email_from.filter(|v| !v.trim().is_empty()) {
            Some(address) => {
                let email = Email::new(address)
                    .map_err(|e| InfraError::invalid_input(format!("送信元アドレス不正: {e}")))?;
                Ok(Some(email))
            }
            None => Ok(None),
        }
    }

    async fn emails_by_permit(
        &self,
        seller_id: SellerId,
        permit: NotificationPermit,
    ) -> Result<Vec<Email>, InfraError> {
        let permit: &'static str = permit.into();
        let url = format!(
            "{}/internal/sellers/{}/permitted-emails?permit={}",
            self.base_url,
            seller_id,
            urlencoding::encode(permit),
        );

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let addresses: Vec<String> = response.error_for_status()?.json().await?;
        addresses
            .into_iter()
            .map(|address| {
                Email::new(address)
                    .map_err(|e| InfraError::invalid_input(format!("宛先アドレス不正: {e}")))
            })
            .collect()
    }
}
