//! 取引先ディレクトリ

use async_trait::async_trait;
use returnflow_domain::{
    contractor::{Contractor, ContractorId, ContractorName, ContractorType, NewContractor},
    seller::SellerId,
    value_objects::{Email, MobileNumber},
};
use serde::Deserialize;

use crate::error::InfraError;

/// 取引先ディレクトリトレイト
#[async_trait]
pub trait ContractorDirectory: Send + Sync {
    /// 取引先を ID で取得する
    ///
    /// 存在しない場合は `Ok(None)` を返す。種別や所属販売店の検証は
    /// 呼び出し側（ユースケースのバリデーター）が行う。
    async fn find_by_id(&self, id: ContractorId) -> Result<Option<Contractor>, InfraError>;
}

/// 参照 API の取引先レコード
///
/// 連絡先フィールドは空文字列でも返ってくるため、ドメインへの変換時に
/// 空を `None` へ正規化する。
#[derive(Debug, Deserialize)]
struct ContractorDto {
    id:              u32,
    contractor_type: String,
    seller_id:       u32,
    email:           Option<String>,
    mobile:          Option<String>,
    name:            String,
    full_name:       Option<String>,
}

impl ContractorDto {
    fn into_domain(self) -> Result<Contractor, InfraError> {
        let contractor_type: ContractorType = self
            .contractor_type
            .parse()
            .map_err(|_| InfraError::invalid_input(format!(
                "未知の取引先種別: {}",
                self.contractor_type
            )))?;

        let email = match non_empty(self.email) {
            Some(value) => Some(
                Email::new(value)
                    .map_err(|e| InfraError::invalid_input(format!("取引先レコード不正: {e}")))?,
            ),
            None => None,
        };
        let mobile = match non_empty(self.mobile) {
            Some(value) => Some(
                MobileNumber::new(value)
                    .map_err(|e| InfraError::invalid_input(format!("取引先レコード不正: {e}")))?,
            ),
            None => None,
        };

        let name = ContractorName::new(self.name)
            .map_err(|e| InfraError::invalid_input(format!("取引先レコード不正: {e}")))?;
        let full_name = match non_empty(self.full_name) {
            Some(value) => Some(
                ContractorName::new(value)
                    .map_err(|e| InfraError::invalid_input(format!("取引先レコード不正: {e}")))?,
            ),
            None => None,
        };

        Ok(Contractor::new(NewContractor {
            id: ContractorId::new(self.id),
            contractor_type,
            seller_id: SellerId::new(self.seller_id),
            email,
            mobile,
            name,
            full_name,
        }))
    }
}

/// 空文字列を None に正規化する
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// HTTP 取引先ディレクトリ
///
/// プラットフォーム参照 API の `GET /internal/contractors/{id}` を呼び出す。
#[derive(Clone)]
pub struct HttpContractorDirectory {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpContractorDirectory {
    /// 新しい取引先ディレクトリを作成する
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContractorDirectory for HttpContractorDirectory {
    async fn find_by_id(&self, id: ContractorId) -> Result<Option<Contractor>, InfraError> {
        let url = format!("{}/internal/contractors/{}", self.base_url, id);

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let dto: ContractorDto = response.error_for_status()?.json().await?;
        dto.into_domain().map(Some)
    }
}
