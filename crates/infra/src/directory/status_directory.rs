//! ステータスディレクトリ
//!
//! 整数のステータスコードを表示名へ解決する。

use async_trait::async_trait;
use returnflow_domain::status::{StatusCode, StatusName};
use serde::Deserialize;

use crate::error::InfraError;

/// ステータスディレクトリトレイト
#[async_trait]
pub trait StatusDirectory: Send + Sync {
    /// ステータスコードの表示名を取得する
    ///
    /// 未知のコードは `Ok(None)` を返す。
    async fn name_of(&self, code: StatusCode) -> Result<Option<StatusName>, InfraError>;
}

/// 参照 API のステータスレコード
#[derive(Debug, Deserialize)]
struct StatusDto {
    name: String,
}

/// HTTP ステータスディレクトリ
///
/// プラットフォーム参照 API の `GET /internal/statuses/{code}` を呼び出す。
#[derive(Clone)]
pub struct HttpStatusDirectory {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpStatusDirectory {
    /// 新しいステータスディレクトリを作成する
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl StatusDirectory for HttpStatusDirectory {
    async fn name_of(&self, code: StatusCode) -> Result<Option<StatusName>, InfraError> {
        let url = format!("{}/internal/statuses/{}", self.base_url, code);

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let dto: StatusDto = response.error_for_status()?.json().await?;
        let name = StatusName::new(dto.name)
            .map_err(|e| InfraError::invalid_input(format!("ステータスレコード不正: {e}")))?;
        Ok(Some(name))
    }
}
