//! 従業員ディレクトリ

use async_trait::async_trait;
use returnflow_domain::employee::{Employee, EmployeeId, EmployeeName};
use serde::Deserialize;

use crate::error::InfraError;

/// 従業員ディレクトリトレイト
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// 従業員を ID で取得する
    ///
    /// 存在しない場合は `Ok(None)` を返す。
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError>;
}

/// 参照 API の従業員レコード
#[derive(Debug, Deserialize)]
struct EmployeeDto {
    id:   u32,
    name: String,
}

impl EmployeeDto {
    fn into_domain(self) -> Result<Employee, InfraError> {
        let name = EmployeeName::new(self.name)
            .map_err(|e| InfraError::invalid_input(format!("従業員レコード不正: {e}")))?;
        Ok(Employee::new(EmployeeId::new(self.id), name))
    }
}

/// HTTP 従業員ディレクトリ
///
/// プラットフォーム参照 API の `GET /internal/employees/{id}` を呼び出す。
#[derive(Clone)]
pub struct HttpEmployeeDirectory {
    base_url: String,
    client:   reqwest::Client,
}

impl HttpEmployeeDirectory {
    /// 新しい従業員ディレクトリを作成する
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmployeeDirectory for HttpEmployeeDirectory {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, InfraError> {
        let url = format!("{}/internal/employees/{}", self.base_url, id);

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let dto: EmployeeDto = response.error_for_status()?.json().await?;
        dto.into_domain().map(Some)
    }
}
