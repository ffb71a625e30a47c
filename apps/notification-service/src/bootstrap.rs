//! # コラボレーター組み立て
//!
//! 設定からユースケースの依存一式を構築する。トランスポートを所有する
//! 呼び出し側は、この関数で組み立てたユースケースをそのまま使うか、
//! 個別のコラボレーターを差し替えて注入する。

use std::sync::Arc;

use returnflow_infra::{
    InfraError,
    catalog::TeraMessageCatalog,
    directory::{
        HttpContractorDirectory,
        HttpEmployeeDirectory,
        HttpSellerDirectory,
        HttpStatusDirectory,
    },
    messaging::{MessagingClient, NoopMessagingClient, SmtpMessagingClient},
    sms::{HttpSmsNotifier, NoopSmsNotifier, SmsNotifier},
};

use crate::{
    config::NotificationConfig,
    usecase::return_status::{ReturnStatusDeps, ReturnStatusUseCase},
};

/// 設定から返品ステータス通知ユースケースを構築する
pub fn build_usecase(config: &NotificationConfig) -> Result<ReturnStatusUseCase, InfraError> {
    let messaging: Arc<dyn MessagingClient> = match config.mail_backend.as_str() {
        "smtp" => Arc::new(SmtpMessagingClient::new(&config.smtp_host, config.smtp_port)),
        _ => Arc::new(NoopMessagingClient),
    };

    let sms: Arc<dyn SmsNotifier> = match config.sms_backend.as_str() {
        "http" => Arc::new(HttpSmsNotifier::new(&config.sms_gateway_url)),
        _ => Arc::new(NoopSmsNotifier),
    };

    Ok(ReturnStatusUseCase::new(ReturnStatusDeps {
        sellers: Arc::new(HttpSellerDirectory::new(&config.directory_base_url)),
        contractors: Arc::new(HttpContractorDirectory::new(&config.directory_base_url)),
        employees: Arc::new(HttpEmployeeDirectory::new(&config.directory_base_url)),
        statuses: Arc::new(HttpStatusDirectory::new(&config.directory_base_url)),
        catalog: Arc::new(TeraMessageCatalog::new()?),
        messaging,
        sms,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop構成でユースケースを構築できる() {
        let config = NotificationConfig {
            mail_backend:       "noop".to_string(),
            smtp_host:          "localhost".to_string(),
            smtp_port:          1025,
            sms_backend:        "noop".to_string(),
            sms_gateway_url:    "http://localhost:18090".to_string(),
            directory_base_url: "http://localhost:13001".to_string(),
        };

        assert!(build_usecase(&config).is_ok());
    }
}
