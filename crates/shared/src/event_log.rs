//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! ログを `jq` で効率的に調査できるよう、ログフィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## エラーコンテキスト
//!
//! 既存の `tracing::error!` に `error.category` + `error.kind` フィールドを直接追加する。
//! 定数は [`error`] モジュールで提供。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`error.kind`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.seller_id`: 販売店 ID
/// - `event.result`: 結果（[`event::result`] の定数を使用）
///
/// ## 推奨フィールド
///
/// - `event.entity_type`: エンティティ種別（[`event::entity_type`] の定数を使用）
/// - `event.entity_id`: エンティティ ID
/// - `event.recipient`: 通知の宛先
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const RETURN: &str = "return";
        pub const NOTIFICATION: &str = "notification";
    }

    /// イベントアクション
    pub mod action {
        // 返品イベント
        pub const RETURN_STATUS_PROCESSED: &str = "return_status.processed";

        // 通知
        pub const NOTIFICATION_SENT: &str = "notification.sent";
        pub const NOTIFICATION_FAILED: &str = "notification.failed";
        pub const NOTIFICATION_SKIPPED: &str = "notification.skipped";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const RETURN_EVENT: &str = "return_event";
        pub const SELLER: &str = "seller";
        pub const CONTRACTOR: &str = "contractor";
        pub const EMPLOYEE: &str = "employee";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// インフラストラクチャ（SMTP、テンプレートエンジン）
        pub const INFRASTRUCTURE: &str = "infrastructure";
        /// 外部サービス呼び出し（参照 API、SMS ゲートウェイ）
        pub const EXTERNAL_SERVICE: &str = "external_service";
    }

    /// エラー種別
    pub mod kind {
        pub const DIRECTORY_LOOKUP: &str = "directory_lookup";
        pub const MESSAGING: &str = "messaging";
        pub const SMS_GATEWAY: &str = "sms_gateway";
        pub const TEMPLATE: &str = "template";
    }
}
