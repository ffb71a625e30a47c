//! # ユースケース層
//!
//! 通知サービスのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: コラボレーターを `Arc<dyn Trait>` で外部から注入
//! - **線形な処理フロー**: 検証 → 差分解決 → テンプレート構築・検証 →
//!   従業員通知 → （条件付き）顧客通知、の一方向シーケンス
//!
//! ## モジュール構成
//!
//! - `return_status`: 返品ステータス通知ユースケース

pub mod return_status;

pub use return_status::{ReturnStatusDeps, ReturnStatusUseCase};
