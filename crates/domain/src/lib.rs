//! # ReturnFlow ドメイン層
//!
//! 返品ステータス通知のビジネスロジックの中核を担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! このクレートは DDD（ドメイン駆動設計）の原則に従い、以下を提供する:
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: Seller, Contractor,
//!   Employee）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: Email,
//!   StatusCode）
//! - **純粋なドメインロジック**: テンプレートデータの構築と検証
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! notification-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（参照 API、SMTP、SMS ゲートウェイ）には
//! 一切依存しない。これにより、ビジネスロジックの純粋性が保たれる。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`seller`] - 販売店（プラットフォームのテナント）
//! - [`contractor`] - 取引先（返品クレームの当事者である顧客）
//! - [`employee`] - 従業員（担当者・検品担当）
//! - [`status`] - 返品ポジションのステータス
//! - [`notification`] - 通知イベント・リクエスト・結果
//! - [`template`] - 通知テンプレートデータ

#[macro_use]
mod macros;

pub mod contractor;
pub mod employee;
pub mod error;
pub mod notification;
pub mod seller;
pub mod status;
pub mod template;
pub mod value_objects;

pub use error::DomainError;
