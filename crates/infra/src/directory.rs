//! # エンティティディレクトリ
//!
//! プラットフォームの参照 API からエンティティを取得するクライアント群。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケースは trait のみに依存し、実装は注入される
//! - **HTTP クライアントのカプセル化**: reqwest を使用し、参照 API 固有の
//!   パス・ペイロードをこのモジュール内に閉じ込める
//! - **存在しない = None**: 404 はエラーではなく `Ok(None)` として返す

pub mod contractor_directory;
pub mod employee_directory;
pub mod seller_directory;
pub mod status_directory;

pub use contractor_directory::{ContractorDirectory, HttpContractorDirectory};
pub use employee_directory::{EmployeeDirectory, HttpEmployeeDirectory};
pub use seller_directory::{HttpSellerDirectory, SellerDirectory};
pub use status_directory::{HttpStatusDirectory, StatusDirectory};
