//! # 販売店
//!
//! リセラープラットフォームにおける販売店（テナント）のモデル。
//!
//! ## 設計判断
//!
//! 返品ステータス通知の文脈では、販売店は「操作の実行主体となるテナント」
//! であり、オペレーション自体は存在の有無のみを参照する。通知の送信元
//! アドレスや宛先許可リストは販売店に紐づくが、それらの解決はインフラ層の
//! ディレクトリが担う。
//!
//! ## 使用例
//!
//! ```rust
//! use returnflow_domain::seller::{Seller, SellerId, SellerName};
//!
//! let seller = Seller::new(SellerId::new(42), SellerName::new("東都リユース")?);
//! assert_eq!(seller.id().as_u32(), 42);
//! # Ok::<(), returnflow_domain::DomainError>(())
//! ```

define_entity_id! {
    /// 販売店の一意識別子
    ///
    /// プラットフォーム全体で払い出される整数 ID。リクエストの
    /// `resellerId` に対応し、0 は「未指定」を意味する。
    pub struct SellerId;
}

define_validated_string! {
    /// 販売店名（値オブジェクト）
    ///
    /// # 不変条件
    ///
    /// - 空文字列ではない
    /// - 最大 255 文字
    pub struct SellerName {
        label: "販売店名",
        max_length: 255,
    }
}

/// 販売店エンティティ
///
/// 返品ステータス通知オペレーションが参照する最小構成（ID と名前のみ）。
///
/// # 不変条件
///
/// - `id` はプラットフォーム内で一意
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    id:   SellerId,
    name: SellerName,
}

impl Seller {
    /// 参照 API のレコードから販売店を復元する
    pub fn new(id: SellerId, name: SellerName) -> Self {
        Self { id, name }
    }

    /// 販売店 ID を取得する
    pub fn id(&self) -> SellerId {
        self.id
    }

    /// 販売店名を取得する
    pub fn name(&self) -> &SellerName {
        &self.name
    }
}
