//! # 取引先
//!
//! 返品クレームの当事者である取引先（顧客）のモデル。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Contractor`] | 取引先 | 顧客種別かつ当該販売店に属する場合のみ通知対象 |
//! | [`ContractorType`] | 取引先種別 | `customer`（顧客）/ `supplier`（仕入先） |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: ContractorId は整数 ID をラップし、型安全性を確保
//! - **表示名のフォールバック**: フルネームが未登録の場合は名称を使用
//! - **連絡先は Option**: メールアドレス・携帯電話番号の有無がそのまま
//!   通知チャネルの送信条件になる

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{
    seller::SellerId,
    value_objects::{Email, MobileNumber},
};

define_entity_id! {
    /// 取引先の一意識別子
    pub struct ContractorId;
}

define_validated_string! {
    /// 取引先の名称（値オブジェクト）
    ///
    /// # 不変条件
    ///
    /// - 空文字列ではない
    /// - 最大 255 文字
    pub struct ContractorName {
        label: "取引先名",
        max_length: 255,
    }
}

/// 取引先種別
///
/// 参照 API の `contractor_type` フィールドに格納される値。
/// snake_case でシリアライズされる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContractorType {
    /// 顧客: 返品ステータス通知の対象となる唯一の種別
    Customer,
    /// 仕入先: 通知対象外
    Supplier,
}

/// 取引先の生成パラメータ
///
/// フィールド数が多いため、ビルダー代わりのパラメータ構造体で受け取る。
#[derive(Debug, Clone)]
pub struct NewContractor {
    pub id:              ContractorId,
    pub contractor_type: ContractorType,
    pub seller_id:       SellerId,
    pub email:           Option<Email>,
    pub mobile:          Option<MobileNumber>,
    pub name:            ContractorName,
    pub full_name:       Option<ContractorName>,
}

/// 取引先エンティティ
///
/// # 不変条件
///
/// - `id` はプラットフォーム内で一意
/// - `seller_id` は取引先を所有する販売店を指す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contractor {
    id:              ContractorId,
    contractor_type: ContractorType,
    seller_id:       SellerId,
    email:           Option<Email>,
    mobile:          Option<MobileNumber>,
    name:            ContractorName,
    full_name:       Option<ContractorName>,
}

impl Contractor {
    /// 参照 API のレコードから取引先を復元する
    pub fn new(params: NewContractor) -> Self {
        Self {
            id:              params.id,
            contractor_type: params.contractor_type,
            seller_id:       params.seller_id,
            email:           params.email,
            mobile:          params.mobile,
            name:            params.name,
            full_name:       params.full_name,
        }
    }

    /// 取引先 ID を取得する
    pub fn id(&self) -> ContractorId {
        self.id
    }

    /// 取引先種別を取得する
    pub fn contractor_type(&self) -> ContractorType {
        self.contractor_type
    }

    /// 所有する販売店の ID を取得する
    pub fn seller_id(&self) -> SellerId {
        self.seller_id
    }

    /// メールアドレスを取得する（未登録なら None）
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// 携帯電話番号を取得する（未登録なら None）
    pub fn mobile(&self) -> Option<&MobileNumber> {
        self.mobile.as_ref()
    }

    /// 表示名を取得する
    ///
    /// フルネームが登録されていればフルネーム、なければ名称を返す。
    pub fn display_name(&self) -> &ContractorName {
        self.full_name.as_ref().unwrap_or(&self.name)
    }

    /// 顧客種別かどうか
    pub fn is_customer(&self) -> bool {
        self.contractor_type == ContractorType::Customer
    }

    /// 指定された販売店に属するかどうか
    pub fn belongs_to(&self, seller_id: SellerId) -> bool {
        self.seller_id == seller_id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_contractor(full_name: Option<&str>) -> Contractor {
        Contractor::new(NewContractor {
            id:              ContractorId::new(501),
            contractor_type: ContractorType::Customer,
            seller_id:       SellerId::new(10),
            email:           Some(Email::new("sato@example.com").unwrap()),
            mobile:          Some(MobileNumber::new("09012345678").unwrap()),
            name:            ContractorName::new("佐藤商店").unwrap(),
            full_name:       full_name.map(|n| ContractorName::new(n).unwrap()),
        })
    }

    #[test]
    fn test_表示名はフルネームを優先する() {
        let contractor = make_contractor(Some("佐藤花子"));
        assert_eq!(contractor.display_name().as_str(), "佐藤花子");
    }

    #[test]
    fn test_表示名はフルネーム未登録なら名称にフォールバックする() {
        let contractor = make_contractor(None);
        assert_eq!(contractor.display_name().as_str(), "佐藤商店");
    }

    #[test]
    fn test_所属販売店の判定が正しい() {
        let contractor = make_contractor(None);
        assert!(contractor.belongs_to(SellerId::new(10)));
        assert!(!contractor.belongs_to(SellerId::new(11)));
    }

    #[test]
    fn test_取引先種別の文字列変換が正しい() {
        use std::str::FromStr;

        assert_eq!(ContractorType::Customer.to_string(), "customer");
        assert_eq!(ContractorType::Supplier.to_string(), "supplier");
        assert_eq!(
            ContractorType::from_str("customer").unwrap(),
            ContractorType::Customer
        );
    }
}
