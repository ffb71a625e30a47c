//! # メッセージカタログ
//!
//! テンプレートキーと販売店 ID から、ローカライズ済みのメッセージ文字列を
//! レンダリングする。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **trait による抽象化**: ユースケースは [`MessageCatalog`] のみに依存する
//! - **販売店 ID は契約の一部**: 既定実装は共通テンプレートを返すが、
//!   販売店別の上書きが将来この seam で差し込まれる

use returnflow_domain::{seller::SellerId, template::TemplateData};
use strum::IntoStaticStr;
use tera::{Context, Tera};

use crate::error::InfraError;

/// メッセージキー
///
/// テンプレートファイル名（snake_case）と一対一に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum MessageKey {
    /// 「新しい返品ポジションが追加された」差分メッセージ（パラメータなし）
    NewPositionAdded,
    /// 「ステータスが変更された」差分メッセージ（FROM / TO 名で
    /// パラメータ化）
    PositionStatusChanged,
    /// 従業員宛メールの件名
    ComplaintEmployeeEmailSubject,
    /// 従業員宛メールの本文
    ComplaintEmployeeEmailBody,
    /// 顧客宛メールの件名
    ComplaintClientEmailSubject,
    /// 顧客宛メールの本文
    ComplaintClientEmailBody,
}

/// レンダリングパラメータ
///
/// 差分メッセージはステータス遷移の表示名ペア、メール件名・本文は
/// テンプレートデータ全体を受け取る。
#[derive(Debug, Clone)]
pub enum MessageParams<'a> {
    /// ステータス遷移（FROM / TO の表示名）
    StatusTransition { from: &'a str, to: &'a str },
    /// テンプレートデータ全体
    Template(&'a TemplateData),
}

/// メッセージカタログトレイト
///
/// `(テンプレートキー, パラメータ or なし, 販売店 ID) → 文字列` の
/// ローカライズ・レンダリング契約。
pub trait MessageCatalog: Send + Sync {
    /// メッセージをレンダリングする
    fn render(
        &self,
        key: MessageKey,
        params: Option<MessageParams<'_>>,
        seller_id: SellerId,
    ) -> Result<String, InfraError>;
}

/// tera ベースのメッセージカタログ
///
/// `templates/messages/` 以下のテンプレートをコンパイル時に埋め込む。
pub struct TeraMessageCatalog {
    engine: Tera,
}

impl TeraMessageCatalog {
    /// 新しいカタログインスタンスを作成する
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, InfraError> {
        let mut engine = Tera::default();

        engine.add_raw_templates(vec![
            (
                "new_position_added",
                include_str!("../templates/messages/new_position_added.txt"),
            ),
            (
                "position_status_changed",
                include_str!("../templates/messages/position_status_changed.txt"),
            ),
            (
                "complaint_employee_email_subject",
                include_str!("../templates/messages/complaint_employee_email_subject.txt"),
            ),
            (
                "complaint_employee_email_body",
                include_str!("../templates/messages/complaint_employee_email_body.txt"),
            ),
            (
                "complaint_client_email_subject",
                include_str!("../templates/messages/complaint_client_email_subject.txt"),
            ),
            (
                "complaint_client_email_body",
                include_str!("../templates/messages/complaint_client_email_body.txt"),
            ),
        ])?;

        Ok(Self { engine })
    }

    fn build_context(params: Option<MessageParams<'_>>) -> Result<Context, InfraError> {
        match params {
            None => Ok(Context::new()),
            Some(MessageParams::StatusTransition { from, to }) => {
                let mut context = Context::new();
                context.insert("FROM", from);
                context.insert("TO", to);
                Ok(context)
            }
            Some(MessageParams::Template(data)) => {
                Context::from_value(data.to_json()).map_err(Into::into)
            }
        }
    }
}

impl MessageCatalog for TeraMessageCatalog {
    fn render(
        &self,
        key: MessageKey,
        params: Option<MessageParams<'_>>,
        _seller_id: SellerId,
    ) -> Result<String, InfraError> {
        let template_name: &'static str = key.into();
        let context = Self::build_context(params)?;

        let rendered = self.engine.render(template_name, &context)?;
        // 件名テンプレートなどの末尾改行を除去する
        Ok(rendered.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use returnflow_domain::{
        contractor::{Contractor, ContractorId, ContractorName, ContractorType, NewContractor},
        employee::{Employee, EmployeeId, EmployeeName},
        notification::ReturnEventRequest,
        value_objects::Email,
    };

    use super::*;

    fn seller_id() -> SellerId {
        SellerId::new(10)
    }

    fn make_template_data() -> TemplateData {
        let request = ReturnEventRequest {
            reseller_id:        10,
            notification_type:  2,
            client_id:          501,
            creator_id:         21,
            expert_id:          22,
            complaint_id:       7001,
            complaint_number:   "CMP-7001".to_string(),
            consumption_id:     8001,
            consumption_number: "CSN-8001".to_string(),
            agreement_number:   "AGR-9001".to_string(),
            date:               "2024-06-01".to_string(),
            differences:        None,
        };
        let client = Contractor::new(NewContractor {
            id:              ContractorId::new(501),
            contractor_type: ContractorType::Customer,
            seller_id:       seller_id(),
            email:           Some(Email::new("sato@example.com").unwrap()),
            mobile:          None,
            name:            ContractorName::new("佐藤商店").unwrap(),
            full_name:       Some(ContractorName::new("佐藤花子").unwrap()),
        });
        let creator = Employee::new(EmployeeId::new(21), EmployeeName::new("田中太郎").unwrap());
        let expert = Employee::new(EmployeeId::new(22), EmployeeName::new("鈴木一郎").unwrap());

        TemplateData::build(
            &request,
            &client,
            &creator,
            &expert,
            "返品ステータスが「受付済」から「検品中」に変更されました。".to_string(),
        )
    }

    #[test]
    fn test_newが正常に初期化される() {
        assert!(TeraMessageCatalog::new().is_ok());
    }

    #[test]
    fn test_新規ポジションメッセージはパラメータなしでレンダリングされる() {
        let catalog = TeraMessageCatalog::new().unwrap();

        let message = catalog
            .render(MessageKey::NewPositionAdded, None, seller_id())
            .unwrap();

        assert_eq!(message, "新しい返品ポジションが追加されました。");
    }

    #[test]
    fn test_ステータス変更メッセージは遷移名でパラメータ化される() {
        let catalog = TeraMessageCatalog::new().unwrap();

        let message = catalog
            .render(
                MessageKey::PositionStatusChanged,
                Some(MessageParams::StatusTransition {
                    from: "受付済",
                    to:   "検品中",
                }),
                seller_id(),
            )
            .unwrap();

        assert_eq!(
            message,
            "返品ステータスが「受付済」から「検品中」に変更されました。"
        );
    }

    #[test]
    fn test_従業員宛件名はクレーム番号を含む() {
        let catalog = TeraMessageCatalog::new().unwrap();
        let data = make_template_data();

        let subject = catalog
            .render(
                MessageKey::ComplaintEmployeeEmailSubject,
                Some(MessageParams::Template(&data)),
                seller_id(),
            )
            .unwrap();

        assert!(subject.contains("CMP-7001"));
        assert!(!subject.contains('\n'));
    }

    #[test]
    fn test_従業員宛本文は全フィールドを含む() {
        let catalog = TeraMessageCatalog::new().unwrap();
        let data = make_template_data();

        let body = catalog
            .render(
                MessageKey::ComplaintEmployeeEmailBody,
                Some(MessageParams::Template(&data)),
                seller_id(),
            )
            .unwrap();

        assert!(body.contains("CMP-7001"));
        assert!(body.contains("田中太郎"));
        assert!(body.contains("鈴木一郎"));
        assert!(body.contains("佐藤花子"));
        assert!(body.contains("CSN-8001"));
        assert!(body.contains("AGR-9001"));
        assert!(body.contains("2024-06-01"));
        assert!(body.contains("検品中"));
    }

    #[test]
    fn test_顧客宛本文は顧客名と差分を含む() {
        let catalog = TeraMessageCatalog::new().unwrap();
        let data = make_template_data();

        let body = catalog
            .render(
                MessageKey::ComplaintClientEmailBody,
                Some(MessageParams::Template(&data)),
                seller_id(),
            )
            .unwrap();

        assert!(body.contains("佐藤花子"));
        assert!(body.contains("CMP-7001"));
        assert!(body.contains("変更されました"));
    }

    #[test]
    fn test_メッセージキーの文字列変換が正しい() {
        assert_eq!(
            MessageKey::NewPositionAdded.to_string(),
            "new_position_added"
        );
        assert_eq!(
            MessageKey::ComplaintClientEmailSubject.to_string(),
            "complaint_client_email_subject"
        );
    }
}
