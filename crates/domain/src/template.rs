//! # 通知テンプレートデータ
//!
//! 通知メール・SMS のレンダリングに使用するフラットなキー・値ペイロード。
//!
//! ## 設計方針
//!
//! - **固定キー**: 13 個のフィールドを [`TemplateField`] で型安全に列挙
//! - **順序保証**: [`TemplateData::fields`] は宣言順でフィールドを返す
//! - **送信前の整合性ゲート**: [`TemplateData::validate`] が空フィールドを
//!   検出した場合、通知は一切送信されない

use strum::IntoStaticStr;

use crate::{
    DomainError, contractor::Contractor, employee::Employee, notification::ReturnEventRequest,
};

/// テンプレートフィールドのキー
///
/// ワイヤ表現は SCREAMING_SNAKE_CASE（例: `COMPLAINT_ID`）。
/// 列挙順が [`TemplateData::fields`] の返却順になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateField {
    ComplaintId,
    ComplaintNumber,
    CreatorId,
    CreatorName,
    ExpertId,
    ExpertName,
    ClientId,
    ClientName,
    ConsumptionId,
    ConsumptionNumber,
    AgreementNumber,
    Date,
    Differences,
}

/// テンプレートフィールドの値
///
/// 数値フィールドは整数、文字列フィールドは文字列に正規化される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    Int(u32),
    Text(String),
}

impl TemplateValue {
    /// 値が「空」かどうか
    ///
    /// 整数の 0、空白のみの文字列を空として扱う。
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Int(value) => *value == 0,
            Self::Text(value) => value.trim().is_empty(),
        }
    }

    /// JSON 値へ変換する
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Int(value) => serde_json::Value::from(*value),
            Self::Text(value) => serde_json::Value::from(value.as_str()),
        }
    }
}

impl std::fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// 通知テンプレートデータ
///
/// リクエストと解決済みエンティティから一度だけ構築される不変のペイロード。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    complaint_id:       u32,
    complaint_number:   String,
    creator_id:         u32,
    creator_name:       String,
    expert_id:          u32,
    expert_name:        String,
    client_id:          u32,
    client_name:        String,
    consumption_id:     u32,
    consumption_number: String,
    agreement_number:   String,
    date:               String,
    differences:        String,
}

impl TemplateData {
    /// テンプレートデータを構築する（純粋関数）
    ///
    /// 顧客の表示名はフルネーム優先・名称フォールバック
    /// （[`Contractor::display_name`]）で解決する。
    pub fn build(
        request: &ReturnEventRequest,
        client: &Contractor,
        creator: &Employee,
        expert: &Employee,
        differences: String,
    ) -> Self {
        Self {
            complaint_id: request.complaint_id,
            complaint_number: request.complaint_number.clone(),
            creator_id: request.creator_id,
            creator_name: creator.full_name().to_string(),
            expert_id: request.expert_id,
            expert_name: expert.full_name().to_string(),
            client_id: request.client_id,
            client_name: client.display_name().as_str().to_string(),
            consumption_id: request.consumption_id,
            consumption_number: request.consumption_number.clone(),
            agreement_number: request.agreement_number.clone(),
            date: request.date.clone(),
            differences,
        }
    }

    /// 全フィールドを宣言順で返す
    pub fn fields(&self) -> Vec<(TemplateField, TemplateValue)> {
        vec![
            (
                TemplateField::ComplaintId,
                TemplateValue::Int(self.complaint_id),
            ),
            (
                TemplateField::ComplaintNumber,
                TemplateValue::Text(self.complaint_number.clone()),
            ),
            (TemplateField::CreatorId, TemplateValue::Int(self.creator_id)),
            (
                TemplateField::CreatorName,
                TemplateValue::Text(self.creator_name.clone()),
            ),
            (TemplateField::ExpertId, TemplateValue::Int(self.expert_id)),
            (
                TemplateField::ExpertName,
                TemplateValue::Text(self.expert_name.clone()),
            ),
            (TemplateField::ClientId, TemplateValue::Int(self.client_id)),
            (
                TemplateField::ClientName,
                TemplateValue::Text(self.client_name.clone()),
            ),
            (
                TemplateField::ConsumptionId,
                TemplateValue::Int(self.consumption_id),
            ),
            (
                TemplateField::ConsumptionNumber,
                TemplateValue::Text(self.consumption_number.clone()),
            ),
            (
                TemplateField::AgreementNumber,
                TemplateValue::Text(self.agreement_number.clone()),
            ),
            (TemplateField::Date, TemplateValue::Text(self.date.clone())),
            (
                TemplateField::Differences,
                TemplateValue::Text(self.differences.clone()),
            ),
        ]
    }

    /// 全フィールドが非空であることを検証する
    ///
    /// 宣言順で走査し、最初に見つかった空フィールドを
    /// [`DomainError::IncompleteTemplate`] として返す。
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in self.fields() {
            if value.is_empty() {
                return Err(DomainError::IncompleteTemplate {
                    field: field.into(),
                });
            }
        }
        Ok(())
    }

    /// キー・値の JSON オブジェクトへ変換する
    ///
    /// SMS ゲートウェイのペイロードやテンプレートエンジンの
    /// コンテキスト構築に使用する。
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (field, value) in self.fields() {
            let key: &'static str = field.into();
            map.insert(key.to_string(), value.to_json());
        }
        serde_json::Value::Object(map)
    }

    /// 差分メッセージを取得する
    pub fn differences(&self) -> &str {
        &self.differences
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        contractor::{ContractorId, ContractorName, ContractorType, NewContractor},
        employee::{EmployeeId, EmployeeName},
        seller::SellerId,
        value_objects::Email,
    };

    fn make_request() -> ReturnEventRequest {
        ReturnEventRequest {
            reseller_id:        10,
            notification_type:  1,
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
        }
    }

    fn make_client(full_name: Option<&str>) -> Contractor {
        Contractor::new(NewContractor {
            id:              ContractorId::new(501),
            contractor_type: ContractorType::Customer,
            seller_id:       SellerId::new(10),
            email:           Some(Email::new("sato@example.com").unwrap()),
            mobile:          None,
            name:            ContractorName::new("佐藤商店").unwrap(),
            full_name:       full_name.map(|n| ContractorName::new(n).unwrap()),
        })
    }

    fn make_employee(id: u32, name: &str) -> Employee {
        Employee::new(EmployeeId::new(id), EmployeeName::new(name).unwrap())
    }

    fn build_data(request: &ReturnEventRequest) -> TemplateData {
        TemplateData::build(
            request,
            &make_client(Some("佐藤花子")),
            &make_employee(21, "田中太郎"),
            &make_employee(22, "鈴木一郎"),
            "新しい返品ポジションが追加されました。".to_string(),
        )
    }

    #[test]
    fn test_buildは全フィールドを正しくマッピングする() {
        let data = build_data(&make_request());
        let fields: Vec<(String, String)> = data
            .fields()
            .into_iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();

        assert_eq!(
            fields,
            vec![
                ("COMPLAINT_ID".to_string(), "7001".to_string()),
                ("COMPLAINT_NUMBER".to_string(), "CMP-7001".to_string()),
                ("CREATOR_ID".to_string(), "21".to_string()),
                ("CREATOR_NAME".to_string(), "田中太郎".to_string()),
                ("EXPERT_ID".to_string(), "22".to_string()),
                ("EXPERT_NAME".to_string(), "鈴木一郎".to_string()),
                ("CLIENT_ID".to_string(), "501".to_string()),
                ("CLIENT_NAME".to_string(), "佐藤花子".to_string()),
                ("CONSUMPTION_ID".to_string(), "8001".to_string()),
                ("CONSUMPTION_NUMBER".to_string(), "CSN-8001".to_string()),
                ("AGREEMENT_NUMBER".to_string(), "AGR-9001".to_string()),
                ("DATE".to_string(), "2024-06-01".to_string()),
                (
                    "DIFFERENCES".to_string(),
                    "新しい返品ポジションが追加されました。".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_buildはフルネーム未登録の顧客で名称にフォールバックする() {
        let request = make_request();
        let data = TemplateData::build(
            &request,
            &make_client(None),
            &make_employee(21, "田中太郎"),
            &make_employee(22, "鈴木一郎"),
            "差分".to_string(),
        );

        let json = data.to_json();
        assert_eq!(json["CLIENT_NAME"], "佐藤商店");
    }

    #[rstest]
    #[case::空の日付("date", "DATE")]
    #[case::空のクレーム番号("complaint_number", "COMPLAINT_NUMBER")]
    #[case::空の契約番号("agreement_number", "AGREEMENT_NUMBER")]
    fn test_validateは空の文字列フィールドを検出する(
        #[case] field: &str,
        #[case] expected_key: &str,
    ) {
        let mut request = make_request();
        match field {
            "date" => request.date = String::new(),
            "complaint_number" => request.complaint_number = String::new(),
            "agreement_number" => request.agreement_number = String::new(),
            _ => unreachable!(),
        }

        let error = build_data(&request).validate().unwrap_err();
        assert!(matches!(
            error,
            DomainError::IncompleteTemplate { field } if field == expected_key
        ));
    }

    #[test]
    fn test_validateはゼロの整数フィールドを検出する() {
        let mut request = make_request();
        request.complaint_id = 0;

        let error = build_data(&request).validate().unwrap_err();
        assert!(matches!(
            error,
            DomainError::IncompleteTemplate { field: "COMPLAINT_ID" }
        ));
    }

    #[test]
    fn test_validateは宣言順で最初の空フィールドを報告する() {
        let mut request = make_request();
        request.complaint_id = 0;
        request.date = String::new();

        // COMPLAINT_ID が DATE より先に報告される
        let error = build_data(&request).validate().unwrap_err();
        assert!(matches!(
            error,
            DomainError::IncompleteTemplate { field: "COMPLAINT_ID" }
        ));
    }

    #[test]
    fn test_validateは完全なデータを受け入れる() {
        assert!(build_data(&make_request()).validate().is_ok());
    }

    #[test]
    fn test_to_jsonはワイヤキーで出力する() {
        let json = build_data(&make_request()).to_json();
        assert_eq!(json["COMPLAINT_ID"], 7001);
        assert_eq!(json["COMPLAINT_NUMBER"], "CMP-7001");
        assert_eq!(json["DATE"], "2024-06-01");
    }

    #[rstest]
    #[case(TemplateValue::Int(0), true)]
    #[case(TemplateValue::Int(1), false)]
    #[case(TemplateValue::Text(String::new()), true)]
    #[case(TemplateValue::Text("   ".to_string()), true)]
    #[case(TemplateValue::Text("x".to_string()), false)]
    fn test_template_valueの空判定(#[case] value: TemplateValue, #[case] expected: bool) {
        assert_eq!(value.is_empty(), expected);
    }
}
