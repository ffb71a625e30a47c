//! # 通知
//!
//! 返品ステータス通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`ReturnEventRequest`] | 返品イベントリクエスト | 呼び出し側が所有する読み取り専用の入力 |
//! | [`NotificationType`] | 通知種別 | 2 種類: 新規（1）、ステータス変更（2） |
//! | [`NotificationEvent`] | 通知イベント種別 | メッセージング/SMS コラボレーターへ渡す固定タグ |
//! | [`NotificationOutcome`] | 通知結果 | チャネル別の送信結果（従業員メール・顧客メール・顧客 SMS） |
//!
//! ## 設計方針
//!
//! - **enum による通知種別**: 生の整数コードは境界で [`NotificationType`] に解決
//! - **fire-and-forget**: 送信結果はフラグとして畳み込まれ、配達確認はしない
//! - **結果は値として合成**: 可変参照の受け渡しではなく、各通知ステップの
//!   戻り値から最終結果を組み立てる

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::{status::StatusCode, value_objects::Email};

/// 通知種別
///
/// リクエストの `notificationType` フィールド（整数コード）に対応する。
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
pub enum NotificationType {
    /// 新規: 返品ポジションが追加された
    New,
    /// ステータス変更: 既存ポジションのステータスが遷移した
    Change,
}

impl NotificationType {
    /// 整数コードから通知種別を解決する
    ///
    /// 未知のコード（0 を含む）は `None` を返す。
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::New),
            2 => Some(Self::Change),
            _ => None,
        }
    }

    /// 通知種別の整数コードを返す
    pub fn code(self) -> u32 {
        match self {
            Self::New => 1,
            Self::Change => 2,
        }
    }
}

/// 通知イベント種別
///
/// メッセージングクライアント・SMS ゲートウェイへ渡す固定の
/// イベントタグ。kebab-case でシリアライズされる。
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
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum NotificationEvent {
    /// 返品ステータス変更イベント
    ChangeReturnStatus,
}

/// 通知宛先の許可種別
///
/// 従業員宛の通知は、販売店ごとにこの許可を持つメールアドレスのみが
/// 受信できる。
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
pub enum NotificationPermit {
    /// 返品イベントの受信許可
    GoodsReturn,
}

/// ステータス差分
///
/// ステータス変更イベントの遷移元・遷移先。`to` はブロックが存在しても
/// 未設定の場合がある。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDifferences {
    /// 遷移元ステータス
    pub from: StatusCode,
    /// 遷移先ステータス（未設定の場合あり）
    #[serde(default)]
    pub to:   Option<StatusCode>,
}

impl StatusDifferences {
    /// 遷移先ステータスを返す
    ///
    /// 未設定（`None`）とコード 0 はいずれも「遷移先なし」として扱う。
    pub fn target(&self) -> Option<StatusCode> {
        self.to.filter(|code| code.as_u32() != 0)
    }
}

/// 返品イベントリクエスト
///
/// 呼び出し側が所有する入力 DTO。存在しないフィールドはエラーにせず
/// ゼロ値・空文字列として受け取り、検証はオペレーション側で行う。
/// ワイヤ形式のキーは camelCase。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReturnEventRequest {
    /// 販売店 ID（0 = 未指定）
    pub reseller_id:        u32,
    /// 通知種別の整数コード（0 = 未指定）
    pub notification_type:  u32,
    /// 顧客（取引先）ID
    pub client_id:          u32,
    /// クレームを作成した担当者の従業員 ID
    pub creator_id:         u32,
    /// 検品担当の従業員 ID
    pub expert_id:          u32,
    /// クレーム ID
    pub complaint_id:       u32,
    /// クレーム番号（表示用）
    pub complaint_number:   String,
    /// 消費記録 ID
    pub consumption_id:     u32,
    /// 消費記録番号（表示用）
    pub consumption_number: String,
    /// 契約番号
    pub agreement_number:   String,
    /// イベント日付（表示用文字列、書式はプラットフォーム共通）
    pub date:               String,
    /// ステータス差分（ステータス変更イベントのみ）
    pub differences:        Option<StatusDifferences>,
}

/// 送信メールメッセージ
///
/// カタログでレンダリングされた件名・本文と送信元・宛先の組。
/// メッセージングクライアントに渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// 送信元メールアドレス
    pub email_from: Email,
    /// 宛先メールアドレス
    pub email_to:   Email,
    /// 件名
    pub subject:    String,
    /// 本文
    pub message:    String,
}

/// SMS チャネルの通知結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SmsOutcome {
    /// ゲートウェイが送信成功を報告したかどうか
    #[serde(rename = "isSent")]
    pub is_sent: bool,
    /// ゲートウェイが返したエラーメッセージ（なければ空文字列）
    ///
    /// ゲートウェイの契約上、成功フラグとエラーメッセージは独立しており、
    /// 両方が設定されるケースもある。
    pub message: String,
}

/// 通知結果
///
/// チャネルごとの送信結果。オペレーションが一度だけ構築し、値で返す。
/// ワイヤ形式のキーは元のプラットフォーム API と互換（camelCase）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationOutcome {
    /// 従業員へのメール通知を試行したかどうか
    #[serde(rename = "notificationEmployeeByEmail")]
    pub employee_by_email: bool,
    /// 顧客へのメール通知をディスパッチしたかどうか
    #[serde(rename = "notificationClientByEmail")]
    pub client_by_email:   bool,
    /// 顧客への SMS 通知の結果
    #[serde(rename = "notificationClientBySms")]
    pub client_by_sms:     SmsOutcome,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, Some(NotificationType::New))]
    #[case(2, Some(NotificationType::Change))]
    #[case(0, None)]
    #[case(3, None)]
    fn test_通知種別は既知のコードのみ解決する(
        #[case] code: u32,
        #[case] expected: Option<NotificationType>,
    ) {
        assert_eq!(NotificationType::from_code(code), expected);
    }

    #[test]
    fn test_通知イベントのワイヤ表現はケバブケース() {
        assert_eq!(
            NotificationEvent::ChangeReturnStatus.to_string(),
            "change-return-status"
        );
    }

    #[test]
    fn test_通知許可のワイヤ表現はスネークケース() {
        assert_eq!(NotificationPermit::GoodsReturn.to_string(), "goods_return");
    }

    #[test]
    fn test_差分の遷移先はゼロと未設定をなしとして扱う() {
        let with_target = StatusDifferences {
            from: StatusCode::new(1),
            to:   Some(StatusCode::new(2)),
        };
        assert_eq!(with_target.target(), Some(StatusCode::new(2)));

        let zero_target = StatusDifferences {
            from: StatusCode::new(1),
            to:   Some(StatusCode::new(0)),
        };
        assert_eq!(zero_target.target(), None);

        let absent_target = StatusDifferences {
            from: StatusCode::new(1),
            to:   None,
        };
        assert_eq!(absent_target.target(), None);
    }

    #[test]
    fn test_リクエストは欠落フィールドをゼロ値で受け取る() {
        let request: ReturnEventRequest =
            serde_json::from_str(r#"{"resellerId": 10, "notificationType": 2}"#).unwrap();

        assert_eq!(request.reseller_id, 10);
        assert_eq!(request.notification_type, 2);
        assert_eq!(request.client_id, 0);
        assert_eq!(request.date, "");
        assert!(request.differences.is_none());
    }

    #[test]
    fn test_リクエストの差分ブロックを読み取れる() {
        let request: ReturnEventRequest = serde_json::from_str(
            r#"{"resellerId": 10, "notificationType": 2, "differences": {"from": 1, "to": 3}}"#,
        )
        .unwrap();

        let differences = request.differences.unwrap();
        assert_eq!(differences.from, StatusCode::new(1));
        assert_eq!(differences.target(), Some(StatusCode::new(3)));
    }

    #[test]
    fn test_通知結果のワイヤ形式は元のキー名と互換() {
        let outcome = NotificationOutcome {
            employee_by_email: true,
            client_by_email:   false,
            client_by_sms:     SmsOutcome {
                is_sent: true,
                message: String::new(),
            },
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["notificationEmployeeByEmail"], true);
        assert_eq!(json["notificationClientByEmail"], false);
        assert_eq!(json["notificationClientBySms"]["isSent"], true);
        assert_eq!(json["notificationClientBySms"]["message"], "");
    }
}
