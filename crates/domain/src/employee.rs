//! # 従業員
//!
//! 返品クレームに紐づく社内の担当者（担当者・検品担当）のモデル。

define_entity_id! {
    /// 従業員の一意識別子
    pub struct EmployeeId;
}

define_validated_string! {
    /// 従業員の氏名（値オブジェクト）
    ///
    /// # 不変条件
    ///
    /// - 空文字列ではない
    /// - 最大 255 文字
    pub struct EmployeeName {
        label: "従業員名",
        max_length: 255,
    }
}

/// 従業員エンティティ
///
/// 返品クレームには作成した担当者と検品担当の 2 名が必須で紐づく。
/// 通知テンプレートには [`full_name`](Employee::full_name) が載る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id:   EmployeeId,
    name: EmployeeName,
}

impl Employee {
    /// 参照 API のレコードから従業員を復元する
    pub fn new(id: EmployeeId, name: EmployeeName) -> Self {
        Self { id, name }
    }

    /// 従業員 ID を取得する
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// 氏名（表示用フルネーム）を取得する
    pub fn full_name(&self) -> &str {
        self.name.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_従業員を復元してフルネームを取得できる() {
        let employee = Employee::new(EmployeeId::new(21), EmployeeName::new("田中太郎").unwrap());
        assert_eq!(employee.id().as_u32(), 21);
        assert_eq!(employee.full_name(), "田中太郎");
    }

    #[test]
    fn test_従業員名は空文字列を拒否する() {
        assert!(EmployeeName::new("  ").is_err());
    }
}
