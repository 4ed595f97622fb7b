//! Database Models
//!
//! Row models for the student, foods and orders tables. Wire names are the
//! store's uppercase column names; queries alias columns to the snake_case
//! field names for FromRow.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// 학생 레코드
///
/// 복합 식별자 (CLASS, SECTION, ROLLID)가 논리적 키.
/// 유일성은 스토어 책임이며 서비스는 검사하지 않음
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "UPPERCASE")]
pub struct Student {
    /// 이름 (최대 30자)
    pub name: String,

    /// 호칭 (최대 25자)
    pub title: String,

    /// 학급 (최대 5자, 식별자)
    pub class: String,

    /// 분반 (한 글자, 식별자)
    pub section: String,

    /// 출석 번호 (세 자리 이하, 식별자)
    pub rollid: i32,
}

/// 복합 식별자 (CLASS, SECTION, ROLLID)
#[derive(Debug, Clone, PartialEq)]
pub struct StudentKey {
    pub class: String,
    pub section: String,
    pub rollid: i32,
}

/// PATCH에서 갱신할 필드 집합
///
/// 존재하는 필드만 담는다. 둘 다 비어 있으면 갱신문 자체가 성립하지 않으므로
/// 핸들러가 사전에 거부한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub title: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.title.is_none()
    }
}

/// 식품 레코드 (읽기 전용)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "UPPERCASE")]
pub struct FoodItem {
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub item_unit: Option<String>,
    pub company_id: Option<String>,
}

/// 주문 레코드 (읽기 전용)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "UPPERCASE")]
pub struct Order {
    pub ord_num: i32,
    pub ord_amount: Option<f64>,
    pub advance_amount: Option<f64>,
    pub ord_date: Option<NaiveDate>,
    pub cust_code: Option<String>,
    pub agent_code: Option<String>,
    pub ord_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_serializes_with_uppercase_keys() {
        let student = Student {
            name: "Asha".to_string(),
            title: "Mr".to_string(),
            class: "10A".to_string(),
            section: "B".to_string(),
            rollid: 12,
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "NAME": "Asha",
                "TITLE": "Mr",
                "CLASS": "10A",
                "SECTION": "B",
                "ROLLID": 12,
            })
        );
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(StudentPatch::default().is_empty());
        let patch = StudentPatch {
            name: Some("Asha".to_string()),
            title: None,
        };
        assert!(!patch.is_empty());
    }
}
