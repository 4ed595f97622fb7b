//! Field Validators
//!
//! Per-field rules applied to path parameters and request bodies before any
//! database access. Pure functions: input values in, a complete list of
//! `(field, message)` violations out.
//!
//! # Interview Q&A
//!
//! Q: 왜 첫 실패에서 바로 반환하지 않고 전부 수집하는가?
//! A: 클라이언트가 한 번의 요청으로 모든 위반 사항을 알 수 있음
//!    - 필드별 규칙은 독립적으로 평가
//!    - 한 필드 안에서는 첫 번째 위반만 보고
//!
//! Body 값은 `serde_json::Value`로 받아 타입 위반도 검증 에러로 보고한다
//! (serde 거부가 아니라 400 + 위반 목록).

use serde_json::Value;

use crate::db::{Student, StudentKey, StudentPatch};
use crate::error::FieldError;

/// 문자열 필드 규칙 (required/isString/길이)
pub struct TextField {
    pub field: &'static str,
    pub label: &'static str,
    pub max_len: usize,
}

/// 숫자 문자열 필드 규칙 (isDecimal, 자릿수 제한)
pub struct DecimalField {
    pub field: &'static str,
    pub label: &'static str,
    pub max_digits: usize,
}

// Body 필드 (대문자 이름, 스토어 컬럼명 그대로)
pub const NAME: TextField = TextField { field: "NAME", label: "Name", max_len: 30 };
pub const TITLE: TextField = TextField { field: "TITLE", label: "Title", max_len: 25 };
pub const CLASS: TextField = TextField { field: "CLASS", label: "Class", max_len: 5 };
pub const SECTION: TextField = TextField { field: "SECTION", label: "Section", max_len: 1 };
pub const ROLLID: DecimalField = DecimalField { field: "ROLLID", label: "RollID", max_digits: 3 };

// Path 파라미터 (소문자 이름)
pub const PATH_CLASS: TextField = TextField { field: "class", label: "Class", max_len: 5 };
pub const PATH_SECTION: TextField = TextField { field: "section", label: "Section", max_len: 1 };
pub const PATH_ROLLID: DecimalField = DecimalField { field: "rollid", label: "RollID", max_digits: 3 };

impl TextField {
    fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }

    fn length_message(&self) -> String {
        if self.max_len == 1 {
            format!("{} must be a single character", self.label)
        } else {
            format!(
                "{} must be a string with a maximum length of {} characters",
                self.label, self.max_len
            )
        }
    }

    /// required + isString + 길이 검사, 통과한 값 반환
    pub fn required(&self, value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<String> {
        match value {
            None | Some(Value::Null) => {
                errors.push(FieldError::new(self.field, self.required_message()));
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                errors.push(FieldError::new(self.field, self.required_message()));
                None
            }
            Some(value) => self.checked(value, errors),
        }
    }

    /// 값이 없으면 검사 생략 (optional), 있으면 isString + 길이 검사
    pub fn optional(&self, value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<String> {
        match value {
            None | Some(Value::Null) => None,
            Some(value) => self.checked(value, errors),
        }
    }

    /// Path 파라미터 검사 (항상 존재하는 문자열)
    pub fn check_path(&self, value: &str, errors: &mut Vec<FieldError>) -> Option<String> {
        if self.fits(value) {
            Some(value.to_string())
        } else {
            errors.push(FieldError::new(self.field, self.length_message()));
            None
        }
    }

    fn checked(&self, value: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
        match value.as_str() {
            Some(s) if self.fits(s) => Some(s.to_string()),
            _ => {
                errors.push(FieldError::new(self.field, self.length_message()));
                None
            }
        }
    }

    fn fits(&self, s: &str) -> bool {
        let len = s.chars().count();
        // 한 글자 필드는 정확히 한 글자여야 함
        if self.max_len == 1 {
            len == 1
        } else {
            len <= self.max_len
        }
    }
}

impl DecimalField {
    fn required_message(&self) -> String {
        format!("{} is required", self.label)
    }

    fn decimal_message(&self) -> String {
        format!(
            "{} must be a decimal with up to {} digits",
            self.label, self.max_digits
        )
    }

    /// required + isDecimal 검사. JSON number와 숫자 문자열 모두 허용
    pub fn required(&self, value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<i32> {
        match value {
            None | Some(Value::Null) => {
                errors.push(FieldError::new(self.field, self.required_message()));
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                errors.push(FieldError::new(self.field, self.required_message()));
                None
            }
            Some(Value::String(s)) => self.parse_digits(s, errors),
            Some(Value::Number(n)) => match n.as_u64() {
                Some(n) if n < 10u64.pow(self.max_digits as u32) => Some(n as i32),
                _ => {
                    errors.push(FieldError::new(self.field, self.decimal_message()));
                    None
                }
            },
            Some(_) => {
                errors.push(FieldError::new(self.field, self.decimal_message()));
                None
            }
        }
    }

    /// Path 파라미터 검사
    pub fn check_path(&self, value: &str, errors: &mut Vec<FieldError>) -> Option<i32> {
        self.parse_digits(value, errors)
    }

    fn parse_digits(&self, s: &str, errors: &mut Vec<FieldError>) -> Option<i32> {
        let ok = !s.is_empty()
            && s.len() <= self.max_digits
            && s.bytes().all(|b| b.is_ascii_digit());
        match s.parse::<i32>() {
            Ok(n) if ok => Some(n),
            _ => {
                errors.push(FieldError::new(self.field, self.decimal_message()));
                None
            }
        }
    }
}

/// POST body: 5개 필드 모두 필수
pub fn new_student(
    name: Option<&Value>,
    title: Option<&Value>,
    class: Option<&Value>,
    section: Option<&Value>,
    rollid: Option<&Value>,
) -> Result<Student, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = NAME.required(name, &mut errors);
    let title = TITLE.required(title, &mut errors);
    let class = CLASS.required(class, &mut errors);
    let section = SECTION.required(section, &mut errors);
    let rollid = ROLLID.required(rollid, &mut errors);

    match (name, title, class, section, rollid) {
        (Some(name), Some(title), Some(class), Some(section), Some(rollid)) => Ok(Student {
            name,
            title,
            class,
            section,
            rollid,
        }),
        _ => Err(errors),
    }
}

/// PUT body: NAME/TITLE 모두 필수 (전체 교체)
pub fn replacement(
    name: Option<&Value>,
    title: Option<&Value>,
) -> Result<(String, String), Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = NAME.required(name, &mut errors);
    let title = TITLE.required(title, &mut errors);

    match (name, title) {
        (Some(name), Some(title)) => Ok((name, title)),
        _ => Err(errors),
    }
}

/// PATCH body: NAME/TITLE 선택. 빈 문자열은 갱신 대상에서 제외
///
/// 갱신할 필드가 하나도 남지 않으면 거부한다. 빈 SET 절은 유효한 SQL이 아님.
pub fn patch(
    name: Option<&Value>,
    title: Option<&Value>,
) -> Result<StudentPatch, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = NAME.optional(name, &mut errors).filter(|s| !s.is_empty());
    let title = TITLE.optional(title, &mut errors).filter(|s| !s.is_empty());
    if !errors.is_empty() {
        return Err(errors);
    }

    let patch = StudentPatch { name, title };
    if patch.is_empty() {
        return Err(vec![FieldError::new(
            "body",
            "At least one of NAME or TITLE must be provided",
        )]);
    }
    Ok(patch)
}

/// Path의 복합 식별자 (class, section, rollid) 검사
pub fn path_identity(
    class: &str,
    section: &str,
    rollid: &str,
) -> Result<StudentKey, Vec<FieldError>> {
    let mut errors = Vec::new();
    let class = PATH_CLASS.check_path(class, &mut errors);
    let section = PATH_SECTION.check_path(section, &mut errors);
    let rollid = PATH_ROLLID.check_path(rollid, &mut errors);

    match (class, section, rollid) {
        (Some(class), Some(section), Some(rollid)) => Ok(StudentKey {
            class,
            section,
            rollid,
        }),
        _ => Err(errors),
    }
}
