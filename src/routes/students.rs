//! Student Endpoints
//!
//! CRUD for student records keyed on the composite identity
//! (CLASS, SECTION, ROLLID). Every handler is the same pipeline:
//! validate → single parameterized statement → map the outcome.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{db::Student, error::ApiError, validate, AppState};

// ============ Request/Response Types ============

/// POST body. 필드는 raw JSON 값으로 받아 검증기가 타입까지 판단
#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub class: Option<Value>,
    #[serde(default)]
    pub section: Option<Value>,
    #[serde(default)]
    pub rollid: Option<Value>,
}

/// PUT/PATCH body (NAME/TITLE만 갱신 가능)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct StudentFieldsRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
}

/// 성공 메시지 응답
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

// ============ Handlers ============

/// GET /api/students
///
/// 전체 학생 목록 조회
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.store.list_students().await?;
    Ok(Json(students))
}

/// POST /api/students
///
/// # Flow
///
/// 1. 5개 필드 전부 검증 (실패 목록 전체를 400으로 반환)
/// 2. INSERT (중복 식별자 사전 검사 없음, 스토어 제약 위반은 500)
/// 3. 201 + 확인 메시지
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let student = validate::new_student(
        req.name.as_ref(),
        req.title.as_ref(),
        req.class.as_ref(),
        req.section.as_ref(),
        req.rollid.as_ref(),
    )
    .map_err(ApiError::Validation)?;

    state.store.insert_student(&student).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Student added successfully")),
    ))
}

/// PUT /api/students/:class/:section/:rollid
///
/// NAME/TITLE 전체 교체. affected-rows 0이면 404
pub async fn update_student(
    State(state): State<AppState>,
    Path((class, section, rollid)): Path<(String, String, String)>,
    Json(req): Json<StudentFieldsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // path와 body의 위반 사항을 하나의 목록으로 합쳐서 보고
    let key = validate::path_identity(&class, &section, &rollid);
    let fields = validate::replacement(req.name.as_ref(), req.title.as_ref());
    let (key, (name, title)) = match (key, fields) {
        (Ok(key), Ok(fields)) => (key, fields),
        (key, fields) => {
            let mut errors = Vec::new();
            if let Err(violations) = key {
                errors.extend(violations);
            }
            if let Err(violations) = fields {
                errors.extend(violations);
            }
            return Err(ApiError::Validation(errors));
        }
    };

    let affected = state.store.update_student(&key, &name, &title).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Student"));
    }

    Ok(Json(MessageResponse::new("Student updated successfully")))
}

/// PATCH /api/students/:class/:section/:rollid
///
/// 존재하는 필드만 갱신. 갱신할 필드가 없으면 400 (빈 SET 절 방지)
pub async fn patch_student(
    State(state): State<AppState>,
    Path((class, section, rollid)): Path<(String, String, String)>,
    Json(req): Json<StudentFieldsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let key = validate::path_identity(&class, &section, &rollid);
    let patch = validate::patch(req.name.as_ref(), req.title.as_ref());
    let (key, patch) = match (key, patch) {
        (Ok(key), Ok(patch)) => (key, patch),
        (key, patch) => {
            let mut errors = Vec::new();
            if let Err(violations) = key {
                errors.extend(violations);
            }
            if let Err(violations) = patch {
                errors.extend(violations);
            }
            return Err(ApiError::Validation(errors));
        }
    };

    let affected = state.store.patch_student(&key, &patch).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Student"));
    }

    Ok(Json(MessageResponse::new("Student updated successfully")))
}

/// DELETE /api/students/:class/:section/:rollid
///
/// affected-rows 0이면 404
pub async fn delete_student(
    State(state): State<AppState>,
    Path((class, section, rollid)): Path<(String, String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    let key = validate::path_identity(&class, &section, &rollid)
        .map_err(ApiError::Validation)?;

    let affected = state.store.delete_student(&key).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Student"));
    }

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
