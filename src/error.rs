//! Error Handling Module
//!
//! Provides type-safe error handling with proper HTTP status code mapping.
//! Uses thiserror for domain errors and integrates with tracing for structured logging.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 단일 필드 검증 실패
///
/// `field`는 요청에서 사용한 이름 그대로 (body는 대문자, path는 소문자)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// API 에러 타입
///
/// # Design Decision
///
/// 각 에러 variant는 적절한 HTTP 상태 코드에 매핑됨
/// - 400: 입력 검증 실패 (위반 목록 전체 반환)
/// - 404: 복합 식별자에 해당하는 행 없음 (affected-rows = 0)
/// - 500: 스토어/풀에서 올라온 모든 실패 (재시도 없이 그대로 노출)
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    // ============ 404 Not Found ============
    #[error("{0} not found")]
    NotFound(&'static str),

    // ============ 500 Internal Server Error ============
    #[error("Database error: {0}")]
    Database(String),
}

/// 400 응답 본문: `{"errors": [...]}`
#[derive(Serialize)]
struct ValidationResponse {
    errors: Vec<FieldError>,
}

/// 404/500 응답 본문: `{"error": "..."}`
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationResponse { errors })).into_response()
            }
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("{resource} not found"),
                }),
            )
                .into_response(),
            ApiError::Database(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
        }
    }
}

/// SQLx 에러를 ApiError로 변환
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("SQLx error: {:?}", err);
        ApiError::Database(err.to_string())
    }
}

/// anyhow 에러를 ApiError로 변환
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Data access error: {:?}", err);
        ApiError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation(vec![FieldError::new("NAME", "Name is required")]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("Student").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_maps_to_500() {
        let response = ApiError::Database("pool timed out".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
