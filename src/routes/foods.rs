//! Food Endpoints
//!
//! 읽기 전용. foods 테이블 전체 조회만 제공

use axum::{extract::State, Json};

use crate::{db::FoodItem, error::ApiError, AppState};

/// GET /api/foods
pub async fn list_foods(State(state): State<AppState>) -> Result<Json<Vec<FoodItem>>, ApiError> {
    let foods = state.store.list_foods().await?;
    Ok(Json(foods))
}
