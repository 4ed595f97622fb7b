//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/health` - 헬스 체크
//! - `/api/students` - 학생 CRUD
//! - `/api/foods` - 식품 목록
//! - `/api/orders` - 주문 목록

pub mod foods;
pub mod health;
pub mod orders;
pub mod students;
