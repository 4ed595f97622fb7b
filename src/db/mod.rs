//! Database Module
//!
//! # Interview Q&A
//!
//! Q: 왜 MariaDB/MySQL인가?
//! A: 기존 운영 스토어가 MariaDB
//!
//!    1. student/foods/orders 테이블이 이미 존재
//!    2. 단순 CRUD 워크로드에 충분
//!    3. 생태계: SQLx의 mysql 백엔드 지원
//!
//! Q: SQLx를 선택한 이유는?
//! A: 비동기 드라이버 + 내장 커넥션 풀
//!
//!    - 파라미터는 항상 위치 바인딩 (`?`), 문자열 조립 금지
//!    - 마이그레이션: 내장 지원
//!    - 풀에서 꺼낸 커넥션은 성공/실패 어느 경로로 끝나도
//!      drop 시점에 반드시 풀로 반환됨
//!
//! Q: 커넥션 풀은 어떻게 관리하는가?
//! A: SQLx의 MySqlPool 사용
//!    - 최대 커넥션 수 설정 (기본 10)
//!    - acquire_timeout: 빈 슬롯 대기 한도 (기본 30초)
//!    - 커넥션 수립 한도는 별도 knob (connect를 timeout으로 감쌈)

mod models;
mod store;

pub use models::*;
pub use store::StudentStore;

#[cfg(test)]
pub use store::mock;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};

use crate::config::Config;

/// 데이터베이스 연결 및 쿼리 담당
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// 데이터베이스 연결
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: `DB_POOL_SIZE` (기본 10)
    /// - min_connections: 1 (idle 시 최소 유지)
    /// - acquire_timeout: `DB_ACQUIRE_TIMEOUT_MS` (빈 슬롯 대기)
    /// - 커넥션 수립 자체는 `DB_CONNECT_TIMEOUT_MS`로 제한
    pub async fn connect(config: &Config) -> Result<Self> {
        let options = MySqlPoolOptions::new()
            .max_connections(config.db_pool_size)
            .min_connections(1)
            .acquire_timeout(config.acquire_timeout());

        let pool = tokio::time::timeout(
            config.connect_timeout(),
            options.connect(&config.database_url),
        )
        .await
        .context("timed out establishing database connection")??;

        Ok(Self { pool })
    }

    /// 마이그레이션 실행
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl StudentStore for Database {
    async fn list_students(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT
                NAME AS name,
                TITLE AS title,
                CLASS AS class,
                SECTION AS section,
                ROLLID AS rollid
            FROM student
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn insert_student(&self, student: &Student) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO student (NAME, TITLE, CLASS, SECTION, ROLLID)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&student.name)
        .bind(&student.title)
        .bind(&student.class)
        .bind(&student.section)
        .bind(student.rollid)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_student(&self, key: &StudentKey, name: &str, title: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE student
            SET NAME = ?, TITLE = ?
            WHERE CLASS = ? AND SECTION = ? AND ROLLID = ?
            "#,
        )
        .bind(name)
        .bind(title)
        .bind(&key.class)
        .bind(&key.section)
        .bind(key.rollid)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn patch_student(&self, key: &StudentKey, patch: &StudentPatch) -> Result<u64> {
        // 존재하는 필드 조합마다 고정된 statement 사용. SET 절 문자열 조립 금지
        let query = match (&patch.name, &patch.title) {
            (Some(name), Some(title)) => sqlx::query(
                r#"
                UPDATE student
                SET NAME = ?, TITLE = ?
                WHERE CLASS = ? AND SECTION = ? AND ROLLID = ?
                "#,
            )
            .bind(name)
            .bind(title),
            (Some(name), None) => sqlx::query(
                r#"
                UPDATE student
                SET NAME = ?
                WHERE CLASS = ? AND SECTION = ? AND ROLLID = ?
                "#,
            )
            .bind(name),
            (None, Some(title)) => sqlx::query(
                r#"
                UPDATE student
                SET TITLE = ?
                WHERE CLASS = ? AND SECTION = ? AND ROLLID = ?
                "#,
            )
            .bind(title),
            (None, None) => anyhow::bail!("empty field set for student update"),
        };

        let result = query
            .bind(&key.class)
            .bind(&key.section)
            .bind(key.rollid)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_student(&self, key: &StudentKey) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM student
            WHERE CLASS = ? AND SECTION = ? AND ROLLID = ?
            "#,
        )
        .bind(&key.class)
        .bind(&key.section)
        .bind(key.rollid)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn list_foods(&self) -> Result<Vec<FoodItem>> {
        let foods = sqlx::query_as::<_, FoodItem>(
            r#"
            SELECT
                ITEM_ID AS item_id,
                ITEM_NAME AS item_name,
                ITEM_UNIT AS item_unit,
                COMPANY_ID AS company_id
            FROM foods
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(foods)
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT
                ORD_NUM AS ord_num,
                ORD_AMOUNT AS ord_amount,
                ADVANCE_AMOUNT AS advance_amount,
                ORD_DATE AS ord_date,
                CUST_CODE AS cust_code,
                AGENT_CODE AS agent_code,
                ORD_DESCRIPTION AS ord_description
            FROM orders
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
