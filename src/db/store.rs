//! Store Abstraction
//!
//! # Interview Q&A
//!
//! Q: Store trait을 둔 이유는?
//! A: 데이터 접근 로직을 추상화하는 패턴
//!
//!    장점:
//!    - 핸들러와 데이터 접근 분리
//!    - 테스트 시 Mock 구현 쉬움
//!    - 전역 싱글톤 대신 주입된 핸들로 접근
//!
//! Q: 트랜잭션은 왜 없는가?
//! A: 모든 연산이 단일 statement
//!    - 각 SQL문은 스토어 수준에서 원자적
//!    - 재시도/백오프 없음, 실패는 즉시 호출자에게 전파

use anyhow::Result;
use async_trait::async_trait;

use super::models::{FoodItem, Order, Student, StudentKey, StudentPatch};

/// 스토어 인터페이스
///
/// 쓰기 연산은 변경된 행 수를 반환한다. 0이면 복합 식별자에 해당하는
/// 행이 없다는 뜻이고 핸들러가 404로 매핑한다.
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn list_students(&self) -> Result<Vec<Student>>;

    async fn insert_student(&self, student: &Student) -> Result<()>;

    /// NAME/TITLE 전체 교체
    async fn update_student(&self, key: &StudentKey, name: &str, title: &str) -> Result<u64>;

    /// 존재하는 필드만 갱신. 빈 필드 집합은 에러
    async fn patch_student(&self, key: &StudentKey, patch: &StudentPatch) -> Result<u64>;

    async fn delete_student(&self, key: &StudentKey) -> Result<u64>;

    async fn list_foods(&self) -> Result<Vec<FoodItem>>;

    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// 연결 확인 (health check)
    async fn ping(&self) -> Result<()>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::RwLock;

    use anyhow::bail;
    use chrono::NaiveDate;

    use super::*;

    /// 인메모리 스토어
    pub struct MemoryStore {
        students: RwLock<Vec<Student>>,
        foods: Vec<FoodItem>,
        orders: Vec<Order>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self {
                students: RwLock::new(Vec::new()),
                foods: vec![
                    FoodItem {
                        item_id: Some("F001".to_string()),
                        item_name: Some("Pizza".to_string()),
                        item_unit: Some("pcs".to_string()),
                        company_id: Some("C001".to_string()),
                    },
                    FoodItem {
                        item_id: Some("F002".to_string()),
                        item_name: Some("Rice".to_string()),
                        item_unit: Some("kg".to_string()),
                        company_id: Some("C002".to_string()),
                    },
                ],
                orders: vec![Order {
                    ord_num: 200101,
                    ord_amount: Some(3000.0),
                    advance_amount: Some(1000.0),
                    ord_date: NaiveDate::from_ymd_opt(2024, 1, 15),
                    cust_code: Some("C00001".to_string()),
                    agent_code: Some("A001".to_string()),
                    ord_description: Some("SOD".to_string()),
                }],
            }
        }
    }

    fn matches(student: &Student, key: &StudentKey) -> bool {
        student.class == key.class
            && student.section == key.section
            && student.rollid == key.rollid
    }

    #[async_trait]
    impl StudentStore for MemoryStore {
        async fn list_students(&self) -> Result<Vec<Student>> {
            Ok(self.students.read().unwrap().clone())
        }

        async fn insert_student(&self, student: &Student) -> Result<()> {
            // 중복 식별자 검사 없음 (실제 스토어와 동일)
            self.students.write().unwrap().push(student.clone());
            Ok(())
        }

        async fn update_student(&self, key: &StudentKey, name: &str, title: &str) -> Result<u64> {
            let mut students = self.students.write().unwrap();
            let mut affected = 0;
            for student in students.iter_mut().filter(|s| matches(s, key)) {
                student.name = name.to_string();
                student.title = title.to_string();
                affected += 1;
            }
            Ok(affected)
        }

        async fn patch_student(&self, key: &StudentKey, patch: &StudentPatch) -> Result<u64> {
            if patch.is_empty() {
                bail!("empty field set for student update");
            }
            let mut students = self.students.write().unwrap();
            let mut affected = 0;
            for student in students.iter_mut().filter(|s| matches(s, key)) {
                if let Some(name) = &patch.name {
                    student.name = name.clone();
                }
                if let Some(title) = &patch.title {
                    student.title = title.clone();
                }
                affected += 1;
            }
            Ok(affected)
        }

        async fn delete_student(&self, key: &StudentKey) -> Result<u64> {
            let mut students = self.students.write().unwrap();
            let before = students.len();
            students.retain(|s| !matches(s, key));
            Ok((before - students.len()) as u64)
        }

        async fn list_foods(&self) -> Result<Vec<FoodItem>> {
            Ok(self.foods.clone())
        }

        async fn list_orders(&self) -> Result<Vec<Order>> {
            Ok(self.orders.clone())
        }

        async fn ping(&self) -> Result<()> {
            Ok(())
        }
    }

    /// 모든 호출이 실패하는 스토어 (500 매핑 테스트용)
    pub struct FailingStore;

    #[async_trait]
    impl StudentStore for FailingStore {
        async fn list_students(&self) -> Result<Vec<Student>> {
            bail!("pool timed out waiting for a connection")
        }

        async fn insert_student(&self, _student: &Student) -> Result<()> {
            bail!("pool timed out waiting for a connection")
        }

        async fn update_student(
            &self,
            _key: &StudentKey,
            _name: &str,
            _title: &str,
        ) -> Result<u64> {
            bail!("pool timed out waiting for a connection")
        }

        async fn patch_student(&self, _key: &StudentKey, _patch: &StudentPatch) -> Result<u64> {
            bail!("pool timed out waiting for a connection")
        }

        async fn delete_student(&self, _key: &StudentKey) -> Result<u64> {
            bail!("pool timed out waiting for a connection")
        }

        async fn list_foods(&self) -> Result<Vec<FoodItem>> {
            bail!("pool timed out waiting for a connection")
        }

        async fn list_orders(&self) -> Result<Vec<Order>> {
            bail!("pool timed out waiting for a connection")
        }

        async fn ping(&self) -> Result<()> {
            bail!("pool timed out waiting for a connection")
        }
    }
}
