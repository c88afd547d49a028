//! 사용자 저장소 추상화
//!
//! 비즈니스 로직 없이 사용자 조회/생성만 담당합니다.
//! 동시성 제어(락, 트랜잭션)는 각 구현체의 책임이며,
//! 호출자는 모든 연산을 원자적인 단일 호출로 취급합니다.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::errors::AppError;
use crate::domain::entities::users::{User, UserId};

/// 저장소 연산 에러
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// 조건에 맞는 사용자가 없음
    #[error("user not found")]
    NotFound,

    /// 이메일 유일 제약 위반
    #[error("email already stored: {0}")]
    DuplicateEmail(String),

    /// I/O, 드라이버 등 백엔드 오류
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => AppError::NotFound("사용자를 찾을 수 없습니다".to_string()),
            StoreError::DuplicateEmail(email) => {
                AppError::ConflictError(format!("이미 등록된 이메일입니다: {}", email))
            }
            StoreError::Backend(detail) => AppError::StorageError(detail),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 사용자 저장소 인터페이스
///
/// - 조회 연산은 사용자 또는 `NotFound`를 반환하며, 둘을 동시에 반환하지 않습니다.
/// - `create_user`는 식별자를 할당한 저장 결과를 반환합니다.
///   같은 이메일로 두 번 호출하는 것은 호출자의 오류입니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user_by_email(&self, email: &str) -> StoreResult<User>;

    async fn get_user_by_id(&self, id: UserId) -> StoreResult<User>;

    async fn create_user(&self, user: User) -> StoreResult<User>;
}
