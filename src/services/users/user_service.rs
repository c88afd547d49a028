//! # 사용자 관리 서비스 구현
//!
//! 사용자 등록과 조회의 비즈니스 규칙을 구현합니다.
//!
//! ## 등록 흐름
//!
//! ```text
//! RegisterUserPayload
//!        │
//!        ▼
//!  PayloadValidator ──실패──▶ ValidationError (400)
//!        │
//!        ▼
//!  get_user_by_email ──존재──▶ ConflictError (400)
//!        │ NotFound            ──백엔드 오류──▶ StorageError (500)
//!        ▼
//!  PasswordHasher
//!        │
//!        ▼
//!  create_user ──실패──▶ StorageError (500) / ConflictError (경합)
//!        │
//!        ▼
//!  RegisterUserResponse (201)
//! ```
//!
//! 첫 번째 실패 단계에서 즉시 중단하며 재시도하지 않습니다.
//! 저장소 쓰기는 성공 경로에서 `create_user` 한 번뿐입니다.

use std::sync::Arc;

use actix_web::web;
use log::{debug, error, info, warn};

use crate::core::errors::{AppError, AppResult};
use crate::core::validation::PayloadValidator;
use crate::domain::dto::users::request::RegisterUserPayload;
use crate::domain::dto::users::response::{RegisterUserResponse, UserResponse};
use crate::domain::entities::users::{User, UserId};
use crate::repositories::users::{StoreError, UserStore};
use crate::services::users::password_hasher::PasswordHasher;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 요청 간 공유되는 가변 상태를 갖지 않습니다.
/// 유일한 공유 자원은 저장소이며, 그 동시성 제어는 저장소 구현체가 담당합니다.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    validator: PayloadValidator,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(
        store: Arc<dyn UserStore>,
        validator: PayloadValidator,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            store,
            validator,
            hasher,
        }
    }

    /// 새 사용자 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(RegisterUserResponse)` - 저장된 사용자 (비밀번호 해시 제외)
    /// * `Err(AppError::ValidationError)` - 필드 제약 조건 위반
    /// * `Err(AppError::ConflictError)` - 이미 등록된 이메일
    /// * `Err(AppError::StorageError)` - 저장소 조회/쓰기 실패
    pub async fn register_user(&self, payload: RegisterUserPayload) -> AppResult<RegisterUserResponse> {
        let start_time = std::time::Instant::now();

        if let Err(e) = self.validator.validate_registration(&payload) {
            debug!("등록 요청 검증 실패: {}", e);
            return Err(e);
        }

        match self.store.get_user_by_email(&payload.email).await {
            Ok(_) => {
                warn!("이미 등록된 이메일로 가입 시도: {}", payload.email);
                return Err(AppError::ConflictError(format!(
                    "user with email {} already exists",
                    payload.email
                )));
            }
            Err(StoreError::NotFound) => {}
            Err(e) => {
                error!("이메일 조회 실패: {}", e);
                return Err(AppError::StorageError(e.to_string()));
            }
        }

        let RegisterUserPayload {
            first_name,
            last_name,
            email,
            password,
        } = payload;

        // bcrypt는 CPU를 오래 점유하므로 블로킹 스레드 풀에서 실행합니다
        let hasher = Arc::clone(&self.hasher);
        let password_hash = web::block(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::InternalError(format!("해싱 작업 실행 실패: {}", e)))??;
        let user = User::new(first_name, last_name, email, password_hash);

        let created = self.store.create_user(user).await.map_err(|e| match e {
            StoreError::DuplicateEmail(email) => {
                warn!("동시 가입 경합으로 인한 이메일 중복: {}", email);
                AppError::ConflictError(format!("user with email {} already exists", email))
            }
            other => {
                error!("사용자 저장 실패: {}", other);
                AppError::StorageError(other.to_string())
            }
        })?;

        let user = UserResponse::try_from(created)?;

        info!(
            "사용자 등록 완료: id={} email={} ({:?})",
            user.id,
            user.email,
            start_time.elapsed()
        );

        Ok(RegisterUserResponse::new(user))
    }

    /// ID로 사용자 조회
    ///
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    pub async fn get_user_by_id(&self, id: UserId) -> AppResult<UserResponse> {
        let user = self.store.get_user_by_id(id).await?;

        UserResponse::try_from(user)
    }
}
