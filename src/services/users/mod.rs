//! 사용자 관리 서비스 모듈
//!
//! 사용자 등록과 조회 비즈니스 로직을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{BcryptPasswordHasher, UserService};
//!
//! let service = UserService::new(
//!     store,
//!     PayloadValidator::new(ValidationConfig::from_env()),
//!     Arc::new(BcryptPasswordHasher::from_env()),
//! );
//! let response = service.register_user(payload).await?;
//! ```

pub mod password_hasher;
pub mod user_service;

pub use password_hasher::{BcryptPasswordHasher, PasswordHasher};
pub use user_service::UserService;
