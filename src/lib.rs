//! 이커머스 사용자 등록 서비스 백엔드
//!
//! 회원가입 요청을 검증하고, 이메일 중복을 확인한 뒤 사용자를 저장하는
//! Actix-web 기반 HTTP 서비스입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← POST /api/v1/register, GET /api/v1/users/{id}
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 디코딩 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 검증, 중복 확인, 해싱, 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← InMemoryUserStore / MongoUserStore
//! └─────────────────┘
//! ```
//!
//! 모든 의존성(저장소, 검증기, 해셔)은 `main.rs`에서 명시적으로 생성되어 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ecommerce_user_service::core::validation::PayloadValidator;
//! use ecommerce_user_service::repositories::users::InMemoryUserStore;
//! use ecommerce_user_service::services::users::{BcryptPasswordHasher, UserService};
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserStore::new()),
//!     PayloadValidator::default(),
//!     Arc::new(BcryptPasswordHasher::new(4)),
//! );
//! let response = service.register_user(payload).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
