//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 디코딩하고 서비스 결과를 응답으로 변환하는 웹 계층입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 디코딩 / 응답 변환          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증, 중복 확인, 저장                 ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore 구현체                 ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 실패는 `AppError`로 반환되어 `ResponseError` 구현을 통해
//! 정확히 하나의 HTTP 응답으로 변환됩니다.

pub mod users;
