//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 영속되는 사용자 엔티티
//! └── dto       - 요청/응답 데이터 전송 객체
//! ```

pub mod entities;
pub mod dto;
