//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//! 요청 DTO는 수명이 요청 하나로 한정되며, 응답 DTO는 엔티티에서 민감 정보를 제거한 형태입니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
