//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 필수 입력, 길이 규칙 (`validator`)
//! 3. **정책 검증**: 설정 가능한 비밀번호 길이 (`PayloadValidator`)

pub mod register_user;

pub use register_user::RegisterUserPayload;
