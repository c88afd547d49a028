//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 트레이트로 추상화되어 있으며, 구현체는 `main.rs`에서 생성되어
//! 서비스 계층에 명시적으로 주입됩니다.

pub mod users;
