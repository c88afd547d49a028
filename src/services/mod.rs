//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소, 검증기, 해셔를 생성자로 주입받으며 전역 상태를 갖지 않습니다.

pub mod users;
