//! # Domain Entities Module
//!
//! 저장소에 영속되는 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되며 `_id` 필드는 숫자형 식별자를 사용합니다.

pub mod users;
