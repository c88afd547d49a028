//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 기능입니다.
//!
//! - [`errors`] - `AppError` 에러 분류와 HTTP 응답 변환
//! - [`validation`] - 명시적으로 생성되어 주입되는 요청 검증 엔진
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//! use crate::core::validation::PayloadValidator;
//!
//! let validator = PayloadValidator::new(ValidationConfig::from_env());
//! validator.validate_registration(&payload)?;
//! ```

pub mod errors;
pub mod validation;

pub use errors::*;
pub use validation::*;
