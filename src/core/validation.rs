//! # Payload Validation
//!
//! 등록 요청 검증 엔진입니다. 전역 인스턴스 없이 설정에서 명시적으로 생성되어
//! [`UserService`](crate::services::users::UserService)에 주입됩니다.
//!
//! 선언적 규칙(`#[validate(...)]`)과 설정 기반 비밀번호 정책을 한 번에 실행하고,
//! 실패한 모든 필드를 요청 JSON 필드명 기준으로 모아 보고합니다.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::config::ValidationConfig;
use crate::core::errors::{AppError, FieldErrors};
use crate::domain::dto::users::request::register_user::{wire_field_name, RegisterUserPayload};

/// bcrypt가 실제로 사용하는 비밀번호 최대 바이트 수. 초과분은 해시에 반영되지 않습니다.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// 등록 요청 검증기
#[derive(Debug, Clone)]
pub struct PayloadValidator {
    config: ValidationConfig,
}

impl PayloadValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// 등록 요청을 검증합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 모든 제약 조건 만족
    /// * `Err(AppError::ValidationError)` - 실패한 필드와 사유 목록
    pub fn validate_registration(&self, payload: &RegisterUserPayload) -> Result<(), AppError> {
        let mut errors = match payload.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let Err(error) = self.check_password(&payload.password) {
            errors.add("password", error);
        }

        if errors.errors().is_empty() {
            return Ok(());
        }

        Err(AppError::ValidationError(to_field_errors(&errors)))
    }

    fn check_password(&self, password: &str) -> Result<(), ValidationError> {
        let length = password.chars().count();
        let min = self.config.password_min_length;
        let max = self.config.password_max_length;

        if length < min || length > max {
            return Err(ValidationError::new("length").with_message(
                format!("비밀번호는 {}-{}자 사이여야 합니다", min, max).into(),
            ));
        }

        if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return Err(ValidationError::new("byte_length").with_message(
                format!("비밀번호는 {}바이트 이하여야 합니다", BCRYPT_MAX_PASSWORD_BYTES).into(),
            ));
        }
        Ok(())
    }
}

impl Default for PayloadValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();

    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
            .collect::<Vec<_>>();

        fields
            .entry(wire_field_name(&field))
            .or_default()
            .extend(messages);
    }

    fields
}
