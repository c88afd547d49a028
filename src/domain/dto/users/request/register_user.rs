//! 사용자 등록 요청 DTO
//!
//! `POST /register` 요청 본문을 표현합니다. 요청 하나의 처리 동안만 존재합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 사용자 등록 요청 페이로드
///
/// JSON 필드명은 `FirstName`, `LastName`, `Email`, `Password` 입니다.
/// 이름과 이메일 형식은 선언적 규칙으로 검증하고,
/// 비밀번호 길이 정책은 [`PayloadValidator`](crate::core::validation::PayloadValidator)가 적용합니다.
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterUserPayload {
    #[validate(
        length(max = 100, message = "이름은 100자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub first_name: String,

    #[validate(
        length(max = 100, message = "성은 100자 이하여야 합니다"),
        custom(function = "validate_not_blank")
    )]
    pub last_name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    pub password: String,
}

impl std::fmt::Debug for RegisterUserPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserPayload")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// 필수 문자열 검증 (빈 문자열, 공백만 있는 문자열 거부)
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message("필수 입력 항목입니다".into()));
    }
    Ok(())
}

/// Rust 필드명을 요청 JSON 필드명으로 변환합니다.
///
/// 검증 에러를 클라이언트가 보낸 필드명 기준으로 보고하기 위해 사용합니다.
pub fn wire_field_name(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(first: &str, last: &str, email: &str) -> RegisterUserPayload {
        RegisterUserPayload {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            password: "asd".to_string(),
        }
    }

    #[test]
    fn test_deserializes_pascal_case_fields() {
        let body = r#"{"FirstName":"user","LastName":"123","Email":"daa@mail.com","Password":"asd"}"#;

        let parsed: RegisterUserPayload = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.first_name, "user");
        assert_eq!(parsed.last_name, "123");
        assert_eq!(parsed.email, "daa@mail.com");
        assert_eq!(parsed.password, "asd");
    }

    #[test]
    fn test_missing_field_fails_to_decode() {
        let body = r#"{"FirstName":"user","Email":"daa@mail.com","Password":"asd"}"#;

        assert!(serde_json::from_str::<RegisterUserPayload>(body).is_err());
    }

    #[test]
    fn test_valid_payload_passes_declarative_rules() {
        assert!(payload("user", "123", "daa@mail.com").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let errors = payload("user", "123", "invalid").validate().unwrap_err();

        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let errors = payload("  ", "", "daa@mail.com").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
    }

    #[test]
    fn test_debug_masks_password() {
        let rendered = format!("{:?}", payload("user", "123", "daa@mail.com"));

        assert!(!rendered.contains("asd"));
    }

    #[test]
    fn test_wire_field_name() {
        assert_eq!(wire_field_name("first_name"), "FirstName");
        assert_eq!(wire_field_name("email"), "Email");
    }
}
