//! 비밀번호 해싱
//!
//! 원본 비밀번호를 복원 불가능한 저장 형태로 변환합니다.

use bcrypt::{non_truncating_hash, BcryptError};

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// 비밀번호 해싱 인터페이스
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> AppResult<String>;
}

/// bcrypt 기반 [`PasswordHasher`]
///
/// 솔트는 bcrypt가 해시마다 자동으로 생성합니다.
/// 72바이트를 넘는 비밀번호는 잘라내지 않고 `Password` 검증 에러로 거부합니다.
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `BCRYPT_COST` 또는 실행 환경에 맞는 cost를 사용합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> AppResult<String> {
        let start = std::time::Instant::now();

        let hashed = non_truncating_hash(password, self.cost).map_err(|e| match e {
            BcryptError::Truncation(length) => AppError::invalid_field(
                "Password",
                &format!("비밀번호가 너무 깁니다 ({}바이트)", length),
            ),
            other => AppError::InternalError(format!("비밀번호 해싱 실패: {}", other)),
        })?;

        log::debug!("Password hashing took: {:?}", start.elapsed());
        Ok(hashed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hasher = BcryptPasswordHasher::new(4);

        let hashed = hasher.hash("asd").unwrap();

        assert_ne!(hashed, "asd");
        assert!(bcrypt::verify("asd", &hashed).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = BcryptPasswordHasher::new(4);

        assert_ne!(hasher.hash("asd").unwrap(), hasher.hash("asd").unwrap());
    }

    #[test]
    fn test_overlong_password_is_rejected_instead_of_truncated() {
        let hasher = BcryptPasswordHasher::new(4);
        let password = format!("{}SECRET-SUFFIX-123456", "a".repeat(72));

        let result = hasher.hash(&password);

        match result {
            Err(AppError::ValidationError(fields)) => assert!(fields.contains_key("Password")),
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_cost_is_internal_error() {
        let hasher = BcryptPasswordHasher::new(99);

        assert!(matches!(hasher.hash("asd"), Err(AppError::InternalError(_))));
    }
}
