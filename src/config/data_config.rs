//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 보안, 입력 검증 관련 설정을 환경 변수에서 읽어옵니다.
//! 잘못된 숫자 값은 에러 로그를 남기고 기본값으로 대체합니다.

use std::env;
use std::str::FromStr;

use log::error;

/// 환경 변수를 읽어 파싱합니다. 값이 없거나 파싱에 실패하면 기본값을 반환합니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
        Err(_) => default,
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 우선 적용되고,
    /// 그렇지 않으면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 입력 검증 정책
///
/// 비밀번호 길이 제한은 배포 환경마다 다를 수 있으므로 설정으로 관리합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// 최소 비밀번호 길이 (문자 수)
    pub password_min_length: usize,
    /// 최대 비밀번호 길이 (문자 수). 바이트 기준 72 제한은 별도로 항상 적용됩니다
    pub password_max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            password_min_length: 3,
            password_max_length: 72,
        }
    }
}

impl ValidationConfig {
    /// 환경 변수에서 검증 정책을 읽어옵니다.
    ///
    /// - `PASSWORD_MIN_LENGTH` (기본값: 3)
    /// - `PASSWORD_MAX_LENGTH` (기본값: 72)
    ///
    /// 최대값이 최소값보다 작으면 기본 정책으로 되돌립니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            password_min_length: env_or("PASSWORD_MIN_LENGTH", defaults.password_min_length),
            password_max_length: env_or("PASSWORD_MAX_LENGTH", defaults.password_max_length),
        };

        if config.password_max_length < config.password_min_length {
            error!(
                "PASSWORD_MAX_LENGTH({})가 PASSWORD_MIN_LENGTH({})보다 작습니다. 기본값 사용",
                config.password_max_length, config.password_min_length
            );
            return defaults;
        }

        config
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트. 기본값: "127.0.0.1" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4 (`SERVER_WORKERS`)
    pub fn workers() -> usize {
        env_or("SERVER_WORKERS", 4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    /// `MONGODB_URI`, `DATABASE_NAME` 환경 변수에서 읽어옵니다.
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "ecommerce_dev".to_string()),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본값: 100), `RATE_LIMIT_BURST_SIZE` (기본값: 200)
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_validation_config_defaults() {
        let config = ValidationConfig::default();

        assert_eq!(config.password_min_length, 3);
        assert_eq!(config.password_max_length, 72);
    }

    #[test]
    fn test_env_or_falls_back_on_missing_key() {
        let value: u16 = env_or("ECOMMERCE_USER_SERVICE_UNSET_TEST_KEY", 42);

        assert_eq!(value, 42);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
