//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙집중식 관리합니다.
//! `.env.dev` / `.env.prod` 파일은 `main.rs`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="ecommerce_dev"
//!
//! # 보안 / 검증
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export BCRYPT_COST="12"           # 4-15 범위
//! export PASSWORD_MIN_LENGTH="3"
//! export PASSWORD_MAX_LENGTH="72"
//!
//! # Rate limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
