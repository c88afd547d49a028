//! 이커머스 사용자 등록 서비스 메인 애플리케이션
//!
//! MongoDB 연결을 설정하고 의존성을 조립한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use ecommerce_user_service::config::{
    DatabaseConfig, RateLimitConfig, ServerConfig, ValidationConfig,
};
use ecommerce_user_service::core::validation::PayloadValidator;
use ecommerce_user_service::db::Database;
use ecommerce_user_service::repositories::users::MongoUserStore;
use ecommerce_user_service::routes::configure_all_routes;
use ecommerce_user_service::services::users::{BcryptPasswordHasher, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 등록 서비스 시작중...");

    let user_service = build_user_service().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(user_service)).await
}

/// 저장소, 검증기, 해셔를 생성하여 `UserService`를 조립합니다
async fn build_user_service() -> std::io::Result<UserService> {
    let database_config = DatabaseConfig::from_env();

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&database_config).await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let store = MongoUserStore::new(Arc::new(database));
    store.create_indexes().await.map_err(|e| {
        error!("사용자 인덱스 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let validation_config = ValidationConfig::from_env();
    info!("입력 검증 정책 로드됨: {:?}", validation_config);

    let hasher = BcryptPasswordHasher::from_env();
    info!("bcrypt cost: {}", hasher.cost());

    Ok(UserService::new(
        Arc::new(store),
        PayloadValidator::new(validation_config),
        Arc::new(hasher),
    ))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Register: POST http://{}/api/v1/register", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate limiting 설정이 유효하지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 출력합니다
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e);
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 로컬 프론트엔드와의 통신을 위한 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
