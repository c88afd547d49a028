//! API 라우트 설정 모듈
//!
//! # Available Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /api/v1/register` - 사용자 등록
//! - `GET /api/v1/users/{user_id}` - 사용자 조회
//!
//! 핸들러가 사용하는 [`UserService`](crate::services::users::UserService)는
//! 호출 측에서 `app_data`로 등록해야 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/register \
///   -H "Content-Type: application/json" \
///   -d '{"FirstName":"user","LastName":"123","Email":"daa@mail.com","Password":"asd"}'
///
/// curl http://localhost:8080/api/v1/users/1
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::users::register_user)
            .service(handlers::users::get_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "ecommerce_user_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "ecommerce_user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
