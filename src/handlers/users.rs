//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/register` | 사용자 등록 | 201 Created |
//! | `GET` | `/users/{user_id}` | 사용자 조회 | 200 OK |
//!
//! 두 핸들러 모두 [`UserService`]를 `web::Data`로 주입받습니다.

use actix_web::{get, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::RegisterUserPayload;
use crate::domain::entities::users::UserId;
use crate::services::users::UserService;

/// 요청 본문을 등록 페이로드로 디코딩합니다.
///
/// Content-Type 헤더는 요구하지 않습니다.
fn decode_payload(body: &[u8]) -> Result<RegisterUserPayload, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::DecodeError("missing request body".to_string()));
    }

    serde_json::from_slice(body).map_err(|e| AppError::DecodeError(e.to_string()))
}

/// 사용자 등록 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "FirstName": "user",
///   "LastName": "123",
///   "Email": "daa@mail.com",
///   "Password": "asd"
/// }
/// ```
///
/// # 응답
///
/// - `201 Created` - 등록 성공
/// - `400 Bad Request` - JSON 파싱 실패, 검증 실패, 이미 등록된 이메일
/// - `500 Internal Server Error` - 저장소 오류
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/register \
///   -d '{"FirstName":"user","LastName":"123","Email":"daa@mail.com","Password":"asd"}'
/// ```
#[post("/register")]
pub async fn register_user(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = decode_payload(&body)?;
    let response = service.register_user(payload).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 조회 핸들러
///
/// - `200 OK` - 사용자 정보 (비밀번호 해시 제외)
/// - `400 Bad Request` - 숫자가 아닌 ID
/// - `404 Not Found` - 사용자 없음
#[get("/users/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = user_id
        .parse::<i64>()
        .map(UserId)
        .map_err(|_| AppError::invalid_field("id", "사용자 ID는 숫자여야 합니다"))?;

    let user = service.get_user_by_id(id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    use crate::core::validation::PayloadValidator;
    use crate::repositories::users::{InMemoryUserStore, UserStore};
    use crate::services::users::BcryptPasswordHasher;

    fn user_service(store: Arc<InMemoryUserStore>) -> web::Data<UserService> {
        web::Data::new(UserService::new(
            store,
            PayloadValidator::default(),
            Arc::new(BcryptPasswordHasher::new(4)),
        ))
    }

    #[test]
    fn test_decode_rejects_empty_body() {
        assert!(matches!(decode_payload(b""), Err(AppError::DecodeError(_))));
        assert!(matches!(decode_payload(b"  \n"), Err(AppError::DecodeError(_))));
    }

    #[actix_web::test]
    async fn test_register_returns_created() {
        let store = Arc::new(InMemoryUserStore::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(user_service(store.clone()))
                .service(register_user),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/register")
            .set_payload(
                json!({
                    "FirstName": "user",
                    "LastName": "123",
                    "Email": "daa@mail.com",
                    "Password": "asd"
                })
                .to_string(),
            )
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["user"]["Email"], "daa@mail.com");
        assert!(body["user"].get("PasswordHash").is_none());
        assert!(store.get_user_by_email("daa@mail.com").await.is_ok());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_decode_error() {
        let store = Arc::new(InMemoryUserStore::new());
        let app = actix_test::init_service(
            App::new()
                .app_data(user_service(store.clone()))
                .service(register_user),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/register")
            .set_payload("{\"FirstName\": ")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "decode_error");
        assert!(store.is_empty().await);
    }

    #[actix_web::test]
    async fn test_get_user_by_path_id() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = user_service(store);
        let app = actix_test::init_service(
            App::new()
                .app_data(service.clone())
                .service(register_user)
                .service(get_user),
        )
        .await;

        let register = actix_test::TestRequest::post()
            .uri("/register")
            .set_payload(r#"{"FirstName":"user","LastName":"123","Email":"daa@mail.com","Password":"asd"}"#)
            .to_request();
        assert_eq!(actix_test::call_service(&app, register).await.status(), StatusCode::CREATED);

        let found = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/users/1").to_request()).await;
        assert_eq!(found.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(found).await;
        assert_eq!(body["ID"], 1);

        let missing = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/users/9").to_request()).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let invalid = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/users/abc").to_request()).await;
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }
}
