//! # Application Error Handling System
//!
//! 사용자 등록 서비스의 통합 에러 처리 시스템입니다.
//! 요청 하나는 항상 하나의 응답으로 끝나며, 모든 실패 경로는 `AppError`로
//! 수렴한 뒤 `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `DecodeError` | 400 Bad Request | 요청 본문 JSON 파싱 실패 |
//! | `ValidationError` | 400 Bad Request | 필드 제약 조건 위반 |
//! | `ConflictError` | 400 Bad Request | 이미 등록된 이메일 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `StorageError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 중복 이메일은 기존 클라이언트와의 호환을 위해 409가 아닌 400으로 응답하며,
//! 본문의 `error` 코드(`conflict`)로 검증 실패와 구분합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "validation_error",
//!   "message": "입력 데이터가 유효하지 않습니다",
//!   "details": {
//!     "Email": ["유효한 이메일 주소를 입력해주세요"]
//!   }
//! }
//! ```
//!
//! 5xx 응답에는 내부 정보가 포함되지 않습니다. 상세 내용은 서버 로그에만 기록됩니다.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::error;
use serde::Serialize;
use thiserror::Error;

/// 필드별 검증 실패 메시지 목록
///
/// 키는 요청 JSON의 필드명(`FirstName`, `Email` 등)이며 값은 해당 필드의 실패 사유입니다.
/// 응답 순서가 항상 같도록 `BTreeMap`을 사용합니다.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// 애플리케이션 전역 에러 타입
///
/// 등록 요청 처리 중 발생할 수 있는 모든 실패를 표현합니다.
/// 어떤 변형도 핸들러 내부에서 재시도되지 않으며, 발생 즉시 요청 처리가 종료됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문 디코딩 실패 (400 Bad Request)
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 실패한 모든 필드와 사유를 담습니다.
    #[error("Validation error: {}", summarize(.0))]
    ValidationError(FieldErrors),

    /// 이미 등록된 이메일 (400 Bad Request)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 에러 (500 Internal Server Error)
    ///
    /// MongoDB 연결 실패, 쓰기 실패 등. 상세 내용은 클라이언트에 노출하지 않습니다.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 필드 검증 에러를 생성합니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let err = AppError::invalid_field("id", "사용자 ID는 숫자여야 합니다");
    /// ```
    pub fn invalid_field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        AppError::ValidationError(errors)
    }

    /// 응답 본문의 `error` 필드에 들어갈 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DecodeError(_) => "decode_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::ConflictError(_) => "conflict",
            AppError::NotFound(_) => "not_found",
            AppError::StorageError(_) => "storage_error",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 서버 측 에러 여부
    pub fn is_server_error(&self) -> bool {
        matches!(self, AppError::StorageError(_) | AppError::InternalError(_))
    }
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a FieldErrors>,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DecodeError(_)
            | AppError::ValidationError(_)
            | AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 4xx 에러는 원인 메시지를 그대로 전달하고,
    /// 5xx 에러는 로그에만 상세 내용을 남긴 뒤 일반 메시지로 응답합니다.
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            _ if self.is_server_error() => {
                error!("{}", self);
                "internal server error".to_string()
            }
            AppError::ValidationError(_) => "입력 데이터가 유효하지 않습니다".to_string(),
            AppError::DecodeError(msg)
            | AppError::ConflictError(msg)
            | AppError::NotFound(msg)
            | AppError::StorageError(msg)
            | AppError::InternalError(msg) => msg.clone(),
        };

        let body = ErrorBody {
            error: self.code(),
            message,
            details: match self {
                AppError::ValidationError(fields) => Some(fields),
                _ => None,
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
