//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 전달하는 응답 구조입니다.
//! 민감한 정보(비밀번호 해시)는 응답에서 제외됩니다.
//!
//! ```json
//! {
//!   "message": "사용자가 성공적으로 등록되었습니다",
//!   "user": {
//!     "ID": 1,
//!     "FirstName": "user",
//!     "LastName": "123",
//!     "Email": "daa@mail.com",
//!     "CreatedAt": "2024-06-01T10:00:00Z"
//!   }
//! }
//! ```

pub mod user_response;

pub use user_response::{RegisterUserResponse, UserResponse};
