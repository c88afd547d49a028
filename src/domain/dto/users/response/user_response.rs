use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::entities::users::{User, UserId};

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UserResponse {
    #[serde(rename = "ID")]
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// RFC 3339 형식의 생성 시각
    pub created_at: String,
}

/// 저장소에 저장되어 ID가 할당된 사용자만 응답으로 변환할 수 있습니다.
impl TryFrom<User> for UserResponse {
    type Error = AppError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        let User {
            id,
            email,
            first_name,
            last_name,
            created_at,
            ..
        } = user;

        let id = id.ok_or_else(|| {
            AppError::InternalError(format!("저장된 사용자에 ID가 없습니다: {}", email))
        })?;

        Ok(Self {
            id,
            first_name,
            last_name,
            email,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
        })
    }
}

/// 사용자 등록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub message: String,
    pub user: UserResponse,
}

impl RegisterUserResponse {
    pub fn new(user: UserResponse) -> Self {
        Self {
            message: "사용자가 성공적으로 등록되었습니다".to_string(),
            user,
        }
    }
}
