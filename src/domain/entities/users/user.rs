//! User Entity Implementation
//!
//! 저장소에 영속되는 사용자 엔티티입니다.
//! 이메일이 유일 키이며, 식별자는 저장 시점에 저장소가 할당합니다.

use std::fmt;

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 식별자
///
/// 저장소가 1부터 단조 증가하는 값으로 할당합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 사용자 엔티티
///
/// 원본 비밀번호는 저장하지 않고, 단방향 해시만 보관합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 저장 전에는 `None`
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    /// 저장 전 상태의 새 사용자 생성
    pub fn new(first_name: String, last_name: String, email: String, password_hash: String) -> Self {
        Self {
            id: None,
            email,
            first_name,
            last_name,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    /// 할당된 식별자와 함께 복사본을 반환합니다.
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new(
            "user".to_string(),
            "123".to_string(),
            "daa@mail.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert!(user.id.is_none());
        assert_eq!(user.email, "daa@mail.com");
        assert_eq!(user.with_id(UserId(7)).id, Some(UserId(7)));
    }

    #[test]
    fn test_id_serializes_as_mongo_key() {
        let user = User::new(
            "a".to_string(),
            "b".to_string(),
            "a@b.com".to_string(),
            "hash".to_string(),
        )
        .with_id(UserId(3));

        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["_id"], 3);
    }
}
