//! # MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 사용자 문서를 저장하는 [`UserStore`] 구현체입니다.
//!
//! ## 저장 구조
//!
//! - **컬렉션명**: `users`, 문서 키 `_id`는 숫자형 사용자 ID
//! - **ID 할당**: `counters` 컬렉션의 `{ _id: "users", seq }` 문서를
//!   `$inc` + upsert로 원자적으로 증가시켜 발급
//! - **인덱스**: email(unique), created_at(desc)
//!
//! 이메일 유일성은 유니크 인덱스가 최종적으로 보장하며,
//! 중복 키 에러(11000)는 [`StoreError::DuplicateEmail`]로 변환됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::Deserialize;

use crate::db::Database;
use crate::domain::entities::users::{User, UserId};
use crate::repositories::users::user_store::{StoreError, StoreResult, UserStore};

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

fn backend(error: mongodb::error::Error) -> StoreError {
    StoreError::Backend(error.to_string())
}

/// MongoDB 기반 [`UserStore`] 구현체
#[derive(Clone)]
pub struct MongoUserStore {
    db: Arc<Database>,
}

impl MongoUserStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    /// 다음 사용자 ID를 발급합니다.
    async fn next_id(&self) -> StoreResult<UserId> {
        let counters = self
            .db
            .get_database()
            .collection::<Counter>(COUNTERS_COLLECTION);

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = counters
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(backend)?
            .ok_or_else(|| StoreError::Backend("사용자 ID 카운터를 읽을 수 없습니다".to_string()))?;

        Ok(UserId(counter.seq))
    }

    /// 사용자 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    /// 이미 중복 이메일이 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> StoreResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.users()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(backend)?;

        Ok(())
    }
}

fn is_duplicate_key(code: i32) -> bool {
    code == DUPLICATE_KEY_CODE
}

/// 쓰기 에러를 저장소 에러로 변환합니다. 중복 키는 이메일 충돌로 취급합니다.
fn map_insert_error(error: mongodb::error::Error, email: &str) -> StoreError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *error.kind {
        if is_duplicate_key(write_error.code) {
            return StoreError::DuplicateEmail(email.to_string());
        }
    }
    backend(error)
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn get_user_by_email(&self, email: &str) -> StoreResult<User> {
        self.users()
            .find_one(doc! { "email": email })
            .await
            .map_err(backend)?
            .ok_or(StoreError::NotFound)
    }

    async fn get_user_by_id(&self, id: UserId) -> StoreResult<User> {
        self.users()
            .find_one(doc! { "_id": id.0 })
            .await
            .map_err(backend)?
            .ok_or(StoreError::NotFound)
    }

    async fn create_user(&self, user: User) -> StoreResult<User> {
        let id = self.next_id().await?;
        let user = user.with_id(id);

        self.users()
            .insert_one(&user)
            .await
            .map_err(|e| map_insert_error(e, &user.email))?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    fn user(email: &str) -> User {
        User::new(
            "user".to_string(),
            "123".to_string(),
            email.to_string(),
            "$2b$04$hash".to_string(),
        )
    }

    #[test]
    fn test_only_duplicate_key_code_is_email_conflict() {
        assert!(is_duplicate_key(11000));
        assert!(!is_duplicate_key(11001));
        assert!(!is_duplicate_key(121));
        assert!(!is_duplicate_key(0));
    }

    /// 실행: `MONGODB_URI=mongodb://localhost:27017 cargo test -- --ignored`
    #[actix_web::test]
    #[ignore = "MONGODB_URI가 가리키는 MongoDB 인스턴스가 필요합니다"]
    async fn test_sequential_ids_and_duplicate_email_against_live_mongodb() {
        let config = DatabaseConfig {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: format!(
                "ecommerce_user_store_test_{}",
                chrono::Utc::now().timestamp_millis()
            ),
        };
        let database = Arc::new(Database::connect(&config).await.unwrap());
        let store = MongoUserStore::new(Arc::clone(&database));
        store.create_indexes().await.unwrap();

        let first = store.create_user(user("first@mail.com")).await;
        let second = store.create_user(user("second@mail.com")).await;
        let duplicate = store.create_user(user("first@mail.com")).await;
        let by_id = store.get_user_by_id(UserId(2)).await;

        database.get_database().drop().await.unwrap();

        assert_eq!(first.unwrap().id, Some(UserId(1)));
        assert_eq!(second.unwrap().id, Some(UserId(2)));
        assert_eq!(
            duplicate,
            Err(StoreError::DuplicateEmail("first@mail.com".to_string()))
        );
        assert_eq!(by_id.unwrap().email, "second@mail.com");
    }
}
