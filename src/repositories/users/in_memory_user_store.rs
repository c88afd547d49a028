//! 메모리 기반 사용자 저장소
//!
//! 테스트와 로컬 개발용 구현체입니다. 이메일을 키로 하는 맵에 사용자를 보관합니다.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::users::{User, UserId};
use crate::repositories::users::user_store::{StoreError, StoreResult, UserStore};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<String, User>,
    last_id: i64,
}

/// 메모리 기반 [`UserStore`] 구현체
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user_by_email(&self, email: &str) -> StoreResult<User> {
        self.inner
            .read()
            .await
            .users
            .get(email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_user_by_id(&self, id: UserId) -> StoreResult<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|user| user.id == Some(id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut guard = self.inner.write().await;

        if guard.users.contains_key(&user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        guard.last_id += 1;
        let stored = user.with_id(UserId(guard.last_id));
        guard.users.insert(stored.email.clone(), stored.clone());

        Ok(stored)
    }
}
