//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_store::UserStore) 인터페이스와 두 가지 구현체를 제공합니다.
//!
//! - [`InMemoryUserStore`](in_memory_user_store::InMemoryUserStore) - 테스트/로컬 개발용
//! - [`MongoUserStore`](mongo_user_store::MongoUserStore) - MongoDB 기반 운영용
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let user = store.get_user_by_email("user@example.com").await?;
//! ```

pub mod in_memory_user_store;
pub mod mongo_user_store;
pub mod user_store;

pub use in_memory_user_store::InMemoryUserStore;
pub use mongo_user_store::MongoUserStore;
pub use user_store::{StoreError, StoreResult, UserStore};
