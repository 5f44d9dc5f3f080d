//! 메모리 기반 사용자 리포지토리
//!
//! 개발 환경과 테스트에서 MongoDB 없이 동작하기 위한 구현입니다.
//! 프로세스가 재시작되면 모든 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::user_repo::UserRepository;
use crate::{
    domain::entities::users::User,
    errors::{AppError, AppResult},
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
    sequence: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_oauth(&self, provider: &str, oauth_id: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.is_oauth_account(provider, oauth_id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::EmailAlreadyExists);
        }

        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        user.id = Some(id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = user
            .id
            .ok_or_else(|| AppError::ValidationError("저장되지 않은 사용자입니다".to_string()))?;

        let mut users = self.users.write().await;

        if !users.contains_key(&id) {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }
        if users.values().any(|u| u.id != Some(id) && u.email == user.email) {
            return Err(AppError::EmailAlreadyExists);
        }

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}
