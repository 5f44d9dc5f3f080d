//! # 사용자 관리 서비스 구현
//!
//! 계정 조회, 프로필 수정, 계정 삭제를 담당합니다.
//! 비밀번호 검증과 토큰 발급은 [`AuthService`](crate::services::auth::AuthService)가 맡습니다.
//!
//! ```text
//! ┌───────────────────────────────┐
//! │          UserService          │
//! │ • By ID / By Email            │
//! │ • Profile Update              │
//! │ • Account Delete              │
//! └───────────────┬───────────────┘
//!                 ▼
//! ┌───────────────────────────────┐
//! │   Arc<dyn UserRepository>     │
//! └───────────────────────────────┘
//! ```
//!
//! 모든 조회 실패는 [`AppError::NotFound`]로 보고됩니다.

use std::sync::Arc;

use log::info;

use crate::{
    domain::{dto::users::request::UpdateUserRequest, entities::users::User},
    errors::{AppError, AppResult},
    repositories::users::UserRepository,
};

/// 사용자 관리 서비스
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없는 경우
    pub async fn get_user_by_id(&self, id: i64) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// 이메일로 사용자 조회
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    /// 프로필 수정
    ///
    /// 요청에 값이 있는 필드만 반영하고, `updated_at`을 갱신합니다.
    /// 변경할 필드가 하나도 없으면 저장하지 않고 현재 상태를 반환합니다.
    pub async fn update_profile(&self, email: &str, request: UpdateUserRequest) -> AppResult<User> {
        let mut user = self.get_user_by_email(email).await?;

        if request.is_empty() {
            return Ok(user);
        }

        if let Some(username) = request.username {
            user.username = username;
        }
        if let Some(profile_image) = request.profile_image {
            user.profile_image_url = Some(profile_image);
        }
        user.touch();

        let updated = self.user_repo.update(user).await?;
        info!("👤 프로필 수정 완료: {}", updated.email);

        Ok(updated)
    }

    /// 이메일에 해당하는 계정을 삭제합니다.
    pub async fn delete_by_email(&self, email: &str) -> AppResult<()> {
        let user = self.get_user_by_email(email).await?;
        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        if !self.user_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        info!("🗑️ 계정 삭제 완료: {}", email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    async fn service_with_user() -> (UserService, User) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = repo
            .insert(User::new_local("user@example.com", "tester", "$2b$04$hash"))
            .await
            .unwrap();
        (UserService::new(repo), user)
    }

    #[actix_web::test]
    async fn test_get_user_by_id_and_email() {
        let (service, user) = service_with_user().await;

        let by_id = service.get_user_by_id(user.id.unwrap()).await.unwrap();
        let by_email = service.get_user_by_email("user@example.com").await.unwrap();

        assert_eq!(by_id, by_email);
        assert!(matches!(
            service.get_user_by_id(999).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.get_user_by_email("missing@example.com").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_profile_applies_present_fields() {
        let (service, _) = service_with_user().await;

        let updated = service
            .update_profile(
                "user@example.com",
                UpdateUserRequest {
                    username: None,
                    profile_image: Some("https://example.com/me.png".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.username, "tester");
        assert_eq!(updated.profile_image_url.as_deref(), Some("https://example.com/me.png"));

        let stored = service.get_user_by_email("user@example.com").await.unwrap();
        assert_eq!(stored.profile_image_url, updated.profile_image_url);
    }

    #[actix_web::test]
    async fn test_empty_update_is_noop() {
        let (service, user) = service_with_user().await;

        let unchanged = service
            .update_profile("user@example.com", UpdateUserRequest::default())
            .await
            .unwrap();

        assert_eq!(unchanged, user);
    }

    #[actix_web::test]
    async fn test_delete_by_email() {
        let (service, _) = service_with_user().await;

        service.delete_by_email("user@example.com").await.unwrap();

        assert!(matches!(
            service.get_user_by_email("user@example.com").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_by_email("user@example.com").await,
            Err(AppError::NotFound(_))
        ));
    }
}
