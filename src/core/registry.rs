//! # 서비스 레지스트리
//!
//! 서버 기동 시 저장소와 서비스를 한 번 생성하고, 이후 모든 워커가
//! `web::Data<ServiceRegistry>`로 같은 인스턴스를 공유합니다.
//!
//! ```text
//! ┌──────────────────────┐
//! │   StorageBackend     │  MongoDB | Memory
//! └──────────┬───────────┘
//!            ▼
//!   Arc<dyn UserRepository>
//!            │
//!   ┌────────┼─────────────┐
//!   ▼        ▼             ▼
//! UserService AuthService  (TokenService 공유)
//! ```
//!
//! 의존성은 생성자 인자로 명시적으로 전달됩니다. 전역 상태는 없습니다.

use std::sync::Arc;

use log::info;

use crate::{
    config::{DatabaseConfig, JwtConfig, PasswordConfig, SecurityConfig, StorageBackend},
    db::Database,
    errors::AppResult,
    repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository},
    services::{
        auth::{AuthService, GoogleAuthService, TokenService},
        users::UserService,
    },
    utils::display_terminal::{
        print_boxed_title, print_final_summary, print_step_complete, print_step_start,
        print_sub_task,
    },
};

/// 핸들러와 미들웨어가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    pub token_service: Arc<TokenService>,
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
    /// OAuth가 비활성화되어 있으면 `None`
    pub google_auth_service: Option<Arc<GoogleAuthService>>,
}

impl ServiceRegistry {
    /// 이미 준비된 저장소와 토큰 서비스로 나머지 서비스를 구성합니다.
    pub fn build(
        user_repo: Arc<dyn UserRepository>,
        token_service: TokenService,
        bcrypt_cost: u32,
        rotate_refresh_tokens: bool,
        google_auth_service: Option<GoogleAuthService>,
    ) -> Self {
        let token_service = Arc::new(token_service);

        Self {
            user_service: Arc::new(UserService::new(user_repo.clone())),
            auth_service: Arc::new(AuthService::new(
                user_repo,
                token_service.clone(),
                bcrypt_cost,
                rotate_refresh_tokens,
            )),
            google_auth_service: google_auth_service.map(Arc::new),
            token_service,
        }
    }

    /// 환경 변수 설정에 따라 저장소를 선택하고 모든 서비스를 초기화합니다.
    pub async fn initialize(security: &SecurityConfig) -> AppResult<Self> {
        print_boxed_title("🔄 BUILDING ACCOUNT SERVICES");

        print_step_start(1, "Selecting user storage");
        let backend = DatabaseConfig::backend();
        let (user_repo, storage): (Arc<dyn UserRepository>, &str) = match backend {
            StorageBackend::MongoDb => {
                let database = Database::new().await?;
                let repo = MongoUserRepository::new(&database).await?;
                print_sub_task("UserRepository", database.database_name());
                (Arc::new(repo), "MongoDB")
            }
            StorageBackend::Memory => {
                print_sub_task("UserRepository", "in-memory (data is lost on restart)");
                (Arc::new(InMemoryUserRepository::new()), "Memory")
            }
        };
        print_step_complete(1, "User storage ready", 1);

        print_step_start(2, "Creating services");
        let token_service = TokenService::from_config()?;
        print_sub_task(
            "TokenService",
            &format!("HS256, access {}s", token_service.access_ttl_seconds()),
        );

        let bcrypt_cost = PasswordConfig::bcrypt_cost();
        print_sub_task("AuthService", &format!("bcrypt cost {}", bcrypt_cost));
        print_sub_task("UserService", "✓ Created");

        let google = if security.oauth_enabled {
            print_sub_task("GoogleAuthService", "✓ Created");
            Some(GoogleAuthService::from_config())
        } else {
            print_sub_task("GoogleAuthService", "disabled");
            None
        };

        let registry = Self::build(
            user_repo,
            token_service,
            bcrypt_cost,
            JwtConfig::rotate_refresh_tokens(),
            google,
        );
        let service_count = 3 + usize::from(registry.google_auth_service.is_some());
        print_step_complete(2, "Services created", service_count);

        print_final_summary(storage, service_count, security.public_paths.len());
        info!("✅ 서비스 레지스트리 초기화 완료 (storage={})", storage);

        Ok(registry)
    }
}
