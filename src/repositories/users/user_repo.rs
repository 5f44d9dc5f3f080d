//! # 사용자 리포지토리
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 서비스 계층은 [`UserRepository`] trait에만 의존하며, 실행 시
//! `STORAGE_BACKEND` 설정에 따라 MongoDB 구현 또는 메모리 구현이 주입됩니다.
//!
//! ## MongoDB 저장 구조
//!
//! - **users**: 사용자 문서 (`_id`는 정수 시퀀스)
//! - **counters**: `{ _id: "users", seq: <i64> }` 형태의 시퀀스 문서
//! - **인덱스**: email(unique), (oauth_provider, oauth_id)

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::User,
    errors::{AppError, AppResult},
};

/// 사용자 저장소 추상화
///
/// 모든 구현은 이메일 유일성을 보장해야 하며, 중복 시
/// [`AppError::EmailAlreadyExists`]를 반환합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// OAuth 프로바이더 이름과 프로바이더 사용자 ID로 조회
    async fn find_by_oauth(&self, provider: &str, oauth_id: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 할당된 ID가 채워진 엔티티를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 기존 사용자 문서를 통째로 교체합니다.
    async fn update(&self, user: User) -> AppResult<User>;

    /// 삭제 여부를 반환합니다. 없는 ID면 `false`.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const USERS_SEQUENCE: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    users: Collection<User>,
    counters: Collection<Document>,
}

impl MongoUserRepository {
    /// 리포지토리를 생성하고 필요한 인덱스를 보장합니다.
    pub async fn new(database: &Database) -> AppResult<Self> {
        let db = database.get_database();
        let repo = Self {
            users: db.collection::<User>(USERS_COLLECTION),
            counters: db.collection::<Document>(COUNTERS_COLLECTION),
        };

        repo.create_indexes().await?;
        info!("✅ users 컬렉션 인덱스 준비 완료");

        Ok(repo)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 이미 중복 이메일이 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let oauth_index = IndexModel::builder()
            .keys(doc! { "oauth_provider": 1, "oauth_id": 1 })
            .options(IndexOptions::builder().name("oauth_lookup".to_string()).build())
            .build();

        self.users
            .create_indexes([email_index, oauth_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// `counters` 컬렉션에서 다음 사용자 ID를 원자적으로 할당합니다.
    async fn next_id(&self) -> AppResult<i64> {
        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": USERS_SEQUENCE }, doc! { "$inc": { "seq": 1_i64 } })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("사용자 ID 시퀀스 할당 실패".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

fn map_write_error(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&err) {
        AppError::EmailAlreadyExists
    } else {
        AppError::DatabaseError(err.to_string())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_oauth(&self, provider: &str, oauth_id: &str) -> AppResult<Option<User>> {
        self.users
            .find_one(doc! { "oauth_provider": provider, "oauth_id": oauth_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let id = self.next_id().await?;
        user.id = Some(id);

        self.users.insert_one(&user).await.map_err(map_write_error)?;
        debug!("사용자 저장 완료: id={}", id);

        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let id = user
            .id
            .ok_or_else(|| AppError::ValidationError("저장되지 않은 사용자입니다".to_string()))?;

        let result = self
            .users
            .replace_one(doc! { "_id": id }, &user)
            .await
            .map_err(map_write_error)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }

        Ok(user)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = self
            .users
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
