use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{Role, User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub profile_image: Option<String>,
    pub oauth_provider: Option<String>,
    pub oauth_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            username,
            role,
            profile_image_url,
            oauth_provider,
            oauth_id,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.unwrap_or_default(),
            email,
            username,
            role,
            profile_image: profile_image_url,
            oauth_provider,
            oauth_id,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

fn to_utc(dt: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

/// 다른 사용자에게 공개되는 제한된 프로필
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitedUserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub profile_image: Option<String>,
}

impl From<User> for LimitedUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            email: user.email,
            username: user.username,
            profile_image: user.profile_image_url,
        }
    }
}
