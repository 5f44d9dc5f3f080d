//! 프로필 수정 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 수정 요청
///
/// 비어 있거나 공백뿐인 필드는 `None`으로 처리되어 변경되지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 4, max = 30, message = "Username must be between 4 and 30 characters"))]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "Profile image must be a valid URL"))]
    pub profile_image: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.profile_image.is_none()
    }
}
