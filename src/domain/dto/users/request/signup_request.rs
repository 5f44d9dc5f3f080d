//! # 회원가입 요청 DTO
//!
//! 이메일/비밀번호 계정 생성을 위한 요청 데이터입니다.
//!
//! ## 검증 규칙
//!
//! - `email`: 이메일 형식, 최대 50자
//! - `username`: 4-30자
//! - `password`: 최소 8자
//!
//! 이메일 중복 여부는 서비스 계층에서 검증합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "email": "user@example.com",
//!   "username": "john_doe",
//!   "password": "SecurePass123"
//! }
//! ```

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(
        email(message = "Email should be valid"),
        length(max = 50, message = "Email must be at most 50 characters long")
    )]
    pub email: String,

    #[validate(length(min = 4, max = 30, message = "Username must be between 4 and 30 characters"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, username: &str, password: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_signup_request() {
        assert!(request("user@example.com", "tester", "password123").validate().is_ok());
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(request("user@example.com", "abc", "password123").validate().is_err());
        assert!(request("user@example.com", "abcd", "password123").validate().is_ok());
        assert!(request("user@example.com", &"a".repeat(31), "password123").validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let errors = request("user@example.com", "tester", "short").validate().unwrap_err();

        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let result = serde_json::from_str::<SignupRequest>(r#"{"email": "user@example.com"}"#);

        assert!(result.is_err());
    }
}
