pub mod auth_request;
pub mod signup_request;
pub mod update_user_request;

pub use auth_request::{LoginRequest, OAuthCallbackQuery};
pub use signup_request::SignupRequest;
pub use update_user_request::UpdateUserRequest;
