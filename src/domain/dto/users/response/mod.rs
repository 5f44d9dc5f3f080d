pub mod google_oauth_response;
pub mod user_response;

pub use google_oauth_response::{GoogleTokenResponse, OAuthLoginUrlResponse};
pub use user_response::{LimitedUserResponse, UserResponse};
