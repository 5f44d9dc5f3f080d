//! # Google OAuth 2.0 Domain Models

pub mod google_user;
