//! 사용자 계정 핸들러
//!
//! `/v1/users/me`는 요청 게이트가 붙여 준 인증 주체의 이메일로 계정을 찾습니다.
//! `/v1/users/{id}`는 공개 경로이며 제한된 프로필만 반환합니다.
use actix_web::{delete, get, put, web, HttpResponse};
use validator::Validate;

use crate::core::ServiceRegistry;
use crate::domain::dto::users::request::UpdateUserRequest;
use crate::domain::dto::users::response::{LimitedUserResponse, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;

#[get("/me")]
pub async fn get_me(
    registry: web::Data<ServiceRegistry>,
    principal: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = registry.user_service.get_user_by_email(principal.email()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[put("/me")]
pub async fn update_me(
    registry: web::Data<ServiceRegistry>,
    principal: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = registry
        .user_service
        .update_profile(principal.email(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/me")]
pub async fn delete_me(
    registry: web::Data<ServiceRegistry>,
    principal: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    registry.user_service.delete_by_email(principal.email()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[get("/{user_id}")]
pub async fn get_user(
    registry: web::Data<ServiceRegistry>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = registry.user_service.get_user_by_id(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(LimitedUserResponse::from(user)))
}
