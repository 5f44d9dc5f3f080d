//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::config::SecurityConfig;
use crate::domain::models::auth::authenticated_user::AUTHENTICATION_REQUIRED_MESSAGE;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub config: Rc<SecurityConfig>,
    pub token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let config = self.config.clone();
        let token_service = self.token_service.clone();

        Box::pin(async move {
            match authenticate(&req, &token_service, config.strict_filter_errors) {
                Ok(Some(user)) => {
                    log::debug!("인증 성공: {} {:?}", user.subject, user.authorities);
                    req.extensions_mut().insert(user);
                }
                Ok(None) => {}
                Err(err) => {
                    log::warn!("인증 실패 ({}): {}", req.path(), err);
                    return Ok(req.error_response(err).map_into_right_body());
                }
            }

            let authenticated = req.extensions().contains::<AuthenticatedUser>();
            if !authenticated && !config.is_public(req.path()) {
                log::debug!("인증되지 않은 보호 경로 접근: {} {}", req.method(), req.path());
                let err = AppError::AuthenticationError(AUTHENTICATION_REQUIRED_MESSAGE.to_string());
                return Ok(req.error_response(err).map_into_right_body());
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 Bearer 토큰을 추출하여 인증 주체로 변환
///
/// * `Ok(None)` - 토큰이 없거나, 관대 모드에서 토큰이 유효하지 않은 경우
/// * `Err(_)` - 엄격 모드의 잘못된 토큰, 또는 권한 클레임이 없는 토큰
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
    strict: bool,
) -> AppResult<Option<AuthenticatedUser>> {
    let Some(token) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(TokenService::extract_bearer_token)
    else {
        return Ok(None);
    };

    let rejected = match token_service.verify(token) {
        Ok(claims) if claims.is_access() => None,
        Ok(_) => Some(AppError::InvalidToken("Invalid Token".to_string())),
        Err(e) => Some(e),
    };

    if let Some(err) = rejected {
        if strict {
            return Err(err);
        }
        log::debug!("유효하지 않은 토큰, 익명으로 진행: {}", err);
        return Ok(None);
    }

    token_service.resolve(token).map(Some)
}
