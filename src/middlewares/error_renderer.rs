//! 에러 응답 렌더러
//!
//! 가장 바깥에서 모든 4xx/5xx 응답을 `{timestamp, status, error, message, path}`
//! 형태의 JSON 본문으로 다시 작성합니다.
//!
//! * 응답에 [`AppError`]가 붙어 있으면 그 메시지와 `details`를 사용
//! * JSON 본문 파싱 실패는 `"Invalid input format"`
//! * 그 외 프레임워크 에러(404, 405 등)는 상태 코드의 사유 문구
//! * 5xx는 항상 `"An unexpected error occurred"`

use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    error::JsonPayloadError,
    http::{header, StatusCode},
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    HttpResponse,
};

use crate::errors::{ApiErrorResponse, AppError, UNEXPECTED_ERROR_MESSAGE};

const INVALID_INPUT_MESSAGE: &str = "Invalid input format";

/// 에러 렌더러 미들웨어를 생성합니다.
pub fn error_renderer<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(render_error_body)
}

fn render_error_body<B: MessageBody + 'static>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let status = res.status();
    let path = res.request().path().to_string();

    let body = match res.response().error() {
        Some(err) => {
            if status.is_server_error() {
                log::error!("❌ {} {} 처리 실패: {}", res.request().method(), path, err);
            }
            if let Some(app_err) = err.as_error::<AppError>() {
                app_err.to_api_response(&path)
            } else if err.as_error::<JsonPayloadError>().is_some() {
                ApiErrorResponse::new(status, INVALID_INPUT_MESSAGE, &path)
            } else {
                ApiErrorResponse::new(status, default_message(status), &path)
            }
        }
        None => ApiErrorResponse::new(status, default_message(status), &path),
    };

    let (req, original) = res.into_parts();

    let mut builder = HttpResponse::build(status);
    for (name, value) in original.headers() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            builder.append_header((name.clone(), value.clone()));
        }
    }

    let rendered = ServiceResponse::new(req, builder.json(body)).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(rendered))
}

fn default_message(status: StatusCode) -> String {
    if status.is_server_error() {
        UNEXPECTED_ERROR_MESSAGE.to_string()
    } else {
        status.canonical_reason().unwrap_or("Error").to_string()
    }
}
