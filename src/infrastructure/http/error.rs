//! HTTP Error Handling
//!
//! - `ApiError`: JSON API 使用统一的 errno 响应格式（HTTP 状态码始终为 200）
//! - `PageError`: HTML 页面使用真实的 HTTP 状态码

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

use super::views;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let response = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = errno::NOT_FOUND, error = %msg, "Resource not found");
                ErrorResponse::new(errno::NOT_FOUND, msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                ErrorResponse::new(errno::BAD_REQUEST, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = errno::INTERNAL_ERROR, error = %msg, "Internal server error");
                ErrorResponse::new(errno::INTERNAL_ERROR, msg)
            }
        };

        (StatusCode::OK, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ChapterNotFound(_) => ApiError::NotFound(e.to_string()),
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::DirectoryAccess(_) | ApplicationError::FileRead(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

/// HTML 页面错误
#[derive(Debug)]
pub enum PageError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 内部错误细节只写日志，不暴露给页面
        let message = match self {
            PageError::NotFound(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Page not found");
                msg
            }
            PageError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad page request");
                msg
            }
            PageError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Page rendering failed");
                "The chapters could not be loaded.".to_string()
            }
        };

        (status, Html(views::render_error_page(status, &message))).into_response()
    }
}

impl From<ApplicationError> for PageError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ChapterNotFound(_) => PageError::NotFound(e.to_string()),
            ApplicationError::ValidationError(msg) => PageError::BadRequest(msg),
            ApplicationError::DirectoryAccess(_) | ApplicationError::FileRead(_) => {
                PageError::Internal(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_application_error_to_api_error() {
        assert!(matches!(
            ApiError::from(ApplicationError::chapter_not_found("intro")),
            ApiError::NotFound(msg) if msg == "Chapter not found: intro"
        ));
        assert!(matches!(
            ApiError::from(ApplicationError::validation("empty")),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(ApplicationError::DirectoryAccess(PathBuf::from("db/files"))),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_page_error_status() {
        let not_found = PageError::from(ApplicationError::chapter_not_found("intro"));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let internal = PageError::from(ApplicationError::FileRead(PathBuf::from("x.md")));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bad = PageError::from(ApplicationError::validation("empty"));
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_uses_http_200() {
        let response = ApiError::NotFound("gone".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_page_error_uses_real_status() {
        let response = PageError::NotFound("gone".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
