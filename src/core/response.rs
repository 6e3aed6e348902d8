//! 核心响应处理模块

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use super::error::CoreError;

/// 业务用例的结果
///
/// 服务层只决定结果种类，HTTP 状态码与响应头在 `IntoResponse` 中统一映射。
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 200，携带响应体
    Success(T),
    /// 201，携带新资源及其地址
    Created { location: String, body: T },
    /// 204，无响应体
    NoContentSuccess,
    /// 404
    NotFound,
}

impl<T> Outcome<T> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            Outcome::Created { location, body } => (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(body),
            )
                .into_response(),
            Outcome::NoContentSuccess => StatusCode::NO_CONTENT.into_response(),
            Outcome::NotFound => CoreError::NotFound("请求的资源不存在".to_string()).into_response(),
        }
    }
}
