//! JSON body extractor whose rejections use the API error format

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;

/// Wrapper around `axum::Json` that rejects malformed bodies with a
/// 400 `{"error": ...}` response instead of axum's plain-text rejection
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match &rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid request body: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                "Missing Content-Type header, expected 'application/json'".to_string()
            }
            JsonRejection::BytesRejection(err) => {
                format!("Failed to read request body: {}", err.body_text())
            }
            _ => "Invalid JSON request".to_string(),
        };
        tracing::debug!(status = %rejection.status(), error = %message, "Request body rejected");

        ApiError::bad_request(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn well_formed_body_is_extracted() {
        let ApiJson(body) = ApiJson::<Payload>::from_request(
            request(Some("application/json"), r#"{"name":"Hawks"}"#),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(body.name, "Hawks");
    }

    #[tokio::test]
    async fn wrong_type_is_bad_request() {
        let err = ApiJson::<Payload>::from_request(request(Some("application/json"), r#"{"name":7}"#), &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("name"));
    }

    #[tokio::test]
    async fn syntax_error_and_missing_content_type_are_bad_requests() {
        let syntax = ApiJson::<Payload>::from_request(request(Some("application/json"), "{"), &())
            .await
            .unwrap_err();
        let untyped = ApiJson::<Payload>::from_request(request(None, r#"{"name":"Hawks"}"#), &())
            .await
            .unwrap_err();

        assert_eq!(syntax.status, StatusCode::BAD_REQUEST);
        assert_eq!(untyped.status, StatusCode::BAD_REQUEST);
        assert!(untyped.message.contains("Content-Type"));
    }
}
