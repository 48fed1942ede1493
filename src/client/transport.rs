use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::{Request, Response};
use serde_json::Value;
use crate::error::ApiError;

/// One HTTP round trip returning the decoded JSON body.
///
/// Every call issues exactly one request and resolves once. Implementations
/// do not retry, cache or deduplicate.
pub trait HttpTransport {
    fn get(&self, url: &str) -> LocalBoxFuture<'static, Result<Value, ApiError>>;
    fn post(&self, url: &str, body: Value) -> LocalBoxFuture<'static, Result<Value, ApiError>>;
    fn delete(&self, url: &str) -> LocalBoxFuture<'static, Result<Value, ApiError>>;
}

/// Browser transport backed by `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    fn get(&self, url: &str) -> LocalBoxFuture<'static, Result<Value, ApiError>> {
        let url = url.to_owned();
        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_body(response).await
        }
        .boxed_local()
    }

    fn post(&self, url: &str, body: Value) -> LocalBoxFuture<'static, Result<Value, ApiError>> {
        let url = url.to_owned();
        async move {
            let request = Request::post(&url)
                .json(&body)
                .map_err(|e| ApiError::Encode(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_body(response).await
        }
        .boxed_local()
    }

    fn delete(&self, url: &str) -> LocalBoxFuture<'static, Result<Value, ApiError>> {
        let url = url.to_owned();
        async move {
            let response = Request::delete(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_body(response).await
        }
        .boxed_local()
    }
}

async fn read_body(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status { status, body: text });
    }
    Ok(parse_body(&text))
}

/// Some routes answer with plain text ("Element supprimé."), which is kept
/// as a JSON string rather than treated as a failure.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("[1,2]"), json!([1, 2]));
        assert_eq!(parse_body("Element supprimé."), json!("Element supprimé."));
    }
}
