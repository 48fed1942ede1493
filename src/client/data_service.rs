use leptos::logging::{error, log};
use serde::Serialize;
use serde_json::Value;
use crate::client::transport::HttpTransport;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Untyped access to the parc API: resolves paths against the configured
/// base URL and hands raw JSON back.
#[derive(Debug, Clone)]
pub struct DataService<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: HttpTransport> DataService<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub async fn get_data(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        log!("[CLIENT] GET {}", url);
        self.transport.get(&url).await.map_err(|e| {
            error!("[CLIENT] GET {} failed: {}", url, e);
            e
        })
    }

    pub async fn post_data<P>(&self, path: &str, payload: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path);
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        log!("[CLIENT] POST {} {}", url, body);
        self.transport.post(&url, body).await.map_err(|e| {
            error!("[CLIENT] POST {} failed: {}", url, e);
            e
        })
    }

    pub async fn delete_data(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        log!("[CLIENT] DELETE {}", url);
        self.transport.delete(&url).await.map_err(|e| {
            error!("[CLIENT] DELETE {} failed: {}", url, e);
            e
        })
    }
}
