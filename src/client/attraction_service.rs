use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::client::data_service::DataService;
use crate::client::transport::HttpTransport;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::attraction::Attraction;
use crate::models::message::ApiMessage;
use crate::models::review::{Review, ReviewSubmission};

/// Typed façade over the attraction and critique endpoints.
#[derive(Debug, Clone)]
pub struct AttractionService<T> {
    data: DataService<T>,
}

fn project<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(ApiError::decode)
}

impl<T: HttpTransport> AttractionService<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            data: DataService::new(transport, config),
        }
    }

    pub async fn get_all_attractions(&self) -> Result<Vec<Attraction>, ApiError> {
        project(self.data.get_data("/attraction").await?)
    }

    /// Adds the attraction, or updates it when `attraction_id` is set.
    pub async fn post_attraction(&self, attraction: &Attraction) -> Result<ApiMessage, ApiError> {
        project(self.data.post_data("/attraction", attraction).await?)
    }

    /// The server answers `[]` for an unknown id, which maps to `None`.
    pub async fn get_attraction(&self, attraction_id: i64) -> Result<Option<Attraction>, ApiError> {
        let value = self
            .data
            .get_data(&format!("/attraction/{}", attraction_id))
            .await?;
        match value {
            Value::Array(items) if items.is_empty() => Ok(None),
            other => project(other).map(Some),
        }
    }

    pub async fn delete_attraction(&self, attraction_id: i64) -> Result<(), ApiError> {
        self.data
            .delete_data(&format!("/attraction/{}", attraction_id))
            .await
            .map(|_| ())
    }

    pub async fn get_visible_attractions(&self) -> Result<Vec<Attraction>, ApiError> {
        project(self.data.get_data("/attraction/visible").await?)
    }

    pub async fn get_visible_attractions_with_critiques(&self) -> Result<Vec<Attraction>, ApiError> {
        project(self.data.get_data("/attraction/visible/critiques").await?)
    }

    pub async fn post_critique(&self, critique: &ReviewSubmission) -> Result<ApiMessage, ApiError> {
        project(self.data.post_data("/critique", critique).await?)
    }

    pub async fn get_critiques_by_attraction(&self, attraction_id: i64) -> Result<Vec<Review>, ApiError> {
        project(
            self.data
                .get_data(&format!("/critique/attraction/{}", attraction_id))
                .await?,
        )
    }
}
