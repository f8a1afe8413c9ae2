//! Dataset Endpoints

use crate::models::Dataset;
use super::{read_json, ApiClient, ApiError};

impl ApiClient {
    /// `GET /logic/get_datasets_for_user/{user_id}`
    pub async fn datasets_for_user(&self, user_id: &str) -> Result<Vec<Dataset>, ApiError> {
        let url = self.url("logic/get_datasets_for_user", Some(user_id));
        log::debug!("[API] GET {}", url);
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }

    /// `GET /logic/endlabelling/{dataset_id}`; any 2xx counts as done
    pub async fn end_labelling(&self, dataset_id: &str) -> Result<(), ApiError> {
        let url = self.url("logic/endlabelling", Some(dataset_id));
        log::debug!("[API] GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
