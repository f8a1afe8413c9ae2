//! Feed Endpoints
//!
//! Page retrieval and label submission.

use crate::models::{FeedItem, LabelSubmission};
use super::{read_json, ApiClient, ApiError};

impl ApiClient {
    /// `GET /logic/get_feed/{count}`
    pub async fn get_feed(&self, count: usize) -> Result<Vec<FeedItem>, ApiError> {
        let url = self.url("logic/get_feed", Some(&count.to_string()));
        log::debug!("[API] GET {}", url);
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }

    /// `POST /logic/label`, returns the backend acknowledgement
    pub async fn submit_label(&self, submission: &LabelSubmission) -> Result<serde_json::Value, ApiError> {
        let url = self.url("logic/label", None);
        log::debug!("[API] POST {} data_id={} label={}", url, submission.item_id, submission.chosen_label);
        let response = self.http.post(&url).json(submission).send().await?;
        read_json(response).await
    }
}
