//! Frontend Models
//!
//! Data structures matching the remote labeling API.

use serde::{Deserialize, Serialize};

/// One labelable content item from the feed (immutable once received)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(rename = "data_id")]
    pub id: String,
    /// Base64-encoded image payload
    #[serde(rename = "url")]
    pub content: String,
    #[serde(rename = "label_options", default)]
    pub label_choices: Vec<String>,
}

impl FeedItem {
    /// `src` attribute for rendering the payload inline
    pub fn image_src(&self) -> String {
        format!("data:image/png;base64,{}", self.content)
    }
}

/// Body of `POST /logic/label`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSubmission {
    #[serde(rename = "data_id")]
    pub item_id: String,
    #[serde(rename = "label")]
    pub chosen_label: String,
    #[serde(rename = "user_id")]
    pub submitter_id: String,
}

/// Dataset owned by a user (overview page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub dataset_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub label_options: Vec<String>,
    #[serde(default)]
    pub data_count: u64,
    #[serde(default)]
    pub labeled_count: u64,
    #[serde(default)]
    pub thumbnail: String,
    /// Labeling confidence in 0..=1
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub labels_received: u64,
}

impl Dataset {
    pub fn thumbnail_src(&self) -> String {
        format!("data:image/png;base64,{}", self.thumbnail)
    }
}
