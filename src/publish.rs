//! Publish Draft
//!
//! Client-side state of the "publish new dataset" form.

/// Minimum number of label options a dataset must offer
pub const MIN_LABEL_OPTIONS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct DraftFile {
    pub name: String,
    /// Object URL used for the preview thumbnail
    pub preview_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    NotSignedIn,
    NoFiles,
    BlankLabelOption,
}

impl DraftError {
    pub fn message(self) -> &'static str {
        match self {
            DraftError::NotSignedIn => "You must be logged in to publish posts.",
            DraftError::NoFiles => "Please select at least one file to upload.",
            DraftError::BlankLabelOption => "Please fill in all label options.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishDraft {
    pub files: Vec<DraftFile>,
    pub label_options: Vec<String>,
}

impl Default for PublishDraft {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            label_options: vec![String::new(); MIN_LABEL_OPTIONS],
        }
    }
}

impl PublishDraft {
    pub fn add_files(&mut self, files: impl IntoIterator<Item = DraftFile>) {
        self.files.extend(files);
    }

    pub fn set_label_option(&mut self, index: usize, value: String) {
        if let Some(option) = self.label_options.get_mut(index) {
            *option = value;
        }
    }

    pub fn add_label_option(&mut self) {
        self.label_options.push(String::new());
    }

    /// Remove an option; the first two can never be removed
    pub fn remove_label_option(&mut self, index: usize) -> bool {
        if self.label_options.len() <= MIN_LABEL_OPTIONS || index >= self.label_options.len() {
            return false;
        }
        self.label_options.remove(index);
        true
    }

    pub fn is_removable(&self, index: usize) -> bool {
        index >= MIN_LABEL_OPTIONS
    }

    pub fn validate(&self, signed_in: bool) -> Result<(), DraftError> {
        if !signed_in {
            return Err(DraftError::NotSignedIn);
        }
        if self.files.is_empty() {
            return Err(DraftError::NoFiles);
        }
        if self.label_options.iter().any(|o| o.trim().is_empty()) {
            return Err(DraftError::BlankLabelOption);
        }
        Ok(())
    }

    /// Object URLs held by the selected files
    pub fn preview_urls(&self) -> Vec<String> {
        self.files.iter().map(|f| f.preview_url.clone()).collect()
    }

    /// Empty the form, handing back the preview URLs so they can be revoked
    pub fn reset(&mut self) -> Vec<String> {
        let urls = self.files.drain(..).map(|f| f.preview_url).collect();
        *self = Self::default();
        urls
    }
}
