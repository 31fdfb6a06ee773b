//! External book metadata lookup (Google Books volumes API)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    config::MetadataConfig,
    error::{AppError, AppResult},
};

/// Title and author prefill data for the registration form
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<VolumeItem>>,
}

#[derive(Debug, Deserialize)]
struct VolumeItem {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize)]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct MetadataService {
    client: reqwest::Client,
    base_url: String,
}

impl MetadataService {
    pub fn new(config: &MetadataConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up title and author for an ISBN.
    ///
    /// Returns `Ok(None)` when the catalog has no match for the ISBN;
    /// network or upstream failures are reported as errors so the caller
    /// can tell "unknown ISBN" apart from "lookup unavailable".
    pub async fn lookup_by_isbn(&self, isbn: &str) -> AppResult<Option<BookMetadata>> {
        let url = format!("{}/volumes?q=isbn:{}", self.base_url, isbn);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Metadata(format!("Metadata API unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Metadata(format!(
                "Metadata API returned status {}",
                response.status()
            )));
        }

        let parsed: VolumesResponse = response
            .json()
            .await
            .map_err(|e| AppError::Metadata(format!("Invalid metadata response: {}", e)))?;

        let Some(items) = parsed.items else {
            tracing::debug!("No metadata match for isbn {}", isbn);
            return Ok(None);
        };

        let Some(first) = items.into_iter().next() else {
            return Ok(None);
        };

        let title = first.volume_info.title.unwrap_or_default();
        let author = match first.volume_info.authors {
            Some(authors) if !authors.is_empty() => authors.join(", "),
            _ => "Unknown".to_string(),
        };

        Ok(Some(BookMetadata { title, author }))
    }
}
