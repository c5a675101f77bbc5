//! Image availability checks
//!
//! The detail view lists product images by URL. Each URL is fetched once;
//! anything that does not come back as an image is shown as a placeholder.

use crate::http::{HttpClient, ProbeResponse};

/// Label rendered in place of an image that failed to load
pub const IMAGE_PLACEHOLDER: &str = "Image not found";

/// Load state of one image URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStatus {
    /// Not checked yet
    #[default]
    Pending,
    /// URL answered with an image
    Loaded,
    /// URL failed to load; render the placeholder
    Placeholder,
}

impl ImageStatus {
    /// Classify a probe answer. A missing content type is given the benefit
    /// of the doubt.
    pub fn from_probe(resp: &ProbeResponse) -> Self {
        let ok_status = (200..300).contains(&resp.status);
        let ok_type = resp
            .content_type
            .as_deref()
            .is_none_or(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"));
        if ok_status && ok_type {
            ImageStatus::Loaded
        } else {
            ImageStatus::Placeholder
        }
    }
}

/// Fetch `url` and decide whether it renders. Never fails: every error
/// becomes [`ImageStatus::Placeholder`].
pub async fn probe_image<H: HttpClient>(http: &H, url: &str) -> ImageStatus {
    match http.probe(url).await {
        Ok(resp) => {
            let status = ImageStatus::from_probe(&resp);
            if status == ImageStatus::Placeholder {
                tracing::debug!(url, status = resp.status, "image unavailable");
            }
            status
        }
        Err(e) => {
            tracing::debug!(url, error = %e, "image probe failed");
            ImageStatus::Placeholder
        }
    }
}
