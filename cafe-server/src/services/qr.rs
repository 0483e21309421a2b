//! QR payload and image service
//!
//! The payload is a plain ordering URL built locally and stored verbatim;
//! image rendering is delegated to an external HTTP collaborator. A
//! rendering failure is logged and leaves the image empty, it never fails
//! table creation.

use std::time::Duration;

use reqwest::Url;

use crate::core::Config;

#[derive(Debug, Clone)]
pub struct QrService {
    client: reqwest::Client,
    public_base_url: String,
    image_endpoint: String,
    image_size: String,
}

impl QrService {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            image_endpoint: config.qr_image_endpoint.clone(),
            image_size: config.qr_image_size.clone(),
        }
    }

    /// Ordering URL encoded in the QR code
    ///
    /// Stable for the lifetime of the table: re-rendering the image never
    /// changes the payload.
    pub fn payload(&self, cafe_id: i64, table_number: i64) -> String {
        format!(
            "{}/menu/{}?table={}",
            self.public_base_url, cafe_id, table_number
        )
    }

    /// Ask the external collaborator to render `payload` as an image
    ///
    /// Returns the image URL once the collaborator confirms it resolves,
    /// or None on any failure.
    pub async fn render_image(&self, payload: &str) -> Option<String> {
        let url = match Url::parse_with_params(
            &self.image_endpoint,
            &[("size", self.image_size.as_str()), ("data", payload)],
        ) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Invalid QR image endpoint {}: {}", self.image_endpoint, e);
                return None;
            }
        };

        match self.client.get(url.clone()).send().await {
            Ok(response) if response.status().is_success() => Some(url.to_string()),
            Ok(response) => {
                tracing::warn!("QR image render returned {} for {}", response.status(), payload);
                None
            }
            Err(e) => {
                tracing::warn!("QR image render failed for {}: {}", payload, e);
                None
            }
        }
    }
}
