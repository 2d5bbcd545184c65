use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::redirect::Policy;
use serde::Deserialize;

use crate::application::ports::{AttachmentSource, AttachmentSourceError};
use crate::domain::{AttachmentMetadata, AttachmentRef, DownloadProbe};

pub const DEFAULT_SMARTSHEET_BASE_URL: &str = "https://api.smartsheet.com/2.0";

const PROBE_SNIPPET_CHARS: usize = 200;

/// Smartsheet REST client. The API key is sent only to the API host; signed
/// download URLs are fetched without credentials.
pub struct SmartsheetClient {
    api_client: Client,
    probe_client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttachmentResponse {
    name: String,
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    size_in_kb: Option<u64>,
}

impl SmartsheetClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, AttachmentSourceError> {
        let api_client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| AttachmentSourceError::RequestFailed(format!("client init: {e}")))?;

        let probe_client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| AttachmentSourceError::RequestFailed(format!("client init: {e}")))?;

        Ok(Self {
            api_client,
            probe_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn error_from_status(response: reqwest::Response) -> AttachmentSourceError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::error!(status, body = %body, "Storage service returned an error");
        AttachmentSourceError::UpstreamStatus { status, body }
    }
}

#[async_trait]
impl AttachmentSource for SmartsheetClient {
    #[tracing::instrument(skip(self, attachment), fields(attachment = %attachment))]
    async fn fetch_metadata(
        &self,
        attachment: &AttachmentRef,
    ) -> Result<AttachmentMetadata, AttachmentSourceError> {
        let url = format!(
            "{}/sheets/{}/attachments/{}",
            self.base_url, attachment.container_id, attachment.attachment_id
        );

        let response = self
            .api_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AttachmentSourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_status(response).await);
        }

        let body: AttachmentResponse = response
            .json()
            .await
            .map_err(|e| AttachmentSourceError::InvalidResponse(e.to_string()))?;

        Ok(AttachmentMetadata {
            name: body.name,
            mime_type: body.mime_type.unwrap_or_default(),
            size_in_kb: body.size_in_kb,
            download_url: body.url,
        })
    }

    #[tracing::instrument(skip(self, url))]
    async fn download(&self, url: &str) -> Result<Bytes, AttachmentSourceError> {
        let response = self
            .api_client
            .get(url)
            .send()
            .await
            .map_err(|e| AttachmentSourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_status(response).await);
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| AttachmentSourceError::RequestFailed(format!("body: {e}")))?;

        tracing::debug!(bytes = data.len(), "Attachment body received");

        Ok(data)
    }

    #[tracing::instrument(skip(self))]
    async fn probe_download(
        &self,
        attachment_id: &str,
    ) -> Result<DownloadProbe, AttachmentSourceError> {
        let url = format!("{}/attachments/{}/download", self.base_url, attachment_id);

        let response = self
            .probe_client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AttachmentSourceError::RequestFailed(e.to_string()))?;

        let status_code = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response
            .text()
            .await
            .map_err(|e| AttachmentSourceError::RequestFailed(format!("body: {e}")))?;

        Ok(DownloadProbe {
            status_code,
            headers,
            text_snippet: body.chars().take(PROBE_SNIPPET_CHARS).collect(),
        })
    }
}
