#[cfg(test)]
#[path = "opsinsight_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Assistant;
use crate::domain::models::UploadRequest;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct UploadResponse {
    pub response: String,
}

/// Client for the OpsInsight upload endpoint. Prompts are posted as
/// multipart form data, with an optional `file` part for the image.
pub struct OpsInsight {
    url: String,
    timeout: Option<Duration>,
}

impl OpsInsight {
    pub fn new(url: &str, timeout: Option<Duration>) -> OpsInsight {
        return OpsInsight {
            url: url.to_string(),
            timeout,
        };
    }

    pub fn from_config() -> Result<OpsInsight> {
        let timeout_ms = Config::get(ConfigKey::RequestTimeout);
        let mut timeout = None;
        if !timeout_ms.is_empty() {
            timeout = Some(Duration::from_millis(timeout_ms.parse::<u64>()?));
        }

        return Ok(OpsInsight::new(&Config::get(ConfigKey::Endpoint), timeout));
    }

    fn form(request: UploadRequest) -> Result<multipart::Form> {
        let mut form = multipart::Form::new().text("prompt", request.prompt);

        if let Some(attachment) = request.attachment {
            let part = multipart::Part::bytes(attachment.bytes().to_vec())
                .file_name(attachment.file_name.to_string())
                .mime_str(&attachment.mime)?;
            form = form.part("file", part);
        }

        return Ok(form);
    }
}

#[async_trait]
impl Assistant for OpsInsight {
    #[allow(clippy::implicit_return)]
    async fn send(&self, request: UploadRequest) -> Result<String> {
        let mut req = reqwest::Client::new()
            .post(&self.url)
            .multipart(OpsInsight::form(request)?);

        // Without a configured timeout the request waits as long as the server does.
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req.send().await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to upload message to OpsInsight"
            );
            bail!(format!(
                "OpsInsight responded with status {}",
                res.status().as_u16()
            ));
        }

        let body = res.json::<UploadResponse>().await?;
        tracing::debug!(len = body.response.len(), "Upload response");

        return Ok(body.response);
    }
}
