use anyhow::Result;
use async_trait::async_trait;

use super::Attachment;

/// One send: the prompt text plus the optional image staged alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    pub prompt: String,
    pub attachment: Option<Attachment>,
}

impl UploadRequest {
    pub fn new(prompt: &str, attachment: Option<Attachment>) -> UploadRequest {
        return UploadRequest {
            prompt: prompt.to_string(),
            attachment,
        };
    }
}

#[async_trait]
pub trait Assistant {
    /// Performs exactly one request/response cycle and returns the
    /// assistant's reply text. Transport failures, non-success statuses and
    /// malformed bodies are all errors.
    async fn send(&self, request: UploadRequest) -> Result<String>;
}

pub type AssistantBox = Box<dyn Assistant + Send + Sync>;
