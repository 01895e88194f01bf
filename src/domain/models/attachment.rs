#[cfg(test)]
#[path = "attachment_test.rs"]
mod tests;

use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use mime_guess::mime;
use tokio::fs;

/// A single image staged for upload. Clones share the underlying bytes, so a
/// transcript entry can point at the exact content that was sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    bytes: Arc<Vec<u8>>,
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    return PathBuf::from(path);
}

impl Attachment {
    pub fn new(file_name: &str, mime: &str, bytes: Vec<u8>) -> Attachment {
        return Attachment {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes: Arc::new(bytes),
        };
    }

    /// Reads an image from disk. Anything that doesn't look like an image by
    /// its extension is refused before the file is read.
    pub async fn from_path(path_str: &str) -> Result<Attachment> {
        let path = expand_home(path_str.trim());
        let guess = mime_guess::from_path(&path).first_or_octet_stream();
        if guess.type_() != mime::IMAGE {
            bail!(format!(
                "{} is not an image. Only image files can be attached.",
                path.display()
            ));
        }

        if !path.is_file() {
            bail!(format!("{} does not exist.", path.display()));
        }

        let file_name = Path::new(&path)
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_else(|| return "image".to_string());

        let attachment = Attachment::new(&file_name, guess.essence_str(), fs::read(&path).await?);
        if attachment.is_empty() {
            bail!(format!("{} is empty.", path.display()));
        }

        tracing::debug!(
            file_name,
            mime = attachment.mime.as_str(),
            len = attachment.len(),
            "attachment loaded"
        );

        return Ok(attachment);
    }

    pub fn bytes(&self) -> &[u8] {
        return &self.bytes;
    }

    pub fn len(&self) -> usize {
        return self.bytes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.bytes.is_empty();
    }

    pub fn shares_content_with(&self, other: &Attachment) -> bool {
        return Arc::ptr_eq(&self.bytes, &other.bytes);
    }

    pub fn human_size(&self) -> String {
        let len = self.len() as f64;
        if len < 1024.0 {
            return format!("{} B", self.len());
        }
        if len < 1024.0 * 1024.0 {
            return format!("{:.1} KiB", len / 1024.0);
        }

        return format!("{:.1} MiB", len / (1024.0 * 1024.0));
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{} ({}, {})", self.file_name, self.mime, self.human_size());
    }
}
