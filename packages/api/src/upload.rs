//! # Avatar uploads to object storage
//!
//! The profile screen hands a chosen image to an [`Uploader`] and gets back a
//! public download URL to put in the profile draft. Objects are keyed by the
//! upload time in milliseconds followed by the original file name, so two uploads
//! of `me.png` never collide.
//!
//! [`StorageUploader`] talks to the Firebase Storage REST API:
//!
//! 1. `POST {base}/v0/b/{bucket}/o?uploadType=media&name={key}` with the raw bytes.
//! 2. Read `downloadTokens` from the returned object metadata.
//! 3. Build `{base}/v0/b/{bucket}/o/{key}?alt=media&token={token}`.
//!
//! The body is sent in one request, so progress is reported as `(0, total)`
//! before sending and `(total, total)` once the object is stored.

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use store::{EpochMillis, UploadConfig};

use crate::error::ApiError;

pub const STORAGE_BASE: &str = "https://firebasestorage.googleapis.com";

/// A file picked by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl UploadFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

pub fn object_key(now: EpochMillis, file_name: &str) -> String {
    format!("{now}{file_name}")
}

pub trait Uploader {
    /// Store `file` and return its download URL. `on_progress` receives
    /// `(bytes_transferred, total_bytes)`.
    async fn upload(
        &self,
        file: UploadFile,
        now: EpochMillis,
        on_progress: &mut dyn FnMut(u64, u64),
    ) -> Result<String, ApiError>;
}

#[derive(Deserialize)]
struct StoredObject {
    #[serde(rename = "downloadTokens")]
    download_tokens: Option<String>,
}

#[derive(Clone, Debug)]
pub struct StorageUploader {
    http: reqwest::Client,
    base: String,
    bucket: String,
    max_bytes: u64,
}

impl StorageUploader {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: STORAGE_BASE.to_string(),
            bucket: config.bucket.clone(),
            max_bytes: config.max_bytes,
        }
    }

    /// Point the uploader at another storage host (emulator, test server).
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    fn object_url(&self, key: Option<&str>) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base).map_err(|e| ApiError::Config(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::Config(format!("invalid storage base: {}", self.base)))?;
            segments
                .pop_if_empty()
                .extend(["v0", "b", self.bucket.as_str(), "o"]);
            if let Some(key) = key {
                segments.push(key);
            }
        }
        Ok(url)
    }

    pub fn download_url(&self, key: &str, token: &str) -> Result<String, ApiError> {
        let mut url = self.object_url(Some(key))?;
        url.query_pairs_mut()
            .append_pair("alt", "media")
            .append_pair("token", token);
        Ok(url.to_string())
    }
}

impl Uploader for StorageUploader {
    async fn upload(
        &self,
        file: UploadFile,
        now: EpochMillis,
        on_progress: &mut dyn FnMut(u64, u64),
    ) -> Result<String, ApiError> {
        if self.bucket.is_empty() {
            return Err(ApiError::Config("storage bucket is not set".to_string()));
        }
        let total = file.size();
        if total > self.max_bytes {
            return Err(ApiError::TooLarge {
                size: total,
                limit: self.max_bytes,
            });
        }

        let key = object_key(now, &file.name);
        let content_type = file
            .content_type
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string());
        tracing::debug!(%key, total, "uploading avatar");
        on_progress(0, total);

        let response = self
            .http
            .post(self.object_url(None)?)
            .query(&[("uploadType", "media"), ("name", key.as_str())])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(file.bytes)
            .send()
            .await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.pointer("/error/message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| format!("upload failed with status {status}"));
            tracing::warn!(%key, status, "avatar upload rejected: {message}");
            return Err(ApiError::Rejected { status, message });
        }

        let object: StoredObject = serde_json::from_str(&text)?;
        let token = object
            .download_tokens
            .as_deref()
            .and_then(|tokens| tokens.split(',').next())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Decode("stored object has no download token".to_string()))?;

        on_progress(total, total);
        self.download_url(&key, token)
    }
}
