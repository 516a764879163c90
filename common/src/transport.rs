use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{structs::Multipart, FeedError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FeedError> {
        serde_json::from_str(&self.body).map_err(|e| FeedError::Decode(e.to_string()))
    }

    /// Fails with `FeedError::Http` on a non-2xx status.
    pub fn error_for_status(self) -> Result<Self, FeedError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(FeedError::Http {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// One-shot HTTP calls. Implementations map connection failures to
/// `FeedError::Network` and return every HTTP status as a response.
#[async_trait(?Send)]
pub trait Transport {
    type Attachment;

    async fn post_multipart(
        &self,
        url: &str,
        form: Multipart<Self::Attachment>,
    ) -> Result<ApiResponse, FeedError>;

    async fn post_json_value(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, FeedError>;
}

pub async fn post_json<T, B>(transport: &T, url: &str, body: &B) -> Result<ApiResponse, FeedError>
where
    T: Transport + ?Sized,
    B: Serialize + ?Sized,
{
    let value = serde_json::to_value(body).map_err(|e| FeedError::Decode(e.to_string()))?;
    transport.post_json_value(url, value).await
}
