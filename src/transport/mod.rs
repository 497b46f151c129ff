pub mod http;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::payload::Payload;

/// What came back from the endpoint, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Sends the payload somewhere. A returned `Err` means no response arrived.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, payload: &Payload) -> Result<Reply>;

    /// Where requests go, for display and logs.
    fn target(&self) -> &str;
}
