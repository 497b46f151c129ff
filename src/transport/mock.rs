use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::payload::Payload;

use super::{Reply, Transport};

/// A scripted transport for tests. Hands out pre-defined results in order
/// and remembers every payload it was given.
pub struct MockTransport {
    script: Vec<Result<Reply, String>>,
    index: AtomicUsize,
    sent: Mutex<Vec<Payload>>,
}

impl MockTransport {
    pub fn new(script: Vec<Result<Reply, String>>) -> Self {
        Self {
            script,
            index: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(Reply {
            status,
            body: body.to_string(),
        })])
    }

    pub fn failing(error: &str) -> Self {
        Self::new(vec![Err(error.to_string())])
    }

    /// How many times `post_json` was called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<Payload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post_json(&self, payload: &Payload) -> Result<Reply> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(payload.clone());
        match self.script.get(i) {
            Some(Ok(reply)) => Ok(reply.clone()),
            Some(Err(msg)) => Err(anyhow::anyhow!("{}", msg)),
            None => Err(anyhow::anyhow!(
                "MockTransport: no more replies (called {} times)",
                i + 1
            )),
        }
    }

    fn target(&self) -> &str {
        "mock://geminiCall"
    }
}
