//! The smoke test itself: print, send once, report.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::payload::Payload;
use crate::report::{Outcome, write_header, write_outcome};
use crate::transport::{Reply, Transport};

/// Runs the single request against a transport.
pub struct Runner {
    transport: Box<dyn Transport>,
    payload: Payload,
}

impl Runner {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            payload: Payload::probe(),
        }
    }

    /// Make exactly one attempt and write the result to `out`.
    ///
    /// Transport failures are reported, not returned: the only `Err` here is
    /// a failure to write to `out`.
    pub async fn run(&self, out: &mut impl Write) -> io::Result<Outcome> {
        write_header(out, &self.payload)?;

        let outcome = classify(self.transport.post_json(&self.payload).await);
        match &outcome {
            Outcome::Success { status, .. } => {
                info!(target_url = self.transport.target(), status, "smoke test passed")
            }
            Outcome::Rejected { status, .. } => {
                warn!(target_url = self.transport.target(), status, "endpoint rejected request")
            }
            Outcome::Failed { error } => {
                warn!(target_url = self.transport.target(), %error, "no response")
            }
        }

        write_outcome(out, &outcome)?;
        Ok(outcome)
    }
}

fn classify(result: anyhow::Result<Reply>) -> Outcome {
    match result {
        Ok(reply) if reply.is_ok() => Outcome::Success {
            status: reply.status,
            body: reply.body,
        },
        Ok(reply) => Outcome::Rejected {
            status: reply.status,
            body: reply.body,
        },
        // {:#} keeps the whole cause chain on one line.
        Err(e) => Outcome::Failed {
            error: format!("{:#}", e),
        },
    }
}
