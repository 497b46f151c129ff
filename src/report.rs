//! Console rendering of the smoke test.
//!
//! Everything the user sees on stdout is produced here, so the exact wording
//! lives in one place.

use std::io::{self, Write};

use crate::consts::{PREVIEW_CHARS, preview};
use crate::payload::Payload;

/// The classified result of the single attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Status 200.
    Success { status: u16, body: String },
    /// A response arrived with any other status.
    Rejected { status: u16, body: String },
    /// No response at all (connect, TLS, timeout, ...).
    Failed { error: String },
}

impl Outcome {
    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Success { status, .. } | Outcome::Rejected { status, .. } => Some(*status),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Lines printed before the request goes out.
pub fn write_header(out: &mut impl Write, payload: &Payload) -> io::Result<()> {
    writeln!(out, "Testando Gemini API...")?;
    writeln!(out, "Payload: {}", payload)?;
    out.flush()
}

/// Lines printed once the attempt is over.
pub fn write_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Success { status, body } => {
            writeln!(out, "Status: {}", status)?;
            writeln!(out, "✅ Sucesso!")?;
            writeln!(out, "Resposta: {}...", preview(body, PREVIEW_CHARS))?;
        }
        Outcome::Rejected { status, body } => {
            writeln!(out, "Status: {}", status)?;
            writeln!(out, "❌ Erro: {}", body)?;
        }
        Outcome::Failed { error } => {
            writeln!(out, "❌ Erro: {}", error)?;
        }
    }
    out.flush()
}
