//! Project-wide constants.

use std::time::Duration;

/// The endpoint the smoke test hits.
pub const ENDPOINT_URL: &str = "https://ultrassom.ai:8177/geminiCall";

/// Total time allowed for the single request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How many characters of a successful body are echoed back.
pub const PREVIEW_CHARS: usize = 200;

pub const PROBE_PROMPT: &str = "test";
pub const PROBE_TEXT: &str = "Ultrassom de abdome total Normal";

/// First `max` characters of `body` (not bytes, so multi-byte text is never split).
pub fn preview(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
