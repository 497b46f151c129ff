//! The fixed request body.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{PROBE_PROMPT, PROBE_TEXT};

/// Body of the `geminiCall` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub prompt: String,
    pub text: String,
}

impl Payload {
    /// The one payload the smoke test ever sends.
    pub fn probe() -> Self {
        Self {
            prompt: PROBE_PROMPT.to_string(),
            text: PROBE_TEXT.to_string(),
        }
    }
}

/// Renders as a dict literal, e.g. `{'prompt': 'test', 'text': '...'}`.
impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'prompt': {}, 'text': {}}}",
            quoted(&self.prompt),
            quoted(&self.text)
        )
    }
}

fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_fields() {
        let p = Payload::probe();
        assert_eq!(p.prompt, "test");
        assert_eq!(p.text, "Ultrassom de abdome total Normal");
    }

    #[test]
    fn probe_is_stable() {
        assert_eq!(Payload::probe(), Payload::probe());
    }

    #[test]
    fn serializes_to_exact_object() {
        let value = serde_json::to_value(Payload::probe()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "prompt": "test",
                "text": "Ultrassom de abdome total Normal"
            })
        );
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn display_as_mapping() {
        assert_eq!(
            Payload::probe().to_string(),
            "{'prompt': 'test', 'text': 'Ultrassom de abdome total Normal'}"
        );
    }

    #[test]
    fn display_escapes_quotes_and_newlines() {
        let p = Payload {
            prompt: "it's".to_string(),
            text: "a\nb\\c".to_string(),
        };
        assert_eq!(p.to_string(), r"{'prompt': 'it\'s', 'text': 'a\nb\\c'}");
    }
}
