//! Reply normalization.
//!
//! Turns the free-text reply of the completion backend into a fully
//! populated result. Never fails: replies that cannot be read as a JSON
//! object degrade to the operation's fallback object.

pub mod fence;
pub mod schema;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub use fence::strip_fences;
pub use schema::{complete, defaults, FieldDefault, FieldSpec, Schema};

use crate::request::CodeRequest;

/// Default number of characters of a raw reply quoted in fallback objects.
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Result of reading a reply as JSON.
///
/// `Unparseable` carries the candidate text: the reply trimmed, or the inside
/// of its fence when it was fenced.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(Map<String, Value>),
    Unparseable(String),
}

/// Strip fences from `raw` and parse what remains as a JSON object.
pub fn parse_reply(raw: &str) -> ParseOutcome {
    let candidate = strip_fences(raw);
    match serde_json::from_str::<Value>(&candidate) {
        Ok(Value::Object(map)) => ParseOutcome::Parsed(map),
        Ok(other) => {
            debug!(kind = json_kind(&other), "Reply is JSON but not an object");
            ParseOutcome::Unparseable(candidate.trim().to_string())
        }
        Err(e) => {
            debug!(error = %e, "Reply is not valid JSON");
            ParseOutcome::Unparseable(candidate.trim().to_string())
        }
    }
}

/// What a fallback object may draw on.
#[derive(Debug, Clone, Copy)]
pub struct FallbackContext<'a> {
    pub request: &'a CodeRequest,
    /// Candidate text of the reply that could not be used.
    pub reply: &'a str,
    pub excerpt_chars: usize,
}

impl FallbackContext<'_> {
    /// Leading part of the reply, cut on a character boundary.
    pub fn excerpt(&self) -> String {
        excerpt(self.reply, self.excerpt_chars)
    }
}

/// A result type with a fixed JSON schema.
pub trait Normalized: Serialize + DeserializeOwned + Sized {
    /// Fields, types and defaults of the result.
    fn schema() -> &'static Schema;

    /// Object returned when the reply cannot be parsed at all.
    fn fallback(ctx: &FallbackContext<'_>) -> Self;
}

/// Normalize the raw completion reply to `request` into `T`.
pub fn normalize<T: Normalized>(request: &CodeRequest, raw: &str, excerpt_chars: usize) -> T {
    let fallback = |reply: &str| T::fallback(&FallbackContext { request, reply, excerpt_chars });

    match parse_reply(raw) {
        ParseOutcome::Parsed(map) => {
            let completed = complete(map, T::schema());
            match serde_json::from_value::<T>(Value::Object(completed)) {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, "Completed reply did not match result type, using fallback");
                    fallback(strip_fences(raw).trim())
                }
            }
        }
        ParseOutcome::Unparseable(text) => {
            warn!(reply_len = text.len(), "Unparseable completion reply, using fallback");
            fallback(&text)
        }
    }
}

/// First `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
