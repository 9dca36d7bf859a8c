//! Markdown fence stripping for model replies.

const FENCE: &str = "```";

/// Return the JSON candidate text of a reply.
///
/// Replies that start with a fence yield the lines between the first fence
/// line and the next one (or the end of the text if it never closes). Any
/// other reply is returned trimmed.
pub fn strip_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with(FENCE) {
        return trimmed.to_string();
    }

    let mut inner: Vec<&str> = Vec::new();
    let mut in_fence = false;
    for line in trimmed.lines() {
        if line.trim().starts_with(FENCE) {
            if in_fence {
                break;
            }
            in_fence = true;
            continue;
        }
        if in_fence {
            inner.push(line);
        }
    }
    inner.join("\n")
}
