//! `[blogroll-links]` marker expansion in page content.
//!
//! Markers take the form `[blogroll-links name="value" ...]`, optionally
//! self-closed as `[blogroll-links /]` or `[blogroll-links/]`. Attribute values may be double
//! quoted, single quoted or bare. Doubling the brackets escapes a marker:
//! `[[blogroll-links]]` renders as the literal `[blogroll-links]`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::render::LinkRenderer;

/// Marker tag name.
pub const TAG: &str = "blogroll-links";

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\[(\[?){}((?:\s[^\]]*|/)?)\](\]?)", regex::escape(TAG));
    Regex::new(&pattern).expect("valid regex")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w-]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"']+))"#).expect("valid regex")
});

/// Parses the attribute section of a marker.
///
/// Names are lowercased. Positional values without a name are ignored, as
/// is a trailing self-closing slash. Later duplicates win.
pub fn parse_attributes(text: &str) -> HashMap<String, String> {
    let text = text.trim();
    let text = text.strip_suffix('/').unwrap_or(text);

    ATTRIBUTE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))?
                .as_str()
                .to_string();
            Some((name, value))
        })
        .collect()
}

/// Replaces every marker in `content` with rendered bookmark lists.
///
/// Content without markers is returned unchanged.
pub fn expand(content: &str, renderer: &LinkRenderer<'_>) -> String {
    let mut expanded = 0usize;

    let output = MARKER.replace_all(content, |caps: &Captures<'_>| {
        let open = &caps[1];
        let close = &caps[3];

        if !open.is_empty() && !close.is_empty() {
            // Escaped marker: drop one bracket pair
            return caps[0][1..caps[0].len() - 1].to_string();
        }

        expanded += 1;
        let attributes = parse_attributes(&caps[2]);
        format!("{}{}{}", open, renderer.render_attributes(&attributes), close)
    });

    debug!(markers = expanded, "Expanded blogroll markers");
    output.into_owned()
}
