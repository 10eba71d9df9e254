//! Input normalization for marker attributes and settings values.
//!
//! Everything here is pure string handling. HTML escaping itself is left to
//! maud at render time; these helpers only decide what text is allowed to
//! reach the template in the first place.

use regex::Regex;
use std::sync::LazyLock;

/// Values accepted as `true` by [`parse_loose_boolean`], compared case-insensitively.
const TRUE_VALUES: &[&str] = &["1", "true", "yes", "on"];

/// URL schemes kept by [`sanitize_url`].
const ALLOWED_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "tel", "sms",
];

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*?>.*?</(script|style)>").expect("valid regex")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("valid regex"));
static PERCENT_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[a-fA-F0-9]{2}").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Parses a boolean-ish string, falling back to `default` when absent.
///
/// Present values are true only when they match one of `1`, `true`, `yes`
/// or `on` (case-insensitive, surrounding whitespace ignored). Every other
/// present value, including the empty string, is false. Absence is not
/// the same as false: the caller's default wins.
///
/// # Arguments
///
/// * `value`: Raw attribute or setting value, `None` when not supplied
/// * `default`: Result used when `value` is `None`
pub fn parse_loose_boolean(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(raw) => {
            let raw = raw.trim();
            TRUE_VALUES.iter().any(|t| raw.eq_ignore_ascii_case(t))
        }
    }
}

/// Reduces arbitrary input to a single line of plain text.
///
/// Removes script and style blocks with their content, strips remaining
/// tags, drops percent-encoded octets, collapses runs of whitespace
/// (including line breaks and tabs) into single spaces and trims the
/// result.
pub fn sanitize_text_field(input: &str) -> String {
    let without_blocks = SCRIPT_BLOCK.replace_all(input, "");
    let without_tags = TAG.replace_all(&without_blocks, "");
    let without_octets = PERCENT_OCTET.replace_all(&without_tags, "");
    WHITESPACE
        .replace_all(&without_octets, " ")
        .trim()
        .to_string()
}

/// Sanitizes a URL for use in `href` or `src` attributes.
///
/// Keeps relative references, fragment and query references, and absolute
/// URLs using an allowed scheme. Anything else, such as `javascript:` or
/// `data:` URLs, yields an empty string. Spaces are percent-encoded and
/// control characters removed. The result still requires attribute
/// escaping, which maud applies on interpolation.
///
/// # Returns
///
/// Cleaned URL, or empty string when the URL is rejected
pub fn sanitize_url(url: &str) -> String {
    let cleaned: String = url
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == ' ' { "%20".to_string() } else { c.to_string() })
        .collect();

    if cleaned.is_empty() {
        return cleaned;
    }

    match scheme_of(&cleaned) {
        None => cleaned,
        Some(scheme) => {
            let scheme = scheme.to_ascii_lowercase();
            if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                cleaned
            } else {
                String::new()
            }
        }
    }
}

/// Extracts the scheme of an absolute URL.
///
/// A colon only introduces a scheme when it appears before any `/`, `?`
/// or `#`, so `path/with:colon` and `?q=a:b` stay relative.
fn scheme_of(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    url[end..].starts_with(':').then(|| &url[..end])
}

/// Joins the base container class with a configured custom class.
pub fn container_class(base: &str, custom: &str) -> String {
    format!("{} {}", base, custom.trim()).trim().to_string()
}
