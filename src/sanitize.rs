//! Input sanitization for contact form fields
//!
//! Every function here is a pure string transform. Nothing fails: hostile or
//! malformed input degrades to a shorter, possibly empty, string.

use crate::state::{FieldName, FormData};
use once_cell::sync::Lazy;
use regex::Regex;

/// RFC 5321 limit on the length of an address
pub const MAX_EMAIL_LENGTH: usize = 254;

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").expect("script block regex"));

/// Script tags left over once complete blocks are gone
static SCRIPT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<\s*/?\s*script\b[^>]*>").expect("script tag regex"));

static DANGEROUS_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*/?(?:iframe|object|embed|applet|meta|link)\b[^>]*>")
        .expect("dangerous tag regex")
});

static URI_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:javascript|data)\s*:").expect("uri scheme regex"));

static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*on\w+\s*=\s*[^>\s]*").expect("event handler regex"));

/// Control characters other than tab, newline and carriage return
fn is_stripped_control(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{7f}'
    )
}

fn sanitize_pass(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| !is_stripped_control(*c)).collect();
    let cleaned = SCRIPT_BLOCK.replace_all(&cleaned, "");
    let cleaned = SCRIPT_TAG.replace_all(&cleaned, "");
    let cleaned = DANGEROUS_TAG.replace_all(&cleaned, "");
    let cleaned = URI_SCHEME.replace_all(&cleaned, "");
    let cleaned = EVENT_HANDLER.replace_all(&cleaned, "");
    cleaned.trim().to_string()
}

/// Strip markup and script vectors from free text.
///
/// Passes repeat until the text stops changing, so removals that splice two
/// fragments into a new `<script>` or `on*=` are caught and the result is
/// idempotent. Each changing pass strictly shortens the text, which bounds
/// the loop.
pub fn sanitize_input(input: &str) -> String {
    let mut current = sanitize_pass(input);
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Lowercase, trim and reduce an address to `[A-Za-z0-9_.-@+]`
pub fn sanitize_email(email: &str) -> String {
    email
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '@' | '+'))
        .take(MAX_EMAIL_LENGTH)
        .collect()
}

/// Keep digits, whitespace and `-().`; `+` survives only in leading position
pub fn sanitize_phone_number(phone: &str) -> String {
    let mut out = String::with_capacity(phone.len());
    for c in phone.chars() {
        let keep = match c {
            '+' => out.trim().is_empty(),
            '-' | '(' | ')' | '.' => true,
            c => c.is_ascii_digit() || c.is_whitespace(),
        };
        if keep {
            out.push(c);
        }
    }
    out
}

/// Collapse whitespace inside each line and squeeze blank-line runs to one
pub fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() && lines.last().is_some_and(|l| l.is_empty()) {
            continue;
        }
        lines.push(collapsed);
    }
    lines.join("\n").trim().to_string()
}

/// Generic sanitization followed by the cleaner specific to `field`
pub fn sanitize_by_field_type(value: &str, field: FieldName) -> String {
    let base = sanitize_input(value);
    match field {
        FieldName::Email => sanitize_email(&base),
        FieldName::Phone => sanitize_phone_number(&base).trim().to_string(),
        FieldName::Message => normalize_whitespace(&base),
        FieldName::Name | FieldName::Department | FieldName::Subject => base,
    }
}

/// Sanitize every field through the same path used while typing
pub fn sanitize_form_data(data: &FormData) -> FormData {
    let mut sanitized = FormData::default();
    for (field, value) in data.entries() {
        sanitized.set(field, sanitize_by_field_type(value, field));
    }
    sanitized
}
