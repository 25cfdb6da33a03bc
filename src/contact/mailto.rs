//! `mailto:` link construction
//!
//! Subject and body are rendered from `{name}` / `{email}` / `{message}`
//! templates, then escaped exactly like JavaScript's `encodeURIComponent`
//! (newlines become `%0A`).

use super::ContactMessage;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one URL component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Substitute `{key}` placeholders in a single pass
///
/// Substituted text is never rescanned, so a sender name containing
/// `{email}` stays literal. Unknown keys are left as written.
pub fn render_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => match lookup(&after[..close]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            },
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Build the full `mailto:` URL for a validated message
pub fn build_mailto(
    recipient: &str,
    subject_template: &str,
    body_template: &str,
    msg: &ContactMessage,
) -> String {
    let lookup = |key: &str| match key {
        "name" => Some(msg.name.as_str()),
        "email" => Some(msg.email.as_str()),
        "message" => Some(msg.message.as_str()),
        _ => None,
    };
    let subject = render_template(subject_template, lookup);
    let body = render_template(body_template, lookup);

    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_component(&subject),
        encode_component(&body)
    )
}
