//! HTML rendering for the contact page.
//!
//! The template is embedded at compile time; `{{ field }}` placeholders are
//! replaced with HTML-escaped values.

use models::contact;

const VIEW_TEMPLATE: &str = include_str!("../templates/view.html");

/// Escape the five characters significant in HTML text and attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_contact(c: &contact::Model) -> String {
    render(VIEW_TEMPLATE, |key| match key {
        "id" => Some(c.id.to_string()),
        "first_name" => Some(escape(&c.first_name)),
        "last_name" => Some(escape(&c.last_name)),
        "email" => Some(escape(&c.email)),
        _ => None,
    })
}

/// Single left-to-right pass over `template`. Inserted values are never
/// rescanned; unknown or unterminated placeholders are copied verbatim.
fn render(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        match lookup(after[..end].trim()) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}
