//! HTML fragments for the testimonials list.
//!
//! Server content is untrusted, so every interpolated value goes through
//! [`escape_html`] before it becomes markup.

use std::fmt::Display;

use api::Testimonial;

/// Escape `& < > " '` so `value` can be embedded in markup as text.
pub fn escape_html(value: impl Display) -> String {
    let raw = value.to_string();
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One card per testimonial, in the order given.
pub fn render_testimonials(items: &[Testimonial]) -> String {
    items.iter().map(render_testimonial).collect()
}

fn render_testimonial(item: &Testimonial) -> String {
    format!(
        r#"<div class="testimonial-card"><p class="testimonial-text">{}</p><p class="testimonial-author">{}</p></div>"#,
        escape_html(&item.text),
        escape_html(&item.author),
    )
}

/// A single line of status text shown in place of the list.
pub fn render_notice(class: &str, text: &str) -> String {
    format!(r#"<p class="{}">{}</p>"#, escape_html(class), escape_html(text))
}
