//! Assistant message rendering.
//!
//! While a message is streaming it stays literal, preformatted text with
//! a caret indicator; re-parsing markdown on every delta is wasted work.
//! Once the stream ends the accumulated text is parsed and sanitized
//! against a fixed allow-list before being injected as markup.

use leptos::prelude::*;
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Event, Options, Parser};

static SANITIZER: Lazy<ammonia::Builder<'static>> = Lazy::new(|| {
    let mut builder = ammonia::Builder::default();
    builder
        .tags(maplit::hashset![
            "p",
            "br",
            "strong",
            "em",
            "u",
            "code",
            "pre",
            "h1",
            "h2",
            "h3",
            "h4",
            "h5",
            "h6",
            "ul",
            "ol",
            "li",
            "blockquote",
            "a",
            "span",
            "div"
        ])
        .generic_attributes(maplit::hashset!["class"])
        .tag_attributes(maplit::hashmap![
            "a" => maplit::hashset!["href", "target", "rel"],
        ])
        .link_rel(None);
    builder
});

/// Parse markdown and sanitize the result. Returns `None` when the input
/// produces no renderable markup, in which case callers fall back to the
/// literal text.
pub fn render_markdown(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    // The completion stream treats single newlines as hard breaks.
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });
    let mut raw = String::new();
    html::push_html(&mut raw, parser);
    let clean = SANITIZER.clean(&raw).to_string();
    if clean.trim().is_empty() {
        None
    } else {
        Some(clean)
    }
}

#[component]
pub fn MarkdownMessage(text: String, streaming: bool) -> impl IntoView {
    if streaming {
        return view! {
            <div style="white-space: pre-wrap;">
                {text}
                <span class="chat-caret">"\u{258f}"</span>
            </div>
        }
        .into_any();
    }

    match render_markdown(&text) {
        Some(rendered) => view! {
            <div class="markdown-content" inner_html=rendered></div>
        }
        .into_any(),
        None => view! { <div style="white-space: pre-wrap;">{text}</div> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        let html = render_markdown("**bold** and `code`").unwrap();
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<code>code</code>"));
    }

    #[test]
    fn test_script_tags_are_stripped() {
        let html = render_markdown("hi <script>alert(1)</script>").unwrap();
        assert!(!html.contains("<script"));
        assert!(html.contains("hi"));
    }

    #[test]
    fn test_event_handler_attributes_are_stripped() {
        let html = render_markdown(r#"<div onclick="x()">text</div>"#).unwrap();
        assert!(!html.contains("onclick"));
        assert!(html.contains("text"));
    }

    #[test]
    fn test_links_keep_allowed_attributes() {
        let html = render_markdown("[pmm](https://example.com)").unwrap();
        assert!(html.contains(r#"href="https://example.com""#));
    }

    #[test]
    fn test_single_newline_becomes_hard_break() {
        let html = render_markdown("line one\nline two").unwrap();
        assert!(html.contains("<br"));
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(render_markdown("").is_none());
        assert!(render_markdown("   \n  ").is_none());
    }
}
