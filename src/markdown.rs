//! Post Body Rendering
//!
//! Markdown via pulldown-cmark. Raw HTML typed by visitors is shown as text.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Render a post or thread body to HTML
pub fn render_content(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}
