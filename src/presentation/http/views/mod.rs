//! HTML rendering. Every user-supplied string passes through [`esc`] or
//! [`attr`] before it reaches the page.

pub mod articles;
pub mod comments;
pub mod forms;

use axum::http::StatusCode;
use axum::response::Html;
use std::fmt::Write as _;

pub fn esc(value: &str) -> String {
    htmlescape::encode_minimal(value)
}

pub fn attr(value: &str) -> String {
    htmlescape::encode_attribute(value)
}

const HEAD: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n";

const NAV: &str = "<nav>\n\
    <a href=\"/\">Articles</a> | <a href=\"/article/create\">New article</a> | \
    <a href=\"/comment\">Comments</a> | <a href=\"/comment/create\">New comment</a>\n\
    </nav>\n";

/// Wraps `body` in the shared page chrome.
pub fn layout(title: &str, body: &str) -> Html<String> {
    let mut page = String::with_capacity(body.len() + 512);
    page.push_str(HEAD);
    let _ = writeln!(page, "<title>{}</title>", esc(title));
    page.push_str("</head>\n<body>\n");
    page.push_str(NAV);
    page.push_str("<main>\n");
    let _ = writeln!(page, "<h1>{}</h1>", esc(title));
    page.push_str(body);
    page.push_str("\n</main>\n</body>\n</html>\n");
    Html(page)
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let title = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    layout(&title, &format!("<p class=\"error\">{}</p>", esc(message)))
}

/// Renders multi-line text as paragraphs.
pub(crate) fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", esc(p).replace('\n', "<br>")))
        .collect::<Vec<_>>()
        .join("\n")
}
