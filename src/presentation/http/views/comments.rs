use super::forms::{self, FormAction};
use super::{esc, layout};
use crate::application::dto::{ArticleDto, CommentDto};
use crate::application::forms::{CommentForm, FormErrors};
use axum::response::Html;
use std::collections::HashMap;
use std::fmt::Write as _;

const FIELDS: [&str; 3] = ["article", "author", "text"];

/// The global comment feed; `comments` arrive already ordered newest first.
pub fn index(comments: &[CommentDto], article_titles: &HashMap<i64, String>) -> Html<String> {
    let mut body = String::new();
    if comments.is_empty() {
        body.push_str("<p>No comments yet.</p>\n");
    } else {
        body.push_str("<ul class=\"comments\">\n");
        for comment in comments {
            let article = article_titles
                .get(&comment.article_id)
                .map_or_else(|| format!("#{}", comment.article_id), |t| esc(t));
            let _ = writeln!(
                body,
                "<li><strong>{author}</strong> on <a href=\"/article/{article_id}\">{article}</a> \
                 ({created}): {text} \
                 <a href=\"/comment/{id}/update\">Edit</a> \
                 <a href=\"/comment/{id}/delete\">Delete</a></li>",
                author = esc(&comment.author),
                article_id = comment.article_id,
                created = comment.created_at.format("%Y-%m-%d %H:%M:%S"),
                text = esc(&comment.text),
                id = comment.id,
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/comment/create\">Add a comment</a></p>\n");
    layout("Comments", &body)
}

pub fn form_page(
    action: FormAction,
    form: &CommentForm,
    errors: Option<&FormErrors>,
    articles: &[ArticleDto],
) -> Html<String> {
    let (title, target) = match action {
        FormAction::Create => ("New comment", "/comment/create".to_string()),
        FormAction::Update(id) => ("Edit comment", format!("/comment/{id}/update")),
    };

    let choices: Vec<(String, String)> = articles
        .iter()
        .map(|a| (a.id.to_string(), a.title.clone()))
        .collect();

    let mut body = String::new();
    let _ = writeln!(body, "<form method=\"post\" action=\"{target}\">");
    body.push_str(&forms::non_field_errors(errors, &FIELDS));
    body.push_str(&forms::select(
        "article",
        "Article",
        &choices,
        &form.article,
        errors,
    ));
    body.push_str(&forms::text_input("author", "Author", &form.author, errors));
    body.push_str(&forms::textarea("text", "Text", &form.text, errors));
    body.push_str(
        "<p><button type=\"submit\">Save</button> <a href=\"/comment\">Cancel</a></p>\n</form>\n",
    );
    layout(title, &body)
}

pub fn delete_page(comment: &CommentDto) -> Html<String> {
    let body = format!(
        "<p>Delete the comment by <strong>{author}</strong>?</p>\n<blockquote>{text}</blockquote>\n\
         <form method=\"post\" action=\"/comment/{id}/delete\">\n\
         <p><button type=\"submit\">Delete</button> <a href=\"/comment\">Cancel</a></p>\n</form>\n",
        author = esc(&comment.author),
        text = esc(&comment.text),
        id = comment.id,
    );
    layout("Delete comment", &body)
}
