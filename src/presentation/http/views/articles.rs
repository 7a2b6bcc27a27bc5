use super::forms::{self, FormAction};
use super::{esc, layout, paragraphs};
use crate::application::dto::{ArticleDetailDto, ArticleDto, CategoryDto};
use crate::application::forms::{ArticleForm, FormErrors};
use axum::response::Html;
use std::collections::HashMap;
use std::fmt::Write as _;

const FIELDS: [&str; 4] = ["title", "author", "text", "category"];

pub fn index(articles: &[ArticleDto], categories: &[CategoryDto]) -> Html<String> {
    let names: HashMap<i64, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut body = String::new();
    if articles.is_empty() {
        body.push_str("<p>No articles yet.</p>\n");
    } else {
        body.push_str("<ul class=\"articles\">\n");
        for article in articles {
            let category = names.get(&article.category_id).copied().unwrap_or("-");
            let _ = writeln!(
                body,
                "<li><a href=\"/article/{id}\">{title}</a> by {author} [{category}] \
                 <a href=\"/article/{id}/update\">Edit</a> \
                 <a href=\"/article/{id}/delete\">Delete</a></li>",
                id = article.id,
                title = esc(&article.title),
                author = esc(&article.author),
                category = esc(category),
            );
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/article/create\">Write an article</a></p>\n");
    layout("Articles", &body)
}

pub fn detail(detail: &ArticleDetailDto) -> Html<String> {
    let article = &detail.article;
    let mut body = String::new();
    let author = esc(&article.author);
    let _ = writeln!(body, "<p class=\"author\">By {author}</p>");
    if let Some(category) = &detail.category {
        let name = esc(&category.name);
        let _ = writeln!(body, "<p class=\"category\">Category: {name}</p>");
    }
    let text = paragraphs(&article.text);
    let _ = writeln!(body, "<div class=\"text\">\n{text}\n</div>");
    let _ = writeln!(
        body,
        "<p><a href=\"/article/{id}/update\">Edit</a> | \
         <a href=\"/article/{id}/delete\">Delete</a></p>",
        id = article.id
    );

    body.push_str("<h2>Comments</h2>\n");
    if detail.comments.is_empty() {
        body.push_str("<p>No comments yet.</p>\n");
    } else {
        body.push_str("<ul class=\"comments\">\n");
        for comment in &detail.comments {
            let _ = writeln!(
                body,
                "<li><strong>{}</strong> ({}): {}</li>",
                esc(&comment.author),
                comment.created_at.format("%Y-%m-%d %H:%M"),
                esc(&comment.text)
            );
        }
        body.push_str("</ul>\n");
    }
    layout(&article.title, &body)
}

pub fn form_page(
    action: FormAction,
    form: &ArticleForm,
    errors: Option<&FormErrors>,
    categories: &[CategoryDto],
) -> Html<String> {
    let (title, target, cancel) = match action {
        FormAction::Create => (
            "New article".to_string(),
            "/article/create".to_string(),
            "/".to_string(),
        ),
        FormAction::Update(id) => (
            "Edit article".to_string(),
            format!("/article/{id}/update"),
            format!("/article/{id}"),
        ),
    };

    let choices: Vec<(String, String)> = categories
        .iter()
        .map(|c| (c.id.to_string(), c.name.clone()))
        .collect();

    let mut body = String::new();
    let _ = writeln!(body, "<form method=\"post\" action=\"{target}\">");
    body.push_str(&forms::non_field_errors(errors, &FIELDS));
    body.push_str(&forms::text_input("title", "Title", &form.title, errors));
    body.push_str(&forms::text_input("author", "Author", &form.author, errors));
    body.push_str(&forms::textarea("text", "Text", &form.text, errors));
    body.push_str(&forms::select(
        "category",
        "Category",
        &choices,
        &form.category,
        errors,
    ));
    let _ = writeln!(
        body,
        "<p><button type=\"submit\">Save</button> <a href=\"{cancel}\">Cancel</a></p>\n</form>"
    );
    layout(&title, &body)
}

pub fn delete_page(article: &ArticleDto) -> Html<String> {
    let body = format!(
        "<p>Delete the article <strong>{title}</strong>? This cannot be undone.</p>\n\
         <form method=\"post\" action=\"/article/{id}/delete\">\n\
         <p><button type=\"submit\">Delete</button> \
         <a href=\"/article/{id}\">Cancel</a></p>\n</form>\n",
        title = esc(&article.title),
        id = article.id,
    );
    layout("Delete article", &body)
}
