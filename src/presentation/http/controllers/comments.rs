use super::parse_id;
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    dto::ArticleDto,
    error::ApplicationError,
    forms::CommentForm,
    queries::comments::GetCommentByIdQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{self, forms::FormAction};
use axum::{
    Extension, Form,
    extract::Path,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::collections::HashMap;

const COMMENT_LIST: &str = "/comment";

async fn articles(state: &HttpState) -> HttpResult<Vec<ArticleDto>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
}

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let comments = state
        .services
        .comment_queries
        .list_comments()
        .await
        .into_http()?;
    let titles: HashMap<i64, String> = articles(&state)
        .await?
        .into_iter()
        .map(|a| (a.id, a.title))
        .collect();
    Ok(views::comments::index(&comments, &titles))
}

pub async fn create_form(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let articles = articles(&state).await?;
    Ok(views::comments::form_page(
        FormAction::Create,
        &CommentForm::default(),
        None,
        &articles,
    ))
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    Form(form): Form<CommentForm>,
) -> HttpResult<Response> {
    let result = state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand { form: form.clone() })
        .await;

    match result {
        Ok(_) => Ok(Redirect::to(COMMENT_LIST).into_response()),
        Err(ApplicationError::InvalidForm(errors)) => {
            let articles = articles(&state).await?;
            let action = FormAction::Create;
            let page = views::comments::form_page(action, &form, Some(&errors), &articles);
            Ok(page.into_response())
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Html<String>> {
    let id = parse_id(&id, "comment")?;
    let comment = state
        .services
        .comment_queries
        .get_comment_by_id(GetCommentByIdQuery { id })
        .await
        .into_http()?;
    let articles = articles(&state).await?;
    Ok(views::comments::form_page(
        FormAction::Update(comment.id),
        &CommentForm::from(&comment),
        None,
        &articles,
    ))
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Form(form): Form<CommentForm>,
) -> HttpResult<Response> {
    let id = parse_id(&id, "comment")?;
    let result = state
        .services
        .comment_commands
        .update_comment(UpdateCommentCommand {
            id,
            form: form.clone(),
        })
        .await;

    match result {
        Ok(_) => Ok(Redirect::to(COMMENT_LIST).into_response()),
        Err(ApplicationError::InvalidForm(errors)) => {
            let articles = articles(&state).await?;
            let action = FormAction::Update(id);
            let page = views::comments::form_page(action, &form, Some(&errors), &articles);
            Ok(page.into_response())
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn delete_confirm(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Html<String>> {
    let id = parse_id(&id, "comment")?;
    let comment = state
        .services
        .comment_queries
        .get_comment_by_id(GetCommentByIdQuery { id })
        .await
        .into_http()?;
    Ok(views::comments::delete_page(&comment))
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Redirect> {
    let id = parse_id(&id, "comment")?;
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()?;
    Ok(Redirect::to(COMMENT_LIST))
}
