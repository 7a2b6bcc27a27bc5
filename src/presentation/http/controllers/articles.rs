// src/presentation/http/controllers/articles.rs
use super::parse_id;
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::CategoryDto,
    error::ApplicationError,
    forms::ArticleForm,
    queries::articles::{GetArticleByIdQuery, GetArticleDetailQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{self, forms::FormAction};
use axum::{
    Extension, Form,
    extract::Path,
    response::{Html, IntoResponse, Redirect, Response},
};

async fn categories(state: &HttpState) -> HttpResult<Vec<CategoryDto>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
}

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;
    let categories = categories(&state).await?;
    Ok(views::articles::index(&articles, &categories))
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Html<String>> {
    let id = parse_id(&id, "article")?;
    let detail = state
        .services
        .article_queries
        .get_article_detail(GetArticleDetailQuery { id })
        .await
        .into_http()?;
    Ok(views::articles::detail(&detail))
}

pub async fn create_form(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let categories = categories(&state).await?;
    Ok(views::articles::form_page(
        FormAction::Create,
        &ArticleForm::default(),
        None,
        &categories,
    ))
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Response> {
    let result = state
        .services
        .article_commands
        .create_article(CreateArticleCommand { form: form.clone() })
        .await;

    match result {
        Ok(article) => {
            let target = format!("/article/{}", article.id);
            Ok(Redirect::to(&target).into_response())
        }
        Err(ApplicationError::InvalidForm(errors)) => {
            let categories = categories(&state).await?;
            let action = FormAction::Create;
            let page = views::articles::form_page(action, &form, Some(&errors), &categories);
            Ok(page.into_response())
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Html<String>> {
    let id = parse_id(&id, "article")?;
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;
    let categories = categories(&state).await?;
    Ok(views::articles::form_page(
        FormAction::Update(article.id),
        &ArticleForm::from(&article),
        None,
        &categories,
    ))
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Response> {
    let id = parse_id(&id, "article")?;
    let result = state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            form: form.clone(),
        })
        .await;

    match result {
        Ok(article) => {
            let target = format!("/article/{}", article.id);
            Ok(Redirect::to(&target).into_response())
        }
        Err(ApplicationError::InvalidForm(errors)) => {
            let categories = categories(&state).await?;
            let action = FormAction::Update(id);
            let page = views::articles::form_page(action, &form, Some(&errors), &categories);
            Ok(page.into_response())
        }
        Err(err) => Err(HttpError::from_error(err)),
    }
}

pub async fn delete_confirm(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Html<String>> {
    let id = parse_id(&id, "article")?;
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;
    Ok(views::articles::delete_page(&article))
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Redirect> {
    let id = parse_id(&id, "article")?;
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(Redirect::to("/"))
}
