mod support;

use newsroom::application::commands::articles::{
    CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
};
use newsroom::application::error::ApplicationError;
use newsroom::application::forms::{ArticleForm, INVALID_CHOICE, REQUIRED};
use newsroom::application::queries::articles::{GetArticleByIdQuery, GetArticleDetailQuery};
use support::{InMemoryStore, build_services};

fn form(title: &str, author: &str, text: &str, category: &str) -> ArticleForm {
    ArticleForm {
        title: title.into(),
        author: author.into(),
        text: text.into(),
        category: category.into(),
    }
}

#[tokio::test]
async fn created_article_is_viewable_with_submitted_values() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);

    let created = services
        .article_commands
        .create_article(CreateArticleCommand {
            form: form("A", "B", "C", "1"),
        })
        .await
        .unwrap();

    let viewed = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap();

    assert_eq!(viewed.title, "A");
    assert_eq!(viewed.author, "B");
    assert_eq!(viewed.text, "C");
    assert_eq!(viewed.category_id, 1);
    assert_eq!(viewed, created);
}

#[tokio::test]
async fn invalid_create_stores_nothing() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);

    let err = services
        .article_commands
        .create_article(CreateArticleCommand {
            form: form("", "B", "C", "1"),
        })
        .await
        .unwrap_err();

    match err {
        ApplicationError::InvalidForm(errors) => {
            assert_eq!(errors.field("title"), [REQUIRED.to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.article_count(), 0);
}

#[tokio::test]
async fn unknown_category_is_a_field_error() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);

    let err = services
        .article_commands
        .create_article(CreateArticleCommand {
            form: form("A", "B", "C", "42"),
        })
        .await
        .unwrap_err();

    match err {
        ApplicationError::InvalidForm(errors) => {
            assert_eq!(errors.field("category"), [INVALID_CHOICE.to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn update_with_empty_title_leaves_article_unchanged() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);
    let created = services
        .article_commands
        .create_article(CreateArticleCommand {
            form: form("A", "B", "C", "1"),
        })
        .await
        .unwrap();

    let err = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            form: form("", "Z", "Z", "1"),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidForm(_)));

    let viewed = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(viewed.title, "A");
    assert_eq!(viewed.author, "B");
    assert_eq!(viewed.text, "C");
}

#[tokio::test]
async fn valid_update_overwrites_all_fields() {
    let store = InMemoryStore::with_categories(&["News", "Sport"]);
    let services = build_services(&store);
    let created = services
        .article_commands
        .create_article(CreateArticleCommand {
            form: form("A", "B", "C", "1"),
        })
        .await
        .unwrap();

    let updated = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            form: form("A2", "B2", "C2", "2"),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    let stored = store.article(created.id).unwrap();
    assert_eq!(stored.title.as_str(), "A2");
    assert_eq!(stored.author.as_str(), "B2");
    assert_eq!(stored.text.as_str(), "C2");
    assert_eq!(i64::from(stored.category_id), 2);
}

#[tokio::test]
async fn update_of_missing_article_is_not_found() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);

    let err = services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: 9,
            form: form("A", "B", "C", "1"),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn deleted_article_is_not_found_afterwards() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);
    let created = services
        .article_commands
        .create_article(CreateArticleCommand {
            form: form("A", "B", "C", "1"),
        })
        .await
        .unwrap();

    services
        .article_commands
        .delete_article(DeleteArticleCommand { id: created.id })
        .await
        .unwrap();

    let err = services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: created.id })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let again = services
        .article_commands
        .delete_article(DeleteArticleCommand { id: created.id })
        .await
        .unwrap_err();
    assert!(again.is_not_found());
}

#[tokio::test]
async fn never_issued_ids_are_not_found() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);

    for id in [0, -1, 1, 12345] {
        let err = services
            .article_queries
            .get_article_by_id(GetArticleByIdQuery { id })
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "id {id} should be not found");
    }
}

#[tokio::test]
async fn list_returns_articles_in_store_order() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);
    for title in ["first", "second", "third"] {
        services
            .article_commands
            .create_article(CreateArticleCommand {
                form: form(title, "B", "C", "1"),
            })
            .await
            .unwrap();
    }

    let titles: Vec<String> = services
        .article_queries
        .list_articles()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn detail_includes_category_name() {
    let store = InMemoryStore::with_categories(&["News"]);
    let services = build_services(&store);
    let created = services
        .article_commands
        .create_article(CreateArticleCommand {
            form: form("A", "B", "C", "1"),
        })
        .await
        .unwrap();

    let detail = services
        .article_queries
        .get_article_detail(GetArticleDetailQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(detail.article, created);
    assert_eq!(detail.category.unwrap().name, "News");
    assert!(detail.comments.is_empty());
}
