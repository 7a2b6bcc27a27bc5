// tests/support/mocks.rs
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use newsroom::application::ports::time::Clock;
use newsroom::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use newsroom::domain::category::{Category, CategoryId, CategoryName, CategoryRepository};
use newsroom::domain::comment::{
    Comment, CommentId, CommentReadRepository, CommentUpdate, CommentWriteRepository, NewComment,
};
use newsroom::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct StoreState {
    categories: BTreeMap<i64, Category>,
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, Comment>,
    last_category_id: i64,
    last_article_id: i64,
    last_comment_id: i64,
}

/// In-memory stand-in for the SQLite store. Ids are never reused and
/// deleting an article removes its comments, like the real schema.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(names: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut state = store.inner.lock().unwrap();
            for name in names {
                state.last_category_id += 1;
                let id = state.last_category_id;
                state.categories.insert(
                    id,
                    Category {
                        id: CategoryId::new(id).unwrap(),
                        name: CategoryName::new(*name).unwrap(),
                    },
                );
            }
        }
        store
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }

    pub fn comment(&self, id: i64) -> Option<Comment> {
        self.inner.lock().unwrap().comments.get(&id).cloned()
    }

    pub fn comment_count(&self) -> usize {
        self.inner.lock().unwrap().comments.len()
    }
}

fn missing_reference() -> DomainError {
    DomainError::Persistence("referenced record does not exist".into())
}

fn sort_newest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.inner.lock().unwrap().categories.get(&id.0).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let state = self.inner.lock().unwrap();
        Ok(state.categories.values().cloned().collect())
    }

    async fn ensure(&self, name: CategoryName) -> DomainResult<Category> {
        let mut state = self.inner.lock().unwrap();
        if let Some(existing) = state.categories.values().find(|c| c.name == name) {
            return Ok(existing.clone());
        }
        state.last_category_id += 1;
        let category = Category {
            id: CategoryId::new(state.last_category_id)?,
            name,
        };
        state.categories.insert(category.id.0, category.clone());
        Ok(category)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        if !state.categories.contains_key(&article.category_id.0) {
            return Err(missing_reference());
        }
        state.last_article_id += 1;
        let created = Article {
            id: ArticleId::new(state.last_article_id)?,
            title: article.title,
            author: article.author,
            text: article.text,
            category_id: article.category_id,
        };
        state.articles.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.inner.lock().unwrap();
        let article = state
            .articles
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.apply(update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        if state.articles.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.retain(|_, c| c.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.inner.lock().unwrap().articles.get(&id.0).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let state = self.inner.lock().unwrap();
        Ok(state.articles.values().cloned().collect())
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.inner.lock().unwrap();
        if !state.articles.contains_key(&comment.article_id.0) {
            return Err(missing_reference());
        }
        state.last_comment_id += 1;
        let created = Comment {
            id: CommentId::new(state.last_comment_id)?,
            article_id: comment.article_id,
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at,
        };
        state.comments.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut state = self.inner.lock().unwrap();
        if !state.articles.contains_key(&update.article_id.0) {
            return Err(missing_reference());
        }
        let comment = state
            .comments
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.article_id = update.article_id;
        comment.author = update.author;
        comment.text = update.text;
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.inner.lock().unwrap();
        state
            .comments
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self.inner.lock().unwrap().comments.get(&id.0).cloned())
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<Comment>> {
        let state = self.inner.lock().unwrap();
        let mut comments: Vec<Comment> = state.comments.values().cloned().collect();
        sort_newest_first(&mut comments);
        Ok(comments)
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .inner
            .lock()
            .unwrap()
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        sort_newest_first(&mut comments);
        Ok(comments)
    }
}

/// Clock that advances one minute on every reading.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::minutes(tick)
    }
}
