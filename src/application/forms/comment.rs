use super::{FormErrors, FormInput, INVALID_CHOICE, parse_choice, required};
use crate::application::dto::CommentDto;
use crate::domain::article::{ArticleId, AuthorName};
use crate::domain::comment::CommentText;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CommentForm {
    #[validate(custom(function = "required"))]
    pub article: String,
    #[validate(
        custom(function = "required"),
        length(max = 40, message = "Ensure this value has at most 40 characters.")
    )]
    pub author: String,
    #[validate(
        custom(function = "required"),
        length(max = 1000, message = "Ensure this value has at most 1000 characters.")
    )]
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct CommentFields {
    pub article_id: ArticleId,
    pub author: AuthorName,
    pub text: CommentText,
}

impl From<&CommentDto> for CommentForm {
    fn from(comment: &CommentDto) -> Self {
        Self {
            article: comment.article_id.to_string(),
            author: comment.author.clone(),
            text: comment.text.clone(),
        }
    }
}

impl FormInput for CommentForm {
    type Fields = CommentFields;

    fn into_fields(self) -> Result<CommentFields, FormErrors> {
        let form = Self {
            article: self.article.trim().to_string(),
            author: self.author.trim().to_string(),
            text: self.text.trim().to_string(),
        };
        let mut errors = match form.validate() {
            Ok(()) => FormErrors::new(),
            Err(validation) => FormErrors::from(validation),
        };

        let article_id = if form.article.is_empty() {
            None
        } else {
            let parsed = parse_choice(&form.article)
                .and_then(|id| ArticleId::new(id).ok());
            if parsed.is_none() {
                errors.add("article", INVALID_CHOICE);
            }
            parsed
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        match (
            article_id,
            AuthorName::new(form.author),
            CommentText::new(form.text),
        ) {
            (Some(article_id), Ok(author), Ok(text)) => Ok(CommentFields {
                article_id,
                author,
                text,
            }),
            _ => Err(FormErrors::rejected()),
        }
    }
}
