use super::{FormErrors, FormInput, INVALID_CHOICE, parse_choice, required};
use crate::application::dto::ArticleDto;
use crate::domain::article::{ArticleText, ArticleTitle, AuthorName, NewArticle};
use crate::domain::category::CategoryId;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ArticleForm {
    #[validate(
        custom(function = "required"),
        length(max = 200, message = "Ensure this value has at most 200 characters.")
    )]
    pub title: String,
    #[validate(
        custom(function = "required"),
        length(max = 40, message = "Ensure this value has at most 40 characters.")
    )]
    pub author: String,
    #[validate(
        custom(function = "required"),
        length(max = 3000, message = "Ensure this value has at most 3000 characters.")
    )]
    pub text: String,
    #[validate(custom(function = "required"))]
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct ArticleFields {
    pub title: ArticleTitle,
    pub author: AuthorName,
    pub text: ArticleText,
    pub category_id: CategoryId,
}

impl ArticleForm {
    fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            text: self.text.trim().to_string(),
            category: self.category.trim().to_string(),
        }
    }
}

impl From<&ArticleDto> for ArticleForm {
    fn from(article: &ArticleDto) -> Self {
        Self {
            title: article.title.clone(),
            author: article.author.clone(),
            text: article.text.clone(),
            category: article.category_id.to_string(),
        }
    }
}

impl FormInput for ArticleForm {
    type Fields = ArticleFields;

    fn into_fields(self) -> Result<ArticleFields, FormErrors> {
        let form = self.trimmed();
        let mut errors = match form.validate() {
            Ok(()) => FormErrors::new(),
            Err(validation) => FormErrors::from(validation),
        };

        let category_id = if form.category.is_empty() {
            None
        } else {
            let parsed = parse_choice(&form.category)
                .and_then(|id| CategoryId::new(id).ok());
            if parsed.is_none() {
                errors.add("category", INVALID_CHOICE);
            }
            parsed
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let fields = (
            ArticleTitle::new(form.title),
            AuthorName::new(form.author),
            ArticleText::new(form.text),
            category_id,
        );
        match fields {
            (Ok(title), Ok(author), Ok(text), Some(category_id)) => Ok(ArticleFields {
                title,
                author,
                text,
                category_id,
            }),
            _ => Err(FormErrors::rejected()),
        }
    }
}

impl From<ArticleFields> for NewArticle {
    fn from(fields: ArticleFields) -> Self {
        Self {
            title: fields.title,
            author: fields.author,
            text: fields.text,
            category_id: fields.category_id,
        }
    }
}
