use super::{attr, esc};
use crate::application::forms::FormErrors;
use std::fmt::Write as _;

/// Whether a form page creates a new record or edits the one with this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    Update(i64),
}

/// Renders the error list attached to one field, if any.
fn error_list(errors: Option<&FormErrors>, field: &str) -> String {
    let messages = errors.map(|e| e.field(field)).unwrap_or_default();
    if messages.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul class=\"errorlist\">");
    for message in messages {
        let _ = write!(out, "<li>{}</li>", esc(message));
    }
    out.push_str("</ul>");
    out
}

/// Errors not tied to a rendered field.
pub fn non_field_errors(errors: Option<&FormErrors>, fields: &[&str]) -> String {
    let Some(errors) = errors else {
        return String::new();
    };
    let mut out = String::new();
    for (field, messages) in errors.iter() {
        if fields.contains(&field) {
            continue;
        }
        for message in messages {
            let _ = write!(out, "<li>{}</li>", esc(message));
        }
    }
    if out.is_empty() {
        out
    } else {
        format!("<ul class=\"errorlist nonfield\">{out}</ul>")
    }
}

pub fn text_input(name: &str, label: &str, value: &str, errors: Option<&FormErrors>) -> String {
    format!(
        "<p>{errors}<label for=\"id_{name}\">{label}</label> \
         <input type=\"text\" name=\"{name}\" id=\"id_{name}\" value=\"{value}\"></p>\n",
        errors = error_list(errors, name),
        label = esc(label),
        value = attr(value),
    )
}

pub fn textarea(name: &str, label: &str, value: &str, errors: Option<&FormErrors>) -> String {
    format!(
        "<p>{errors}<label for=\"id_{name}\">{label}</label> \
         <textarea name=\"{name}\" id=\"id_{name}\" rows=\"10\" cols=\"40\">\
         {value}</textarea></p>\n",
        errors = error_list(errors, name),
        label = esc(label),
        value = esc(value),
    )
}

/// `<select>` over `(value, label)` choices with an empty leading option.
pub fn select(
    name: &str,
    label: &str,
    choices: &[(String, String)],
    selected: &str,
    errors: Option<&FormErrors>,
) -> String {
    let mut options = String::from("<option value=\"\">---------</option>");
    for (value, text) in choices {
        let marker = if value == selected { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{}\"{marker}>{}</option>",
            attr(value),
            esc(text)
        );
    }
    format!(
        "<p>{errors}<label for=\"id_{name}\">{label}</label> \
         <select name=\"{name}\" id=\"id_{name}\">{options}</select></p>\n",
        errors = error_list(errors, name),
        label = esc(label),
    )
}
