//! Modal form state for creating and editing books

use crate::error::FormError;
use crate::types::Book;
use std::fmt;
use std::str::FromStr;

/// Editable input of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Url,
}

impl FormField {
    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Url => "url",
        }
    }

    /// Input label shown next to the field
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Url => "Cover URL",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Url)
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(FormField::Title),
            "author" => Ok(FormField::Author),
            "url" => Ok(FormField::Url),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Pending values bound to the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl FormDraft {
    /// Draft prefilled from an existing record
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            url: book.url.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Url => &self.url,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Author => self.author = value,
            FormField::Url => self.url = value,
        }
    }

    /// Check that title and author are filled in
    pub fn validate(&self) -> Result<(), FormError> {
        for field in [FormField::Title, FormField::Author] {
            if self.get(field).is_empty() {
                return Err(FormError::MissingField(field.name()));
            }
        }
        Ok(())
    }

    /// The record a submission of this draft produces
    pub fn to_book(&self) -> Book {
        Book::new(self.title.clone(), self.author.clone(), self.url.clone())
    }
}

/// Whether the form is shown, and for what
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Closed,
    Creating(FormDraft),
    Editing { index: usize, draft: FormDraft },
}

impl Mode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Mode::Closed)
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match self {
            Mode::Closed => None,
            Mode::Creating(draft) | Mode::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match self {
            Mode::Closed => None,
            Mode::Creating(draft) | Mode::Editing { draft, .. } => Some(draft),
        }
    }

    /// Index of the record being edited
    pub fn edit_target(&self) -> Option<usize> {
        match self {
            Mode::Editing { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Read-only view of an open form
pub struct ModalForm<'a> {
    draft: &'a FormDraft,
    editing: bool,
}

impl<'a> ModalForm<'a> {
    /// View of the form, or `None` while it is closed
    pub fn new(mode: &'a Mode) -> Option<Self> {
        let draft = mode.draft()?;
        Some(Self {
            draft,
            editing: mode.edit_target().is_some(),
        })
    }

    pub fn heading(&self) -> &'static str {
        if self.editing {
            "Edit Book"
        } else {
            "Add New Book"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing {
            "Save Changes"
        } else {
            "Save"
        }
    }

    pub fn draft(&self) -> &FormDraft {
        self.draft
    }

    /// Whether submission is currently allowed
    pub fn can_submit(&self) -> bool {
        self.draft.validate().is_ok()
    }
}

impl fmt::Display for ModalForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.heading())?;
        for field in [FormField::Title, FormField::Author, FormField::Url] {
            let marker = if field.is_required() { "*" } else { "" };
            writeln!(f, "{}{}: {}", field.label(), marker, self.draft.get(field))?;
        }
        write!(f, "[{}]", self.submit_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_fields() {
        let mut draft = FormDraft::default();
        assert_eq!(draft.validate(), Err(FormError::MissingField("title")));

        draft.set(FormField::Title, "Emma");
        assert_eq!(draft.validate(), Err(FormError::MissingField("author")));

        draft.set(FormField::Author, "Jane Austen");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("url".parse::<FormField>(), Ok(FormField::Url));
        assert_eq!(
            "isbn".parse::<FormField>(),
            Err(FormError::UnknownField("isbn".to_string()))
        );
    }

    #[test]
    fn test_modal_labels() {
        assert!(ModalForm::new(&Mode::Closed).is_none());

        let creating = Mode::Creating(FormDraft::default());
        let form = ModalForm::new(&creating).unwrap();
        assert_eq!(form.heading(), "Add New Book");
        assert_eq!(form.submit_label(), "Save");
        assert!(!form.can_submit());

        let editing = Mode::Editing {
            index: 0,
            draft: FormDraft::default(),
        };
        let form = ModalForm::new(&editing).unwrap();
        assert_eq!(form.heading(), "Edit Book");
        assert_eq!(form.submit_label(), "Save Changes");
    }

    #[test]
    fn test_modal_render() {
        let mode = Mode::Creating(FormDraft {
            title: "Emma".to_string(),
            author: String::new(),
            url: String::new(),
        });
        let form = ModalForm::new(&mode).unwrap();
        assert_eq!(
            form.to_string(),
            "== Add New Book ==\nTitle*: Emma\nAuthor*: \nCover URL: \n[Save]"
        );
    }
}
