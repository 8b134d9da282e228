use serde::{Deserialize, Deserializer, Serialize};

/// A book as seen by the API and the repositories.
///
/// Text fields that are absent or `null` in a payload become empty strings,
/// so a request body that omits `title` carries an empty title rather than
/// failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub isbn: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self { id: None, title: title.into(), author: author.into(), isbn: isbn.into() }
    }

    /// Overwrite the mutable fields with those of `details`; `id` is kept.
    pub fn overwrite_with(&mut self, details: Book) {
        self.title = details.title;
        self.author = details.author;
        self.isbn = details.isbn;
    }
}

impl From<models::book::Model> for Book {
    fn from(m: models::book::Model) -> Self {
        Self { id: Some(m.id), title: m.title, author: m.author, isbn: m.isbn }
    }
}
