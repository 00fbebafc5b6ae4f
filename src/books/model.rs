//! Book records
//!
//! Wire shape:
//!
//! ```text
//! {"id":"...","isbn":"...","title":"...","author":{"firstname":"...","lastname":"..."}}
//! ```
//!
//! `author` may be `null`.
//!
//! Decoding is lenient: a missing, `null` or wrong-typed field decodes to its
//! empty value without affecting the other fields, unknown keys are ignored,
//! and keys match case-insensitively when no exact match exists.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single catalogue entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Book {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub author: Option<Author>,
}

/// Author of a book, owned by value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Author {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl From<Value> for Author {
    fn from(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::default();
        };
        Self {
            first_name: string_field(&fields, "firstname"),
            last_name: string_field(&fields, "lastname"),
        }
    }
}

impl Book {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: Option<Author>) -> Self {
        Self {
            id: String::new(),
            isbn: isbn.into(),
            title: title.into(),
            author,
        }
    }

    /// Replace the id with a fresh UUID v4 string
    pub fn with_generated_id(mut self) -> Self {
        self.id = Uuid::new_v4().to_string();
        self
    }

    /// True for the zero-valued record returned on a lookup miss
    pub fn is_empty(&self) -> bool {
        *self == Book::default()
    }
}

impl From<Value> for Book {
    fn from(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::default();
        };
        let author = match lookup(&fields, "author") {
            Some(author @ Value::Object(_)) => Some(Author::from(author.clone())),
            _ => None,
        };
        Self {
            id: string_field(&fields, "id"),
            isbn: string_field(&fields, "isbn"),
            title: string_field(&fields, "title"),
            author,
        }
    }
}

/// Read the first JSON value in `bytes`; anything after it is ignored.
pub fn first_value(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut values = serde_json::Deserializer::from_slice(bytes).into_iter::<Value>();
    match values.next() {
        Some(value) => value,
        // Blank input: reparse to get the EOF error.
        None => serde_json::from_slice(bytes),
    }
}

/// Exact key match first, then the first case-insensitive one
pub(crate) fn lookup<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).or_else(|| {
        fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    lookup(fields, key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_book_serialization() {
        let json = serde_json::to_value(Book::default()).unwrap();
        assert_eq!(
            json,
            json!({"id": "", "isbn": "", "title": "", "author": null})
        );
    }

    #[test]
    fn test_author_wire_names() {
        let book = Book::new("123", "T", Some(Author::new("A", "B")));
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["author"]["firstname"], "A");
        assert_eq!(json["author"]["lastname"], "B");
    }

    #[test]
    fn test_partial_decode_defaults_missing_fields() {
        let book: Book = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();
        assert_eq!(book.title, "Only a title");
        assert!(book.id.is_empty());
        assert!(book.isbn.is_empty());
        assert!(book.author.is_none());
    }

    #[test]
    fn test_wrong_typed_field_keeps_the_rest() {
        let book = Book::from(json!({
            "isbn": 123,
            "title": "T",
            "author": {"firstname": "A", "lastname": false}
        }));
        assert_eq!(book.isbn, "");
        assert_eq!(book.title, "T");
        assert_eq!(book.author, Some(Author::new("A", "")));
    }

    #[test]
    fn test_null_and_wrong_typed_author() {
        assert!(Book::from(json!({"author": null})).author.is_none());
        assert!(Book::from(json!({"author": "Ada"})).author.is_none());
        assert_eq!(Book::from(json!({"author": {}})).author, Some(Author::default()));
    }

    #[test]
    fn test_case_insensitive_keys() {
        let book = Book::from(json!({
            "ID": "7",
            "Title": "Upper",
            "author": {"firstName": "Ada", "LASTNAME": "L"}
        }));
        assert_eq!(book.id, "7");
        assert_eq!(book.title, "Upper");
        assert_eq!(book.author, Some(Author::new("Ada", "L")));
    }

    #[test]
    fn test_exact_key_wins_over_case_insensitive() {
        let book = Book::from(json!({"TITLE": "loose", "title": "exact"}));
        assert_eq!(book.title, "exact");
    }

    #[test]
    fn test_non_object_decodes_empty() {
        assert!(Book::from(json!([1, 2])).is_empty());
        assert!(Book::from(json!("book")).is_empty());
    }

    #[test]
    fn test_first_value_ignores_trailing_bytes() {
        let value = first_value(br#"{"title":"T"} trailing"#).unwrap();
        assert_eq!(Book::from(value).title, "T");
    }

    #[test]
    fn test_first_value_errors() {
        assert!(first_value(b"").is_err());
        assert!(first_value(b"   ").is_err());
        assert!(first_value(b"{\"title\":").is_err());
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = Book::default().with_generated_id();
        let b = Book::default().with_generated_id();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }
}
