use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::comparator::{ByField, ByKey, Comparator};
use crate::error::RecordResult;
use crate::field::Field;
use crate::field_type::FieldType;
use crate::record::{schema_mismatch, take_values, Record};
use crate::value::Value;

/// An immutable book. The natural order is by author, then by title.
#[derive(Clone, Debug)]
pub struct Book {
    id: i64,
    title: String,
    author: String,
}

impl Book {
    pub fn new(id: i64, title: &str, author: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

pub fn by_id() -> impl Comparator<Book> {
    ByKey::new(Book::id)
}

pub fn by_title() -> impl Comparator<Book> {
    ByField::new(Book::title)
}

pub fn by_author() -> impl Comparator<Book> {
    ByField::new(Book::author)
}

/// Author ascending, then title ascending.
pub fn by_author_then_title() -> impl Comparator<Book> {
    by_author().then(by_title())
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.id, self.author, self.title)
    }
}

impl Eq for Book {}

impl PartialEq<Self> for Book {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Book {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Book {
    fn cmp(&self, other: &Self) -> Ordering {
        self.author.cmp(&other.author)
            .then_with(|| self.title.cmp(&other.title))
    }
}

impl Record for Book {
    const NAME: &'static str = "book";

    fn fields() -> Vec<Field> {
        vec![
            Field::new("id", FieldType::Integer),
            Field::new("title", FieldType::String),
            Field::new("author", FieldType::String),
        ]
    }

    fn from_values(values: Vec<Value>) -> RecordResult<Book> {
        match take_values::<3>(Self::NAME, values)? {
            [Value::Integer { i: id }, Value::String { s: title }, Value::String { s: author }] => {
                Ok(Book::new(id, &title, &author))
            }
            _ => Err(schema_mismatch(Self::NAME, 3)),
        }
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::integer(self.id),
            Value::string(&self.title),
            Value::string(&self.author),
        ]
    }
}
