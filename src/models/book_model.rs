use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Reading status of a tracked book. Stored as snake_case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    WantToRead,
    Reading,
    Finished,
    Dropped,
}

impl BookStatus {
    pub const ALL: [BookStatus; 4] = [
        BookStatus::WantToRead,
        BookStatus::Reading,
        BookStatus::Finished,
        BookStatus::Dropped,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            BookStatus::WantToRead => "want_to_read",
            BookStatus::Reading => "reading",
            BookStatus::Finished => "finished",
            BookStatus::Dropped => "dropped",
        }
    }

    /// Localized display label.
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::WantToRead => "Хочу прочитать",
            BookStatus::Reading => "Читаю",
            BookStatus::Finished => "Прочитал",
            BookStatus::Dropped => "Бросил",
        }
    }

    pub fn parse(value: &str) -> Option<BookStatus> {
        BookStatus::ALL.iter().copied().find(|s| s.value() == value)
    }
}

#[derive(Clone, Debug, FromRow)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub genre: Option<String>,
    pub author: Option<String>,
    pub status: Option<BookStatus>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub name: String,
    pub genre: Option<String>,
    pub author: Option<String>,
    pub status: Option<BookStatus>,
    pub image_url: Option<String>,
    pub created_at: String,
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            genre: book.genre,
            author: book.author,
            status: book.status,
            image_url: book.image_url,
            created_at: book.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookDto {
    #[validate(length(min = 1, message = "Book name must not be empty"))]
    pub name: String,
    pub genre: Option<String>,
    pub author: Option<String>,
    pub status: Option<BookStatus>,
    pub image_url: Option<String>,
}

/// Partial update payload. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookDto {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub author: Option<String>,
    pub status: Option<BookStatus>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookStatusDto {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BookQuery {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}
