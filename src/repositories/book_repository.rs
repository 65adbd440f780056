use crate::database::Database;
use crate::errors::AppResult;
use crate::models::book_model::{Book, CreateBookDto, UpdateBookDto};
use crate::models::genre_model::Genre;
use chrono::Utc;

pub struct BookRepository {
    db: Database,
}

impl BookRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, name: Option<&str>) -> AppResult<Vec<Book>> {
        let books = match name {
            Some(name) => {
                sqlx::query_as::<_, Book>(
                    r#"
                    SELECT id, name, genre, author, status, image_url, created_at
                    FROM books
                    WHERE LOWER(name) LIKE '%' || LOWER($1) || '%'
                    "#,
                )
                .bind(name)
                .fetch_all(&self.db.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Book>(
                    r#"
                    SELECT id, name, genre, author, status, image_url, created_at
                    FROM books
                    "#,
                )
                .fetch_all(&self.db.pool)
                .await?
            }
        };

        Ok(books)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, genre, author, status, image_url, created_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(book)
    }

    pub async fn create(&self, data: CreateBookDto) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (name, genre, author, status, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, genre, author, status, image_url, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.genre)
        .bind(&data.author)
        .bind(data.status)
        .bind(&data.image_url)
        .bind(Utc::now())
        .fetch_one(&self.db.pool)
        .await?;

        Ok(book)
    }

    /// Overwrites only the fields provided in `data`. Returns `None` when no
    /// book matches `id`.
    pub async fn update(&self, data: UpdateBookDto, id: i64) -> AppResult<Option<Book>> {
        let Some(book) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let name = data.name.unwrap_or(book.name);
        let genre = data.genre.or(book.genre);
        let author = data.author.or(book.author);
        let status = data.status.or(book.status);
        let image_url = data.image_url.or(book.image_url);

        let updated = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET name = $1, genre = $2, author = $3, status = $4, image_url = $5
            WHERE id = $6
            RETURNING id, name, genre, author, status, image_url, created_at
            "#,
        )
        .bind(&name)
        .bind(&genre)
        .bind(&author)
        .bind(status)
        .bind(&image_url)
        .bind(id)
        .fetch_one(&self.db.pool)
        .await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, book: &Book) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book.id)
            .execute(&self.db.pool)
            .await?;

        Ok(())
    }

    pub async fn get_all_genres(&self) -> AppResult<Vec<String>> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(&self.db.pool)
            .await?;

        Ok(genres.into_iter().map(|g| g.name).collect())
    }
}
