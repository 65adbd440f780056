use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::book_model::{Book, BookStatus, BookStatusDto, CreateBookDto, UpdateBookDto};
use crate::repositories::book_repository::BookRepository;
use crate::services::image_storage::ImageStorage;

pub struct BookService {
    repository: BookRepository,
    storage: ImageStorage,
}

impl BookService {
    pub fn new(db: Database, storage: ImageStorage) -> Self {
        Self {
            repository: BookRepository::new(db),
            storage,
        }
    }

    pub async fn get_all_books(&self, name: Option<&str>) -> AppResult<Vec<Book>> {
        self.repository.get_all(name).await
    }

    pub async fn create_book(
        &self,
        mut data: CreateBookDto,
        image_url: Option<String>,
    ) -> AppResult<Book> {
        if image_url.is_some() {
            data.image_url = image_url;
        }

        self.repository.create(data).await
    }

    pub async fn update_book(&self, data: UpdateBookDto, id: i64) -> AppResult<Book> {
        self.repository
            .update(data, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        let book = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        self.repository.delete(&book).await?;

        // Cover file cleanup is best-effort, the row is already gone.
        self.storage.delete_image(book.image_url.as_deref()).await;

        Ok(())
    }

    pub async fn get_genres(&self) -> AppResult<Vec<String>> {
        self.repository.get_all_genres().await
    }

    pub fn get_book_statuses() -> Vec<BookStatusDto> {
        BookStatus::ALL
            .iter()
            .map(|status| BookStatusDto {
                label: status.label().to_string(),
                value: status.value().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn test_service() -> BookService {
        let tmp = std::env::temp_dir();
        let db_url = format!(
            "sqlite:{}/books-api-test-{}.db?mode=rwc",
            tmp.display(),
            Uuid::new_v4()
        );
        let upload_dir = tmp.join(format!("books-api-test-uploads-{}", Uuid::new_v4()));

        let db = Database::new(&db_url).await.unwrap();
        let storage = ImageStorage::new(upload_dir.to_str().unwrap());

        BookService::new(db, storage)
    }

    fn create_dto(name: &str) -> CreateBookDto {
        CreateBookDto {
            name: name.to_string(),
            genre: None,
            author: None,
            status: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_book_with_only_name_leaves_optional_fields_empty() {
        let service = test_service().await;

        let book = service.create_book(create_dto("1984"), None).await.unwrap();

        assert_eq!(book.name, "1984");
        assert!(book.genre.is_none());
        assert!(book.author.is_none());
        assert!(book.status.is_none());
        assert!(book.image_url.is_none());
    }

    #[tokio::test]
    async fn create_book_merges_uploaded_image_url() {
        let service = test_service().await;

        let book = service
            .create_book(
                create_dto("Dune"),
                Some("uploads/images/abc.png".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(book.image_url.as_deref(), Some("uploads/images/abc.png"));
    }

    #[tokio::test]
    async fn update_overwrites_only_provided_fields() {
        let service = test_service().await;

        let mut dto = create_dto("Dune");
        dto.author = Some("Frank Herbert".to_string());
        let book = service.create_book(dto, None).await.unwrap();

        let update = UpdateBookDto {
            status: Some(BookStatus::Reading),
            ..Default::default()
        };
        let updated = service.update_book(update, book.id).await.unwrap();

        assert_eq!(updated.name, "Dune");
        assert_eq!(updated.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(updated.status, Some(BookStatus::Reading));
    }

    #[tokio::test]
    async fn update_missing_book_is_not_found_and_store_unchanged() {
        let service = test_service().await;
        service.create_book(create_dto("Dune"), None).await.unwrap();

        let update = UpdateBookDto {
            name: Some("Changed".to_string()),
            ..Default::default()
        };
        let err = service.update_book(update, 9999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let books = service.get_all_books(None).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Dune");
    }

    #[tokio::test]
    async fn delete_missing_book_is_not_found() {
        let service = test_service().await;

        let err = service.delete_book(9999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_book() {
        let service = test_service().await;
        let book = service.create_book(create_dto("Dune"), None).await.unwrap();

        service.delete_book(book.id).await.unwrap();

        let books = service.get_all_books(None).await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn name_filter_is_case_insensitive_substring_match() {
        let service = test_service().await;
        service.create_book(create_dto("Dune"), None).await.unwrap();
        service
            .create_book(create_dto("The Hobbit"), None)
            .await
            .unwrap();

        let books = service.get_all_books(Some("dUnE")).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Dune");

        let books = service.get_all_books(Some("hob")).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "The Hobbit");

        let books = service.get_all_books(None).await.unwrap();
        assert_eq!(books.len(), 2);
    }

    #[tokio::test]
    async fn genres_are_seeded_and_alphabetical() {
        let service = test_service().await;

        let genres = service.get_genres().await.unwrap();
        assert_eq!(genres.len(), 20);
        assert!(genres.contains(&"Fantasy".to_string()));
        assert!(genres.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn statuses_have_fixed_values_and_labels() {
        let statuses = BookService::get_book_statuses();

        assert_eq!(statuses.len(), 4);
        let values: Vec<&str> = statuses.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["want_to_read", "reading", "finished", "dropped"]);
        assert_eq!(statuses[0].label, "Хочу прочитать");
        assert_eq!(statuses[3].label, "Бросил");
    }
}
