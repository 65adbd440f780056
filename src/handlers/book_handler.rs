use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    errors::AppError,
    models::book_model::{
        BookDto, BookQuery, BookStatus, BookStatusDto, CreateBookDto, UpdateBookDto,
    },
    services::book_service::BookService,
    AppState,
};

pub struct BookHandler;

impl BookHandler {
    fn create_service(state: &AppState) -> BookService {
        BookService::new(state.db.clone(), state.storage.clone())
    }

    pub async fn get_statuses() -> Json<Vec<BookStatusDto>> {
        Json(BookService::get_book_statuses())
    }

    pub async fn get_genres(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<String>>, AppError> {
        let service = Self::create_service(&state);
        let genres = service.get_genres().await?;

        Ok(Json(genres))
    }

    pub async fn get_books(
        State(state): State<AppState>,
        Query(query): Query<BookQuery>,
    ) -> Result<Json<Vec<BookDto>>, AppError> {
        query
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let service = Self::create_service(&state);
        let books = service.get_all_books(query.name.as_deref()).await?;

        Ok(Json(books.into_iter().map(BookDto::from).collect()))
    }

    pub async fn create_book(
        State(state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<(StatusCode, Json<BookDto>), AppError> {
        let mut name: Option<String> = None;
        let mut genre: Option<String> = None;
        let mut author: Option<String> = None;
        let mut status: Option<BookStatus> = None;
        let mut image: Option<(String, Vec<u8>)> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to parse multipart: {}", e)))?
        {
            let field_name = field.name().unwrap_or("").to_string();

            match field_name.as_str() {
                "name" => name = Some(Self::text_field(field, "name").await?),
                "genre" => genre = Some(Self::text_field(field, "genre").await?),
                "author" => author = Some(Self::text_field(field, "author").await?),
                "status" => {
                    let raw = Self::text_field(field, "status").await?;
                    status = Some(BookStatus::parse(&raw).ok_or_else(|| {
                        AppError::Validation(format!("Invalid status: {}", raw))
                    })?);
                }
                "image" => {
                    let filename = field
                        .file_name()
                        .map(|s| s.to_string())
                        .ok_or_else(|| {
                            AppError::BadRequest("Image filename is missing".to_string())
                        })?;
                    let bytes = field.bytes().await.map_err(|e| {
                        AppError::BadRequest(format!("Failed to read image: {}", e))
                    })?;
                    image = Some((filename, bytes.to_vec()));
                }
                _ => {}
            }
        }

        let data = CreateBookDto {
            name: name.unwrap_or_default(),
            genre,
            author,
            status,
            image_url: None,
        };
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let image_url = match image {
            Some((filename, bytes)) => Some(state.storage.save_image(&filename, &bytes).await?),
            None => None,
        };

        let service = Self::create_service(&state);
        let book = service.create_book(data, image_url).await?;

        Ok((StatusCode::CREATED, Json(BookDto::from(book))))
    }

    pub async fn update_book(
        State(state): State<AppState>,
        Path(id): Path<i64>,
        Json(request): Json<UpdateBookDto>,
    ) -> Result<Json<BookDto>, AppError> {
        let service = Self::create_service(&state);
        let book = service.update_book(request, id).await?;

        Ok(Json(BookDto::from(book)))
    }

    pub async fn delete_book(
        State(state): State<AppState>,
        Path(id): Path<i64>,
    ) -> Result<StatusCode, AppError> {
        let service = Self::create_service(&state);
        service.delete_book(id).await?;

        Ok(StatusCode::NO_CONTENT)
    }

    async fn text_field(
        field: axum::extract::multipart::Field<'_>,
        name: &str,
    ) -> Result<String, AppError> {
        field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read {}: {}", name, e)))
    }
}
