pub mod book_service;
pub mod image_storage;
