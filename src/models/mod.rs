pub mod book_model;
pub mod genre_model;
