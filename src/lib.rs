pub mod handlers;
pub mod models;
pub mod services;
pub mod repositories;
pub mod config;
pub mod routes;
pub mod errors;
pub mod database;

use std::sync::Arc;
use database::Database;
use config::Config;
use services::image_storage::ImageStorage;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub config: Config,
    pub storage: ImageStorage,
}
