use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Stores uploaded cover images on the local filesystem. Files land under
/// `<root>/images/` with a generated unique name and are served back through
/// the `/uploads` static route.
#[derive(Clone)]
pub struct ImageStorage {
    root: PathBuf,
}

impl ImageStorage {
    pub fn new(upload_dir: &str) -> Self {
        Self {
            root: PathBuf::from(upload_dir),
        }
    }

    /// Validates extension and size, writes the file, and returns the
    /// relative URL path of the stored image.
    pub async fn save_image(&self, filename: &str, bytes: &[u8]) -> AppResult<String> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .ok_or_else(|| AppError::BadRequest("Image filename has no extension".to_string()))?;

        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unsupported image type .{}. Allowed: {}",
                ext,
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }

        if bytes.len() > MAX_FILE_SIZE {
            return Err(AppError::BadRequest(format!(
                "Image too large. Maximum size: {}MB",
                MAX_FILE_SIZE / (1024 * 1024)
            )));
        }

        let dir = self.root.join("images");
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create upload dir: {}", e)))?;

        let unique_name = format!("{}.{}", Uuid::new_v4(), ext);
        tokio::fs::write(dir.join(&unique_name), bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to save image: {}", e)))?;

        Ok(format!("uploads/images/{}", unique_name))
    }

    /// Best-effort removal of a stored image. A missing file is not an error.
    pub async fn delete_image(&self, image_url: Option<&str>) {
        let Some(url) = image_url else {
            return;
        };
        let Some(name) = url.rsplit('/').next() else {
            return;
        };

        let path = self.root.join("images").join(name);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %e, path = %path.display(), "Failed to delete image");
            }
        }
    }
}
