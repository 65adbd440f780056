use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const SEED_GENRES: &[&str] = &[
    "Fantasy",
    "Science Fiction (Sci-Fi)",
    "Romance",
    "Mystery",
    "Thriller & Suspense",
    "Horror",
    "Historical Fiction",
    "Action & Adventure",
    "Literary Fiction",
    "Contemporary Fiction",
    "Dystopian",
    "Magical Realism",
    "Paranormal",
    "Western",
    "Graphic Novel",
    "Young Adult (YA)",
    "Middle Grade",
    "Children's",
    "Women's Fiction",
    "Satire",
];

#[derive(Debug, Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        let db = Self { pool };
        db.init_schema().await?;

        Ok(db)
    }

    pub async fn test_connection(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                genre TEXT,
                author TEXT,
                status TEXT,
                image_url TEXT,
                created_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS genres (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        self.seed_genres().await?;

        Ok(())
    }

    // Reference data, inserted once on an empty table.
    async fn seed_genres(&self) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            return Ok(());
        }

        for genre in SEED_GENRES {
            sqlx::query("INSERT INTO genres (name) VALUES ($1)")
                .bind(genre)
                .execute(&self.pool)
                .await?;
        }

        tracing::info!("Seeded {} genres", SEED_GENRES.len());

        Ok(())
    }
}
