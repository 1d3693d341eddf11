use sqlx::{Pool, Postgres, migrate::Migrator, postgres::PgPoolOptions};
use tracing::info;

pub type ConnectionPool = Pool<Postgres>;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(connection_string: &str) -> anyhow::Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }

    pub async fn run_migrations(pool: &ConnectionPool) -> anyhow::Result<()> {
        info!("📦 Running database migrations");

        MIGRATOR
            .run(pool)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to run migrations: {}", err))?;

        info!("✅ Database migrations applied");
        Ok(())
    }
}
