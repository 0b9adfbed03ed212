use anyhow::Context;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use tracing::info;

pub type ConnectionPool = Pool<Sqlite>;

const CREATE_ORDERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        address TEXT,
        quantity INTEGER
    )
"#;

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        price REAL,
        image TEXT
    )
"#;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        max_connections: u32,
    ) -> anyhow::Result<ConnectionPool> {
        let options = SqliteConnectOptions::from_str(connection_string)
            .with_context(|| format!("Invalid database url: {connection_string}"))?
            .create_if_missing(true);

        // every connection to an in-memory database opens its own empty database
        let in_memory = connection_string.contains(":memory:");

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create database connection pool: {}", err))?;

        Ok(pool)
    }

    /// Creates the `orders` and `products` tables when they do not exist yet.
    pub async fn bootstrap_schema(pool: &ConnectionPool) -> anyhow::Result<()> {
        sqlx::query(CREATE_ORDERS_TABLE)
            .execute(pool)
            .await
            .context("Failed to create orders table")?;

        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(pool)
            .await
            .context("Failed to create products table")?;

        info!("✅ Database schema ready");
        Ok(())
    }
}
