//! Schema bootstrap for the seeded tables.
//!
//! All statements are idempotent, so this can run against a database that
//! already has the tables.

use sqlx::PgPool;
use tracing::info;

use crate::db::seeder::SeedError;

/// Ensures the uuid extension and all four tables exist.
///
/// Tables are created in dependency order; invoices carries the foreign key
/// to customers.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), SeedError> {
    ensure_uuid_extension(pool).await?;
    create_users_table(pool).await?;
    create_customers_table(pool).await?;
    create_invoices_table(pool).await?;
    create_revenue_table(pool).await?;

    info!("Schema ready");
    Ok(())
}

/// Creates the uuid-ossp extension used for generated primary keys.
async fn ensure_uuid_extension(pool: &PgPool) -> Result<(), SeedError> {
    sqlx::query(r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#)
        .execute(pool)
        .await?;
    Ok(())
}

async fn create_users_table(pool: &PgPool) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_customers_table(pool: &PgPool) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email TEXT NOT NULL UNIQUE,
            image_url TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_invoices_table(pool: &PgPool) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
            customer_id UUID NOT NULL REFERENCES customers(id),
            amount INT NOT NULL,
            status VARCHAR(255) NOT NULL,
            date DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_revenue_table(pool: &PgPool) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS revenue (
            month VARCHAR(4) NOT NULL UNIQUE,
            revenue INT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
