//! Default seed script - loads the placeholder dataset into Postgres
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use seed_data::config::SeedConfig;
use seed_data::db::{Seeder, schema};
use seed_data::placeholder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    schema::ensure_schema(&pool).await?;

    let seeder = Seeder::new(pool.clone());

    if config.clear_first {
        seeder.clear_all().await?;
    }

    let users = seeder.seed_users(&placeholder::USERS).await?;
    let customers = seeder.seed_customers(&placeholder::CUSTOMERS).await?;
    let invoices = seeder.seed_invoices(&placeholder::INVOICES).await?;
    let revenue = seeder.seed_revenue(&placeholder::REVENUE).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Users: {}", users);
    tracing::info!("  Customers: {}", customers);
    tracing::info!("  Invoices: {}", invoices);
    tracing::info!("  Revenue rows: {}", revenue);

    pool.close().await;

    Ok(())
}
