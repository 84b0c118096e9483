//! Database seeding utilities.

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::placeholder::{CustomerSeed, InvoiceSeed, RevenueSeed, UserSeed};
use dashboard::auth;
use dashboard::errors::AppError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] AppError),
}

/// Database seeder for inserting the placeholder dataset.
///
/// Each `seed_*` method returns the number of rows actually written, so a
/// rerun against an already-seeded database reports zero for the id-keyed
/// tables.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Seeds users, hashing each password before insertion.
    pub async fn seed_users(&self, users: &[UserSeed]) -> Result<u64, SeedError> {
        info!("Seeding {} users...", users.len());

        let mut inserted = 0;
        for user in users {
            let password_hash = auth::hash_password(user.password)?;
            inserted += sqlx::query(
                r#"
                INSERT INTO users (id, name, email, password_hash)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(user.id)
            .bind(user.name)
            .bind(user.email)
            .bind(&password_hash)
            .execute(&self.pool)
            .await?
            .rows_affected();
        }

        info!("Seeded {inserted} users");
        Ok(inserted)
    }

    /// Seeds customers.
    pub async fn seed_customers(&self, customers: &[CustomerSeed]) -> Result<u64, SeedError> {
        info!("Seeding {} customers...", customers.len());

        let mut inserted = 0;
        for customer in customers {
            inserted += sqlx::query(
                r#"
                INSERT INTO customers (id, name, email, image_url)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(customer.id)
            .bind(customer.name)
            .bind(customer.email)
            .bind(customer.image_url)
            .execute(&self.pool)
            .await?
            .rows_affected();
        }

        info!("Seeded {inserted} customers");
        Ok(inserted)
    }

    /// Seeds invoices. Ids are generated by the database, so every run
    /// inserts fresh rows; use [`Seeder::clear_all`] first for a clean slate.
    pub async fn seed_invoices(&self, invoices: &[InvoiceSeed]) -> Result<u64, SeedError> {
        info!("Seeding {} invoices...", invoices.len());

        let mut inserted = 0;
        for invoice in invoices {
            inserted += sqlx::query(
                r#"
                INSERT INTO invoices (customer_id, amount, status, date)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(invoice.customer_id)
            .bind(invoice.amount)
            .bind(invoice.status)
            .bind(invoice.date)
            .execute(&self.pool)
            .await?
            .rows_affected();
        }

        info!("Seeded {inserted} invoices");
        Ok(inserted)
    }

    /// Seeds monthly revenue, overwriting any existing value for a month.
    pub async fn seed_revenue(&self, revenue: &[RevenueSeed]) -> Result<u64, SeedError> {
        info!("Seeding {} revenue rows...", revenue.len());

        let mut written = 0;
        for entry in revenue {
            written += sqlx::query(
                r#"
                INSERT INTO revenue (month, revenue)
                VALUES ($1, $2)
                ON CONFLICT (month) DO UPDATE
                SET revenue = EXCLUDED.revenue
                "#,
            )
            .bind(entry.month)
            .bind(entry.revenue)
            .execute(&self.pool)
            .await?
            .rows_affected();
        }

        info!("Seeded {written} revenue rows");
        Ok(written)
    }

    /// Clears all seeded data.
    ///
    /// **WARNING**: This deletes all data from the tables. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        // Order matters due to foreign key constraints
        sqlx::query("DELETE FROM invoices")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM revenue")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM customers")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        info!("All data cleared");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
