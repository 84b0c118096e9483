//! Integration tests for the seed pipeline.
//!
//! To run these tests, you need:
//! 1. A PostgreSQL database reachable from the test process
//! 2. DATABASE_URL environment variable set
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p seed-data`
//!
//! Note: The placeholder dataset uses fixed ids, so the full-pipeline test
//! clears the tables and reseeds them rather than creating unique rows.

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;
use uuid::Uuid;

use dashboard::auth;
use dashboard::database::Database;
use dashboard::models::User;
use seed_data::db::{Seeder, schema};
use seed_data::placeholder;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

#[tokio::test]
async fn seed_full_dataset_and_verify() {
    let Some(pool) = get_test_pool().await else {
        return;
    };

    schema::ensure_schema(&pool).await.unwrap();

    let seeder = Seeder::new(pool.clone());
    seeder.clear_all().await.unwrap();

    let users = seeder.seed_users(&placeholder::USERS).await.unwrap();
    assert_eq!(users as usize, placeholder::USERS.len());

    let customers = seeder
        .seed_customers(&placeholder::CUSTOMERS)
        .await
        .unwrap();
    assert_eq!(customers as usize, placeholder::CUSTOMERS.len());

    let invoices = seeder.seed_invoices(&placeholder::INVOICES).await.unwrap();
    assert_eq!(invoices as usize, placeholder::INVOICES.len());

    let revenue = seeder.seed_revenue(&placeholder::REVENUE).await.unwrap();
    assert_eq!(revenue as usize, placeholder::REVENUE.len());

    let db = Database::new(pool.clone());

    // The stored password is an argon2 hash of the plaintext, not the
    // plaintext itself.
    let seed_user = placeholder::USERS[0];
    let user = db
        .get_user_by_email(seed_user.email)
        .await
        .unwrap()
        .expect("seeded user should exist");
    assert_ne!(user.password_hash, seed_user.password);
    assert!(auth::verify_password(seed_user.password, &user.password_hash).unwrap());

    let all_customers = db.list_customers().await.unwrap();
    assert_eq!(all_customers.len(), placeholder::CUSTOMERS.len());

    let first = placeholder::CUSTOMERS[0];
    let fetched = db
        .get_customer(first.id)
        .await
        .unwrap()
        .expect("seeded customer should exist");
    assert_eq!(fetched.email, first.email);
    assert_eq!(fetched.image_url.as_deref(), first.image_url);

    let first_invoices = db.invoices_for_customer(first.id).await.unwrap();
    let expected = placeholder::INVOICES
        .iter()
        .filter(|i| i.customer_id == first.id)
        .count();
    assert_eq!(first_invoices.len(), expected);

    // Reseeding writes no new rows for id-keyed tables.
    let reseeded_users = seeder.seed_users(&placeholder::USERS).await.unwrap();
    assert_eq!(reseeded_users, 0);
    let reseeded_customers = seeder
        .seed_customers(&placeholder::CUSTOMERS)
        .await
        .unwrap();
    assert_eq!(reseeded_customers, 0);

    // Revenue drift is overwritten back to the dataset's values.
    sqlx::query("UPDATE revenue SET revenue = 0 WHERE month = 'Jan'")
        .execute(&pool)
        .await
        .unwrap();
    seeder.seed_revenue(&placeholder::REVENUE).await.unwrap();
    let all_revenue = db.list_revenue().await.unwrap();
    let jan = all_revenue.iter().find(|r| r.month == "Jan").unwrap();
    assert_eq!(jan.revenue, 2000);

    // A user registered through the app layer coexists with seeded rows.
    let password_hash = auth::hash_password("hunter2!").unwrap();
    let new_user = User::new(
        "Integration Test".to_string(),
        format!("it-{}@example.com", Uuid::new_v4()),
        password_hash,
    );
    db.insert_user(&new_user).await.unwrap();
    assert!(
        db.get_user_by_email(&new_user.email)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let Some(pool) = get_test_pool().await else {
        return;
    };

    schema::ensure_schema(&pool).await.unwrap();
    schema::ensure_schema(&pool).await.unwrap();
}
