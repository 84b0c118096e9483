use crate::errors::AppError;
use crate::models::{Customer, Invoice, Revenue, User};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, name, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as(
            r#"
            SELECT id, name, email, image_url
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let customers: Vec<Customer> = sqlx::query_as(
            r#"
            SELECT id, name, email, image_url
            FROM customers
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn invoices_for_customer(&self, customer_id: Uuid) -> Result<Vec<Invoice>, AppError> {
        let invoices: Vec<Invoice> = sqlx::query_as(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE customer_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    pub async fn list_revenue(&self) -> Result<Vec<Revenue>, AppError> {
        let revenue: Vec<Revenue> = sqlx::query_as(
            r#"
            SELECT month, revenue
            FROM revenue
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(revenue)
    }
}
