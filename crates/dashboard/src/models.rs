use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Path to the customer's avatar image, if one has been uploaded.
    pub image_url: Option<String>,
}

/// An invoice issued to a customer. Amounts are stored in cents.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: String,
    pub date: Date,
}

/// Aggregated revenue for one month, keyed by the month label.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_users_get_distinct_ids() {
        let a = User::new("A".into(), "a@example.com".into(), "hash".into());
        let b = User::new("B".into(), "b@example.com".into(), "hash".into());
        assert_ne!(a.id, b.id);
    }
}
