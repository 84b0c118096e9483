//! Placeholder data seeding for the dashboard.
//!
//! This crate provides the fixed demo dataset, schema bootstrap, and the
//! seeder used to populate a development database with users, customers,
//! invoices, and monthly revenue.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! schema::ensure_schema(&pool).await?;
//!
//! let seeder = Seeder::new(pool);
//! seeder.seed_users(&placeholder::USERS).await?;
//! seeder.seed_customers(&placeholder::CUSTOMERS).await?;
//! seeder.seed_invoices(&placeholder::INVOICES).await?;
//! seeder.seed_revenue(&placeholder::REVENUE).await?;
//! ```

pub mod config;
pub mod db;
pub mod placeholder;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder, schema};
    pub use crate::placeholder::{self, CustomerSeed, InvoiceSeed, RevenueSeed, UserSeed};
}
