//! Schema bootstrap and seeding utilities.

pub mod schema;
pub mod seeder;

pub use schema::ensure_schema;
pub use seeder::{SeedError, Seeder};
