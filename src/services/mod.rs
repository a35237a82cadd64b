// Service exports
pub mod postgres;
pub mod store;

pub use postgres::{PostgresClient, PostgresError};
pub use store::MatchStore;
