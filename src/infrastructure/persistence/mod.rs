pub mod auth_gateway;
pub mod database;
pub mod record_store;
pub mod repositories;

pub use auth_gateway::SqliteAuthGateway;
pub use database::Database;
pub use record_store::SqliteRecordStore;
pub use repositories::SqliteProfileRepository;
