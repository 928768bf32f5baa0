pub mod credentials;
pub mod memory;
pub mod persistence;
pub mod repositories;

pub use memory::{MemoryAuthGateway, MemoryRecordStore};
pub use repositories::InMemoryProfileRepository;
