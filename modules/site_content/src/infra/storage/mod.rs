//! Storage layer - backend row shapes, mappers and row sources

pub mod entity;
pub mod mapper;
pub mod memory;
pub mod postgrest;
pub mod repositories;

pub use memory::InMemorySource;
pub use postgrest::PostgrestSource;
pub use repositories::RowSource;
