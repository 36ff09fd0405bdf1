// Service exports
pub mod cache;
pub mod data;

pub use cache::DatasetCache;
pub use data::{DataProvider, DataError, JsonFileProvider, InMemoryProvider};
