pub mod client;
pub mod entity;
pub mod product_repository;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FakeStoreClient};
pub use product_repository::ProductRepositoryFakeStore;
