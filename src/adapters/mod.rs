// Adapters layer: concrete implementations for external systems (fixture files, local storage).

pub mod fixture;
pub mod storage;

pub use fixture::FixtureLoader;
pub use storage::LocalStorage;
