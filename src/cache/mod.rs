pub mod memory;
pub mod noop;
pub mod single_flight;
pub mod store;

pub use memory::MemoryCache;
pub use noop::NoopCache;
pub use single_flight::FetchCoordinator;
pub use store::{CacheError, CacheStore};
