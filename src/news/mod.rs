pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod service;

pub use errors::NewsError;
pub use service::NewsService;
