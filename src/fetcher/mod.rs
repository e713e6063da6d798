pub mod client;
pub mod errors;

pub use client::fetch;
pub use errors::FetchError;
