pub mod app_state;
pub mod cache;
pub mod config;
pub mod extractor;
pub mod feeds;
pub mod fetcher;
pub mod health;
pub mod identity;
pub mod middleware;
pub mod news;
pub mod registry;
pub mod routes;
