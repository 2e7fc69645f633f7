//! Backend API adapters

mod http;

pub use http::HttpBackend;
