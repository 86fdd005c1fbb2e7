//! Web API 通信

pub mod fetch;

pub use fetch::FetchTransport;
