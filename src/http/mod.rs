//! HTTP client layer — `LifxHttp`, one method per endpoint.

pub mod client;

pub use client::LifxHttp;
