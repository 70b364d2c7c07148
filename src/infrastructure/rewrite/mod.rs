//! Rewrite service adapters

pub mod http;

pub use http::HttpRewriter;
