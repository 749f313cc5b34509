pub mod client;
pub mod soa;

pub use client::build_http_client;
