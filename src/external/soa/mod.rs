mod client;
mod provider;
mod types;

pub use client::SoaDataClient;
pub use provider::DataModel;
pub use types::Dataset;
