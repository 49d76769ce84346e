pub mod brokerage_client;

pub use brokerage_client::BrokerageClient;
