pub mod bridge;
pub mod hub_client;
