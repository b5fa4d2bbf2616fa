pub mod integrations;
pub mod transport;
