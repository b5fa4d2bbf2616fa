pub mod api;
pub mod api_docs;
pub mod config;
pub mod infrastructure;
pub mod modules;
pub mod utils;

pub use infrastructure::server;
pub use infrastructure::AppState;
pub use modules::integrations::overpass;
pub use modules::transport;
