//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - HTTP server setup (server)
//! - Application state (state)

pub mod server;
pub mod state;

pub use state::AppState;
