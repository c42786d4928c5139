//! Core server building blocks: configuration, shared state, lifecycle

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, JwtConfig};
pub use server::Server;
pub use state::ServerState;
