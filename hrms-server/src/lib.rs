//! HRMS Server - human resources management backend
//!
//! # Architecture overview
//!
//! - **Config/State/Server** (`core`): environment-driven configuration,
//!   shared server state, HTTP server lifecycle
//! - **Authentication** (`auth`): JWT service and route-level middleware
//! - **Password hashing** (`security`): Argon2 implementation of the
//!   cryptography contract
//! - **Persistence** (`db`): SQLite pool, migrations, seed data, storage
//!   records and the generic CRUD repository
//! - **Use cases** (`usecases`): one validate/execute object per operation
//!   per entity
//! - **HTTP API** (`api`): routers and handlers per entity
//!
//! # Module structure
//!
//! ```text
//! hrms-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT service, middleware
//! ├── security/      # password hashing
//! ├── contracts.rs   # repository and cryptography contracts
//! ├── db/            # pool, records, repositories, seed
//! ├── usecases/      # per-entity use cases
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logger, validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod contracts;
pub mod core;
pub mod db;
pub mod security;
pub mod usecases;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};

// Re-export logger functions
pub use utils::logger::init_logger;
