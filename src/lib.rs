//! Reading Assessment Dashboard backend.
//!
//! The dashboard's React frontend talks to Supabase directly, so this service
//! only answers liveness checks on `GET /`. The library half exists so the
//! router and server can be driven from integration tests.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use routes::create_router;
