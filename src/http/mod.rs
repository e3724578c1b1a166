//! HTTP server module.
//!
//! Plain HTTP only; the service sits behind whatever terminates TLS for the
//! dashboard. The server includes:
//! - An explicit bind step so a busy port fails fast at startup
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
