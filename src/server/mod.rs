//! Server module for building the HTTP server
//!
//! `ServerBuilder` wires a repository into a `ServerHost`, exposes it over
//! REST and serves it with graceful shutdown.

pub mod builder;
pub mod exposure;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
