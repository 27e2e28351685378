//! HTTP surface
//!
//! axum server exposing form generation, retrieval, and validation. The
//! schema core stays synchronous; only the generation call awaits anything
//! beyond the socket.

mod config;
mod errors;
mod form_routes;
mod health_routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, RouteError, RouteResult};
pub use form_routes::{form_routes, FormState};
pub use health_routes::health_routes;
pub use server::HttpServer;
