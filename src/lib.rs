//! formsmith - prompt-driven form generation with strict, deterministic validation
//!
//! A natural-language form description goes in; a compiled, validated form
//! comes out. The `schema` module is the core: a pure compiler from field
//! descriptors to an aggregate validator. Everything else is the shell that
//! feeds it (generator), stores its output (registry), and exposes it
//! (http_server, cli).

pub mod cli;
pub mod descriptor;
pub mod generator;
pub mod http_server;
pub mod observability;
pub mod registry;
pub mod schema;
