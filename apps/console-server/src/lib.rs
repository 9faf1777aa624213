// [[AgentOS]]/apps/console-server/src/lib.rs
// Purpose: Library surface so integration tests can drive the real router.
// Architecture: Crate Root

pub mod builder;
pub mod client;
pub mod error;
pub mod models;
pub mod seed;
pub mod server;
pub mod simulate;
pub mod store;
