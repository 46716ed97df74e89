// Test Helper Modules
//
// Shared infrastructure for unit, contract and integration tests. Every
// helper runs against the in-memory document store, so no database is
// needed; the MySQL store has its own opt-in test.
//
// Usage (from a file under tests/<kind>/):
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod assertions;
pub mod test_data;

pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
