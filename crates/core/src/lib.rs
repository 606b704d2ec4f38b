//! Functional core for userstore.
//!
//! Pure domain types and the storage contract. Nothing in this crate performs
//! I/O; backends live in the `userstore` binary crate.

pub mod storage;
pub mod user;
