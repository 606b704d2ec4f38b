//! In-memory storage backend.
//!
//! Stores users in a `HashMap` wrapped in `Arc<RwLock<_>>`. Used by the router
//! tests and for running the service locally without AWS.
//!
//! # Example
//!
//! ```rust,ignore
//! use userstore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
