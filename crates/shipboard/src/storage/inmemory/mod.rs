//! In-memory storage backend.
//!
//! Stores all events in a HashMap wrapped in `Arc<RwLock<_>>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipboard::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
