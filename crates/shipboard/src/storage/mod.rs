//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `shipboard_core::storage`. Events live in memory for the lifetime of the
//! process; the published schedule is re-seeded on every start.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
