//! Functional core for the shipboard events calendar.
//!
//! Everything in this crate is pure: no I/O, no clocks, no global state.
//! The `shipboard` binary supplies configuration, the current time and an
//! event store, and calls into these modules to do the actual work.

pub mod cruise;
pub mod events;
pub mod ics;
pub mod serde;
pub mod storage;
