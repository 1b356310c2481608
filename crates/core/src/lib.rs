//! Functional core for the heroes service.
//!
//! Pure data types, validation and the storage contract. Nothing in this crate
//! performs I/O; backends and the HTTP layer live in the `heroes` crate.

pub mod hero;
pub mod storage;
