//! Heroes: a CRUD microservice for heroes backed by a key-value table store.
//!
//! The HTTP adapter ([`handlers`]) validates requests and maps absence to
//! 404s, the [`service`] assigns identifiers, and [`storage`] talks to the
//! table store.

pub mod app;
pub mod config;
pub mod handlers;
pub mod service;
pub mod state;
pub mod storage;
