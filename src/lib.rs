pub mod api;
pub mod client;
pub mod config;
pub mod datastore;
pub mod log;
pub mod model;

#[cfg(all(test, feature = "e2e"))]
mod e2e_tests;
