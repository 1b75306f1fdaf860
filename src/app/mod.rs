pub mod layouts;
pub mod pages;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the Plan-It App
pub use routes::{App, Route};
