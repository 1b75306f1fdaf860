// Planning API envelopes
// Shared between the Axum handlers and any client code

pub mod planning;

pub use planning::*;
