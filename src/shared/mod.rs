pub mod errors;

// Route-change logging is used by the UI; the subscriber setup is server-only
pub mod logging;
