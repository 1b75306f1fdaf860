// Domain layer (navigation model, API envelopes)
// Pure Rust, no framework dependencies

pub mod models;
pub mod navigation;

pub use navigation::{active_entry, is_active, nav_items, NavEntry, NavIcon, NavItem, NAVIGATION};
