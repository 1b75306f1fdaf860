pub mod dashboard_layout;
pub mod sidebar;
pub mod top_bar;

pub use dashboard_layout::{DashboardFrame, DashboardLayout};
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
