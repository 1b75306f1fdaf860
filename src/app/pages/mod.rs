pub mod home;
pub mod not_found;
pub mod workspace;

pub use home::Home;
pub use not_found::NotFound;
pub use workspace::{Dashboard, Enrollment, Financials, PageContent, PlaceholderPage, Workforce};
