//! Workspace navigation model
//!
//! The fixed, ordered list of sidebar entries and the rules deciding which
//! entry is highlighted for a given path. Everything here is pure so the
//! sidebar can be tested without a router.

/// Icon shown next to a navigation label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Briefcase,
    Dollar,
}

impl NavIcon {
    /// Glyph rendered in the sidebar
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => "📊",
            NavIcon::Users => "👥",
            NavIcon::Briefcase => "💼",
            NavIcon::Dollar => "💰",
        }
    }

    /// BEM modifier used by the stylesheet
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => "dashboard",
            NavIcon::Users => "users",
            NavIcon::Briefcase => "briefcase",
            NavIcon::Dollar => "dollar",
        }
    }
}

/// One sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: NavIcon,
}

/// Sidebar entries, in display order. Routes are unique.
pub static NAVIGATION: &[NavEntry] = &[
    NavEntry {
        label: "Dashboard",
        route: "/workspace",
        icon: NavIcon::Dashboard,
    },
    NavEntry {
        label: "Enrollment",
        route: "/workspace/enrollment",
        icon: NavIcon::Users,
    },
    NavEntry {
        label: "Workforce",
        route: "/workspace/workforce",
        icon: NavIcon::Briefcase,
    },
    NavEntry {
        label: "Financials",
        route: "/workspace/financials",
        icon: NavIcon::Dollar,
    },
];

/// Entry paired with its highlight state for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub entry: &'static NavEntry,
    pub active: bool,
}

/// Drop any `?query` / `#fragment` and a single trailing slash (except on `/`).
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];

    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

/// Whether `entry_route` should be highlighted while `current_path` is shown.
///
/// Matches the exact route, or any path continuing it with a `/`. Prefixes
/// that stop inside a segment do not match: `/workspace/enroll` is not active
/// on `/workspace/enrollment`.
pub fn is_active(current_path: &str, entry_route: &str) -> bool {
    let path = normalize_path(current_path);

    match path.strip_prefix(entry_route) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// The single entry to highlight for `current_path`.
///
/// When several routes match (`/workspace` is a segment prefix of every
/// workspace page) the longest route wins.
pub fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAVIGATION
        .iter()
        .filter(|entry| is_active(current_path, entry.route))
        .max_by_key(|entry| entry.route.len())
}

/// Every entry in display order with at most one flagged active.
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    let active = active_entry(current_path);

    NAVIGATION
        .iter()
        .map(|entry| NavItem {
            entry,
            active: active.is_some_and(|a| a.route == entry.route),
        })
        .collect()
}
