use crate::app::layouts::DashboardLayout;
use crate::app::pages::{Dashboard, Enrollment, Financials, Home, NotFound, Workforce};

use dioxus::prelude::*;
use dioxus::document;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        // Landing page
        #[route("/")]
        Home {},

        // Workspace pages share the sidebar / top bar frame
        #[layout(DashboardLayout)]
            #[route("/workspace")]
            Dashboard {},
            #[route("/workspace/enrollment")]
            Enrollment {},
            #[route("/workspace/workforce")]
            Workforce {},
            #[route("/workspace/financials")]
            Financials {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Plan-It app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Document head shared by every route
#[component]
fn AppShell() -> Element {
    // Generated by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Title { "Plan-It" }
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NAVIGATION;
    use std::str::FromStr;

    #[test]
    fn test_navigation_routes_are_routable() {
        for entry in NAVIGATION {
            let route = Route::from_str(entry.route)
                .unwrap_or_else(|_| panic!("{} is not a known route", entry.route));
            assert_eq!(route.to_string(), entry.route);
        }
    }

    #[test]
    fn test_workspace_routes() {
        assert_eq!(Route::from_str("/workspace").ok(), Some(Route::Dashboard {}));
        assert_eq!(Route::from_str("/workspace/enrollment").ok(), Some(Route::Enrollment {}));
        assert_eq!(Route::Financials {}.to_string(), "/workspace/financials");
        assert_eq!(Route::Home {}.to_string(), "/");
    }

    #[test]
    fn test_unknown_route_falls_through_to_not_found() {
        let route = Route::from_str("/workspace/payroll").ok();
        assert_eq!(
            route,
            Some(Route::NotFound {
                segments: vec!["workspace".to_string(), "payroll".to_string()]
            })
        );
    }
}
