use crate::app::layouts::{Sidebar, TopBar};
use crate::app::routes::Route;
use crate::domain::active_entry;
use crate::shared::logging::log_route_change;
use dioxus::prelude::*;

/// Full-viewport frame: fixed sidebar, fixed top bar, scrolling content.
///
/// Only `c-dashboard__content` scrolls; the frame itself is clipped to the
/// viewport.
#[component]
pub fn DashboardFrame(current_path: String, children: Element) -> Element {
    rsx! {
        div { class: "c-dashboard",
            Sidebar { current_path: current_path.clone() }
            div { class: "c-dashboard__column",
                TopBar {}
                main { class: "c-dashboard__content",
                    {children}
                }
            }
        }
    }
}

/// Router layout for `/workspace/**`
#[component]
pub fn DashboardLayout() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();

    use_effect(use_reactive((&current_path,), |(path,)| {
        log_route_change(&path, active_entry(&path).map(|entry| entry.label));
    }));

    rsx! {
        DashboardFrame { current_path,
            Outlet::<Route> {}
        }
    }
}
