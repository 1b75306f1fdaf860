use crate::domain::{nav_items, NavEntry};
use dioxus::prelude::*;

fn link_class(active: bool) -> &'static str {
    if active {
        "c-sidebar__link c-sidebar__link--active"
    } else {
        "c-sidebar__link"
    }
}

/// Workspace navigation.
///
/// The current path is passed in by the layout so highlighting stays a pure
/// function of the props.
#[component]
pub fn Sidebar(current_path: String) -> Element {
    let items = nav_items(&current_path);

    rsx! {
        aside { class: "c-sidebar",
            div { class: "c-sidebar__brand",
                span { class: "c-sidebar__title", "Plan-It" }
            }
            nav { class: "c-sidebar__nav",
                for item in items {
                    SidebarLink {
                        key: "{item.entry.route}",
                        entry: *item.entry,
                        active: item.active,
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarLink(entry: NavEntry, active: bool) -> Element {
    let icon_class = format!("c-sidebar__icon c-sidebar__icon--{}", entry.icon.as_str());
    let glyph = entry.icon.glyph();
    let label = entry.label;

    rsx! {
        Link {
            to: entry.route,
            class: link_class(active),
            span { class: "{icon_class}", "{glyph}" }
            span { class: "c-sidebar__label", "{label}" }
        }
    }
}
