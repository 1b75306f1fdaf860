use dioxus::prelude::*;

/// Scenario shown until scenarios are backed by data
pub const SCENARIO_PLACEHOLDER: &str = "Base Budget 2024-25";

/// Avatar initial until a user identity is available
pub const AVATAR_PLACEHOLDER: &str = "U";

#[component]
pub fn TopBar() -> Element {
    rsx! {
        header { class: "c-top-bar",
            div { class: "c-top-bar__left",
                // Scenario selector (no menu yet)
                button { class: "c-scenario-selector", r#type: "button",
                    span { class: "c-scenario-selector__label", "Scenario:" }
                    span { class: "c-scenario-selector__value", "{SCENARIO_PLACEHOLDER}" }
                    span { class: "c-scenario-selector__chevron", "▾" }
                }
            }
            div { class: "c-top-bar__right",
                div { class: "c-avatar", "{AVATAR_PLACEHOLDER}" }
            }
        }
    }
}
