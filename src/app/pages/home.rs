use crate::app::routes::Route;
use dioxus::prelude::*;

/// Landing page, rendered outside the workspace frame
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "c-landing",
            div { class: "c-landing__content",
                h1 { class: "c-landing__title", "Plan-It" }
                p { class: "c-landing__tagline", "FP&A Platform for KSA Community Schools (AEFE)" }
                div { class: "c-landing__actions",
                    Link {
                        to: Route::Enrollment {},
                        class: "c-button c-button--primary",
                        "Open Workspace"
                    }
                }
            }
        }
    }
}
