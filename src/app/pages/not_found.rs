use crate::app::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    use_effect(use_reactive((&path,), |(path,)| {
        tracing::warn!(path = %path, "Unknown route");
    }));

    rsx! {
        div { class: "c-landing",
            div { class: "c-landing__content",
                h1 { class: "c-landing__title", "Page not found" }
                p { class: "c-landing__tagline", "Nothing lives at {path}" }
                div { class: "c-landing__actions",
                    Link {
                        to: Route::Dashboard {},
                        class: "c-button c-button--primary",
                        "Back to workspace"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::testing::{anchor_tags, render_route};

    #[test]
    fn test_unknown_path_shown_with_link_back() {
        let html = render_route("/workspace/payroll");
        assert!(html.contains("Page not found"));
        assert!(html.contains("Nothing lives at /workspace/payroll"));

        let links = anchor_tags(&html);
        assert_eq!(links.len(), 1);
        assert!(links[0].contains(r#"href="/workspace""#));
        assert!(html.contains("Back to workspace"));
    }

    #[test]
    fn test_unknown_path_has_no_workspace_frame() {
        let html = render_route("/reports/2024");
        assert!(html.contains("Nothing lives at /reports/2024"));
        assert!(!html.contains("<aside"));
    }
}
