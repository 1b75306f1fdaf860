//! Server-side rendering of the full router at a given path

use crate::app::routes::Route;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use std::rc::Rc;

#[component]
fn RouterAt(path: String) -> Element {
    use_hook(|| {
        let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path.clone()));
        provide_context(history)
    });

    rsx! { Router::<Route> {} }
}

/// HTML produced by `Router::<Route>` when the browser is at `path`
pub fn render_route(path: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        RouterAt,
        RouterAtProps {
            path: path.to_string(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Opening `<a ...>` tags in document order
pub fn anchor_tags(html: &str) -> Vec<&str> {
    html.split("<a ")
        .skip(1)
        .map(|rest| rest.split('>').next().unwrap_or(rest))
        .collect()
}
