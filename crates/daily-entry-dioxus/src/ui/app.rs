use super::components::Entry;
use dioxus::prelude::*;

const SOLARIZED_LIGHT_CSS: &str = include_str!("../assets/solarized-light.css");

/// Host page for today's entry. Owns the text; the entry only displays and reports it.
#[component]
pub fn App(initial_content: Option<String>) -> Element {
    let mut content = use_signal(|| initial_content.clone());

    rsx! {
        style { {SOLARIZED_LIGHT_CSS} }
        div {
            class: "page",
            Entry {
                content: content.read().clone(),
                on_change: move |text: String| {
                    log::debug!("entry updated, {} lines", text.lines().count());
                    content.set(Some(text));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_app_seeds_entry_with_initial_content() {
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                initial_content: Some("Slept well.".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"class="page""#));
        assert!(html.contains("Entry"));
        assert!(html.contains("Slept well."));
    }

    #[test]
    fn test_app_without_seed_renders_empty_editor() {
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                initial_content: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("<textarea"));
    }
}
