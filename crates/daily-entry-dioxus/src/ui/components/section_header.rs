use dioxus::prelude::*;

/// Title row for a page section
#[component]
pub fn SectionHeader(children: Element) -> Element {
    rsx! {
        h2 {
            class: "section-header",
            {children}
        }
    }
}
