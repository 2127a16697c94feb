use super::{EditorView, MarkdownEditor, SectionHeader};
use dioxus::prelude::*;

/// The "Entry" section of a page: a header over a markdown editor in edit mode.
///
/// `content` belongs to the parent and is shown as-is (`None` is an empty
/// editor). Every edit is passed straight through to `on_change`.
#[component]
pub fn Entry(content: Option<String>, on_change: EventHandler<String>) -> Element {
    rsx! {
        SectionHeader { "Entry" }
        MarkdownEditor {
            view: EditorView::Edit,
            value: content,
            on_change
        }
    }
}
