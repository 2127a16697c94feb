use dioxus::prelude::*;
use pulldown_cmark::{Event as MdEvent, Options, Parser, html};
use std::cell::RefCell;
use std::rc::Rc;

/// Display mode of a [`MarkdownEditor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorView {
    /// Raw markdown in a textarea
    #[default]
    Edit,
    /// Rendered HTML, read only
    Preview,
}

impl EditorView {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorView::Edit => "edit",
            EditorView::Preview => "preview",
        }
    }
}

/// Lets an ancestor feed text into the edit-mode editor mounted beneath it.
///
/// Text sent through the slot takes the same path as typing: it is handed to
/// whatever `on_change` the editor was given.
#[derive(Clone, Default)]
pub struct EditorSlot(Rc<RefCell<Option<EventHandler<String>>>>);

impl EditorSlot {
    fn attach(&self, on_change: Option<EventHandler<String>>) {
        *self.0.borrow_mut() = on_change;
    }

    /// Returns `false` when no editor in edit mode is mounted below the slot
    pub fn send(&self, text: impl Into<String>) -> bool {
        let Some(on_change) = *self.0.borrow() else {
            return false;
        };
        emit_change(&on_change, text.into());
        true
    }
}

/// Markdown editing widget.
///
/// In edit mode every input event hands the full text to `on_change`; the
/// editor keeps no copy of its own, so `value` is always the parent's text.
/// Preview mode renders `value` as HTML and never reports changes.
///
/// Raw HTML in the source is shown as text, never injected into the page.
#[component]
pub fn MarkdownEditor(
    view: EditorView,
    value: Option<String>,
    on_change: EventHandler<String>,
) -> Element {
    let text = value.unwrap_or_default();

    if let Some(slot) = try_use_context::<EditorSlot>() {
        slot.attach((view == EditorView::Edit).then_some(on_change));
    }

    rsx! {
        div {
            class: "markdown-editor",
            "data-view": view.as_str(),
            {match view {
                EditorView::Edit => rsx! {
                    textarea {
                        class: "markdown-editor-input",
                        value: text.clone(),
                        rows: textarea_rows(&text),
                        spellcheck: false,
                        oninput: move |event: Event<FormData>| {
                            emit_change(&on_change, event.value());
                        },
                    }
                },
                EditorView::Preview => rsx! {
                    MarkdownPreview { source: text }
                },
            }}
        }
    }
}

#[component]
fn MarkdownPreview(source: String) -> Element {
    if source.trim().is_empty() {
        return rsx! {
            p { class: "markdown-empty", "Nothing written yet." }
        };
    }

    let rendered = render_markdown(&source);
    rsx! {
        div {
            class: "markdown-preview",
            dangerous_inner_html: "{rendered}"
        }
    }
}

/// Forward an edit to the owner of the text
fn emit_change(on_change: &EventHandler<String>, value: String) {
    log::debug!("markdown editor changed ({} bytes)", value.len());
    on_change.call(value);
}

fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        MdEvent::Html(raw) | MdEvent::InlineHtml(raw) => MdEvent::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn textarea_rows(content: &str) -> u32 {
    content.lines().count().clamp(1, 20) as u32
}
