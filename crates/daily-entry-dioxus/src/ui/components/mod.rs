pub mod entry;
pub mod markdown_editor;
pub mod section_header;

pub use entry::Entry;
pub use markdown_editor::{EditorSlot, EditorView, MarkdownEditor};
pub use section_header::SectionHeader;
