// src/domain/richtext/mod.rs
pub mod document;
pub mod markup;
pub mod surface;

pub use document::{
    Alignment, Block, BlockKind, Document, HeadingLevel, InlineStyle, ListKind, Position, Range,
    Run, Selection,
};
pub use markup::{parse_markup, to_markup};
pub use surface::{EditorCommand, LinkPrompt, Surface, UserEdit};

/// Reduce arbitrary markup to the editor vocabulary.
pub fn sanitize_markup(markup: &str) -> String {
    to_markup(&parse_markup(markup))
}

/// Plain text of a markup fragment, blocks separated by newlines.
pub fn plain_text(markup: &str) -> String {
    parse_markup(markup).text()
}
