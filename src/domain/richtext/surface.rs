// src/domain/richtext/surface.rs
//! Editable surface holding a [`Document`] and the operator's selection.
//!
//! Every mutating entry point returns the freshly serialized markup so the
//! owner can store it as the authoritative value. External values arrive
//! through [`Surface::sync_value`], which replaces the document wholesale
//! whenever the value differs from the current serialization.

use crate::domain::richtext::document::{
    Alignment, Block, BlockKind, Document, HeadingLevel, InlineStyle, ListKind, Position, Range,
    Selection,
};
use crate::domain::richtext::markup::{parse_markup, to_markup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Bold,
    Italic,
    Underline,
    Heading(HeadingLevel),
    Paragraph,
    List(ListKind),
    Align(Alignment),
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEdit {
    InsertText(String),
    InsertParagraph,
    DeleteBackward,
}

/// Source of a link target, typically a prompt shown to the operator.
/// Returning `None` or an empty string cancels the insertion.
pub trait LinkPrompt {
    fn request_url(&mut self) -> Option<String>;
}

impl<F> LinkPrompt for F
where
    F: FnMut() -> Option<String>,
{
    fn request_url(&mut self) -> Option<String> {
        self()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Surface {
    document: Document,
    selection: Option<Selection>,
    placeholder: Option<String>,
    focused: bool,
}

impl Surface {
    pub fn new(value: &str, placeholder: Option<String>) -> Self {
        Self {
            document: parse_markup(value),
            selection: None,
            placeholder,
            focused: false,
        }
    }

    pub fn markup(&self) -> String {
        to_markup(&self.document)
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub const fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn select(&mut self, selection: Selection) {
        self.selection = Some(selection);
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Placeholder text, shown only while the surface holds no text.
    pub fn placeholder(&self) -> Option<&str> {
        if self.document.is_blank() {
            self.placeholder.as_deref()
        } else {
            None
        }
    }

    /// Replace the document when `value` differs from the current markup.
    /// Returns whether a replacement happened.
    pub fn sync_value(&mut self, value: &str) -> bool {
        if value == self.markup() {
            return false;
        }
        self.document = parse_markup(value);
        self.selection = None;
        true
    }

    fn range(&self) -> Option<Range> {
        self.selection.and_then(|sel| self.document.resolve(sel))
    }

    /// Apply a formatting command to the current selection. Without a valid
    /// selection this changes nothing; focus returns to the surface either way.
    pub fn set_command(&mut self, command: EditorCommand) -> String {
        self.focused = true;
        if let Some(range) = self.range() {
            self.apply(&command, range);
        }
        self.markup()
    }

    pub fn insert_link(&mut self, prompt: &mut impl LinkPrompt) -> String {
        match prompt.request_url() {
            Some(url) if !url.trim().is_empty() => self.set_command(EditorCommand::Link(url)),
            _ => {
                self.focused = true;
                self.markup()
            }
        }
    }

    fn apply(&mut self, command: &EditorCommand, range: Range) {
        match command {
            EditorCommand::Bold => self.toggle_mark(range, |s| s.bold, |s, on| s.bold = on),
            EditorCommand::Italic => self.toggle_mark(range, |s| s.italic, |s, on| s.italic = on),
            EditorCommand::Underline => {
                self.toggle_mark(range, |s| s.underline, |s, on| s.underline = on);
            }
            EditorCommand::Heading(level) => {
                self.set_kind(range, BlockKind::Heading(*level));
            }
            EditorCommand::Paragraph => self.set_kind(range, BlockKind::Paragraph),
            EditorCommand::List(kind) => {
                let target = BlockKind::ListItem(*kind);
                let all_listed = (range.start.block..=range.end.block)
                    .all(|idx| self.document.blocks[idx].kind == target);
                let next = if all_listed { BlockKind::Paragraph } else { target };
                self.set_kind(range, next);
            }
            EditorCommand::Align(align) => {
                for idx in range.start.block..=range.end.block {
                    self.document.blocks[idx].align = *align;
                }
            }
            EditorCommand::Link(url) => {
                let url = url.trim().to_string();
                if url.is_empty() || range.is_collapsed() {
                    return;
                }
                for (idx, from, to) in range.spans(&self.document) {
                    self.document.blocks[idx].restyle(from, to, |s| s.link = Some(url.clone()));
                }
            }
        }
    }

    fn toggle_mark(
        &mut self,
        range: Range,
        has: impl Fn(&InlineStyle) -> bool,
        set: impl Fn(&mut InlineStyle, bool),
    ) {
        if range.is_collapsed() {
            return;
        }
        let spans: Vec<_> = range
            .spans(&self.document)
            .into_iter()
            .filter(|(_, from, to)| from < to)
            .collect();
        if spans.is_empty() {
            return;
        }
        let all_marked = spans
            .iter()
            .all(|(idx, from, to)| self.document.blocks[*idx].all_in_range(*from, *to, &has));
        for (idx, from, to) in spans {
            self.document.blocks[idx].restyle(from, to, |s| set(s, !all_marked));
        }
    }

    fn set_kind(&mut self, range: Range, kind: BlockKind) {
        for idx in range.start.block..=range.end.block {
            self.document.blocks[idx].kind = kind;
        }
    }

    /// Apply a direct edit at the current selection.
    pub fn on_user_edit(&mut self, edit: UserEdit) -> String {
        self.focused = true;
        if matches!(edit, UserEdit::InsertText(_) | UserEdit::InsertParagraph)
            && self.document.blocks.is_empty()
            && self.selection == Some(Selection::caret(Position::new(0, 0)))
        {
            self.document.blocks.push(Block::default());
        }
        let Some(range) = self.range() else {
            return self.markup();
        };

        let caret = match edit {
            UserEdit::InsertText(text) => self.insert_text(range, &text),
            UserEdit::InsertParagraph => self.insert_paragraph(range),
            UserEdit::DeleteBackward => self.delete_backward(range),
        };
        self.selection = Some(Selection::caret(caret));
        self.markup()
    }

    fn insert_text(&mut self, range: Range, text: &str) -> Position {
        if text.is_empty() {
            return range.end;
        }
        if !range.is_collapsed() {
            self.document.delete_range(range);
        }
        let at = range.start;
        let block = &mut self.document.blocks[at.block];
        let style = block.style_at(at.offset);
        block.insert_text(at.offset, text, style);
        Position::new(at.block, at.offset + text.chars().count())
    }

    fn insert_paragraph(&mut self, range: Range) -> Position {
        if !range.is_collapsed() {
            self.document.delete_range(range);
        }
        let at = range.start;
        let mut tail = self.document.blocks[at.block].split_off(at.offset);
        if matches!(tail.kind, BlockKind::Heading(_)) {
            tail.kind = BlockKind::Paragraph;
        }
        self.document.blocks.insert(at.block + 1, tail);
        Position::new(at.block + 1, 0)
    }

    fn delete_backward(&mut self, range: Range) -> Position {
        if !range.is_collapsed() {
            self.document.delete_range(range);
            return range.start;
        }
        let at = range.start;
        if at.offset > 0 {
            self.document.blocks[at.block].remove_range(at.offset - 1, at.offset);
            return Position::new(at.block, at.offset - 1);
        }
        if at.block == 0 {
            return at;
        }
        let current = self.document.blocks.remove(at.block);
        let prev = &mut self.document.blocks[at.block - 1];
        let joined_at = prev.len();
        prev.append(current);
        Position::new(at.block - 1, joined_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(surface: &mut Surface, start: (usize, usize), end: (usize, usize)) {
        surface.select(Selection::new(
            Position::new(start.0, start.1),
            Position::new(end.0, end.1),
        ));
    }

    #[test]
    fn bold_toggles_over_selection() {
        let mut surface = Surface::new("<p>halo dunia</p>", None);
        select(&mut surface, (0, 0), (0, 4));
        assert_eq!(
            surface.set_command(EditorCommand::Bold),
            "<p><strong>halo</strong> dunia</p>"
        );
        assert_eq!(surface.set_command(EditorCommand::Bold), "<p>halo dunia</p>");
    }

    #[test]
    fn partially_marked_selection_gets_fully_marked() {
        let mut surface = Surface::new("<p><em>ab</em>cd</p>", None);
        select(&mut surface, (0, 0), (0, 4));
        assert_eq!(
            surface.set_command(EditorCommand::Italic),
            "<p><em>abcd</em></p>"
        );
    }

    #[test]
    fn command_without_selection_is_a_noop() {
        let mut surface = Surface::new("<p>teks</p>", None);
        assert_eq!(surface.set_command(EditorCommand::Bold), "<p>teks</p>");
        assert!(surface.is_focused());

        select(&mut surface, (3, 0), (3, 1));
        assert_eq!(surface.set_command(EditorCommand::Underline), "<p>teks</p>");
    }

    #[test]
    fn heading_list_and_alignment_apply_to_caret_block() {
        let mut surface = Surface::new("<p>judul</p><p>isi</p>", None);
        select(&mut surface, (0, 2), (0, 2));
        surface.set_command(EditorCommand::Heading(HeadingLevel::new(3).unwrap()));
        select(&mut surface, (1, 0), (1, 0));
        surface.set_command(EditorCommand::List(ListKind::Unordered));
        let markup = surface.set_command(EditorCommand::Align(Alignment::Center));
        assert_eq!(
            markup,
            "<h3>judul</h3><ul><li style=\"text-align: center;\">isi</li></ul>"
        );

        let markup = surface.set_command(EditorCommand::List(ListKind::Unordered));
        assert_eq!(
            markup,
            "<h3>judul</h3><p style=\"text-align: center;\">isi</p>"
        );
    }

    #[test]
    fn link_prompt_cancel_leaves_content_unchanged() {
        let mut surface = Surface::new("<p>baca ini</p>", None);
        select(&mut surface, (0, 5), (0, 8));

        let mut cancelled = || -> Option<String> { None };
        assert_eq!(surface.insert_link(&mut cancelled), "<p>baca ini</p>");
        let mut empty = || -> Option<String> { Some(String::new()) };
        assert_eq!(surface.insert_link(&mut empty), "<p>baca ini</p>");

        let mut given = || -> Option<String> { Some("https://publartz.id".to_string()) };
        assert_eq!(
            surface.insert_link(&mut given),
            "<p>baca <a href=\"https://publartz.id\">ini</a></p>"
        );
    }

    #[test]
    fn typing_inherits_style_and_moves_caret() {
        let mut surface = Surface::new("<p><strong>ab</strong></p>", None);
        select(&mut surface, (0, 2), (0, 2));
        let markup = surface.on_user_edit(UserEdit::InsertText("c".into()));
        assert_eq!(markup, "<p><strong>abc</strong></p>");
        assert_eq!(
            surface.selection(),
            Some(Selection::caret(Position::new(0, 3)))
        );
    }

    #[test]
    fn typing_into_empty_surface_creates_paragraph() {
        let mut surface = Surface::new("", Some("Tulis konten artikel...".into()));
        assert_eq!(surface.placeholder(), Some("Tulis konten artikel..."));
        select(&mut surface, (0, 0), (0, 0));
        assert_eq!(
            surface.on_user_edit(UserEdit::InsertText("Hai".into())),
            "<p>Hai</p>"
        );
        assert_eq!(surface.placeholder(), None);
    }

    #[test]
    fn enter_splits_and_backspace_joins() {
        let mut surface = Surface::new("<h2>judulisi</h2>", None);
        select(&mut surface, (0, 5), (0, 5));
        assert_eq!(
            surface.on_user_edit(UserEdit::InsertParagraph),
            "<h2>judul</h2><p>isi</p>"
        );
        assert_eq!(
            surface.on_user_edit(UserEdit::DeleteBackward),
            "<h2>judulisi</h2>"
        );
        assert_eq!(
            surface.on_user_edit(UserEdit::DeleteBackward),
            "<h2>juduisi</h2>"
        );
    }

    #[test]
    fn typed_spaces_survive_reload() {
        for typed in ["a  b ", "héllo ", " x"] {
            let mut surface = Surface::new("", None);
            select(&mut surface, (0, 0), (0, 0));
            let markup = surface.on_user_edit(UserEdit::InsertText(typed.into()));
            assert_eq!(to_markup(&parse_markup(&markup)), markup);

            let mut reloaded = Surface::new(&markup, None);
            assert_eq!(reloaded.markup(), markup);
            assert!(!reloaded.sync_value(&markup));
        }
    }

    #[test]
    fn sync_replaces_only_on_difference() {
        let mut surface = Surface::new("<p>a</p>", None);
        assert!(!surface.sync_value("<p>a</p>"));
        assert!(surface.sync_value("<p>b</p>"));
        assert_eq!(surface.markup(), "<p>b</p>");
        assert_eq!(surface.selection(), None);
    }

    #[test]
    fn selection_spanning_blocks_deletes_and_joins() {
        let mut surface = Surface::new("<p>satu</p><p>dua</p>", None);
        select(&mut surface, (1, 1), (0, 2));
        assert_eq!(
            surface.on_user_edit(UserEdit::InsertText("-".into())),
            "<p>sa-ua</p>"
        );
    }
}
