// src/domain/richtext/document.rs
//! Structured document model behind the rich-text surface.
//!
//! A document is a flat list of blocks (paragraphs, headings, list items).
//! Each block holds styled text runs; links are an inline style rather than
//! a separate node so that mark toggles and link insertion share one code
//! path. Offsets are counted in `char`s within a block.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Heading rank, `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const fn new(level: u8) -> Option<Self> {
        if level >= 1 && level <= 6 {
            Some(Self(level))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockKind {
    #[default]
    Paragraph,
    Heading(HeadingLevel),
    ListItem(ListKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: InlineStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub kind: BlockKind,
    pub align: Alignment,
    pub runs: Vec<Run>,
}

fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(idx, _)| idx)
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_text(kind: BlockKind, text: &str) -> Self {
        let mut block = Self::new(kind);
        block.push_text(text, &InlineStyle::default());
        block
    }

    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.text.chars().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn push_text(&mut self, text: &str, style: &InlineStyle) {
        if text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.style == *style => last.text.push_str(text),
            _ => self.runs.push(Run {
                text: text.to_string(),
                style: style.clone(),
            }),
        }
    }

    /// Style a character typed at `offset` inherits: the style of the
    /// preceding character, or of the first character at the block start.
    pub fn style_at(&self, offset: usize) -> InlineStyle {
        let target = offset.saturating_sub(1);
        let mut pos = 0;
        for run in &self.runs {
            let len = run.text.chars().count();
            if target < pos + len {
                return run.style.clone();
            }
            pos += len;
        }
        self.runs
            .last()
            .map(|run| run.style.clone())
            .unwrap_or_default()
    }

    /// True when every character in `start..end` satisfies `pred`.
    /// An empty range is never satisfied.
    pub fn all_in_range(&self, start: usize, end: usize, pred: impl Fn(&InlineStyle) -> bool) -> bool {
        if start >= end {
            return false;
        }
        let mut pos = 0;
        for run in &self.runs {
            let len = run.text.chars().count();
            let overlaps = pos < end && start < pos + len;
            if overlaps && !pred(&run.style) {
                return false;
            }
            pos += len;
        }
        true
    }

    pub fn restyle(&mut self, start: usize, end: usize, f: impl Fn(&mut InlineStyle)) {
        if start >= end {
            return;
        }
        let first = self.split_runs_at(start);
        let last = self.split_runs_at(end);
        for run in &mut self.runs[first..last] {
            f(&mut run.style);
        }
        self.normalize();
    }

    pub fn insert_text(&mut self, offset: usize, text: &str, style: InlineStyle) {
        if text.is_empty() {
            return;
        }
        let idx = self.split_runs_at(offset);
        self.runs.insert(
            idx,
            Run {
                text: text.to_string(),
                style,
            },
        );
        self.normalize();
    }

    pub fn remove_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let first = self.split_runs_at(start);
        let last = self.split_runs_at(end);
        self.runs.drain(first..last);
        self.normalize();
    }

    /// Split at `offset`, keeping the head and returning the tail as a block
    /// of the same kind and alignment.
    pub fn split_off(&mut self, offset: usize) -> Self {
        let idx = self.split_runs_at(offset);
        let tail = self.runs.split_off(idx);
        self.normalize();
        let mut block = Self {
            kind: self.kind,
            align: self.align,
            runs: tail,
        };
        block.normalize();
        block
    }

    pub fn append(&mut self, other: Self) {
        self.runs.extend(other.runs);
        self.normalize();
    }

    /// Ensure a run boundary sits at `offset`; returns the index of the first
    /// run starting there.
    fn split_runs_at(&mut self, offset: usize) -> usize {
        let mut pos = 0;
        for idx in 0..self.runs.len() {
            if offset == pos {
                return idx;
            }
            let len = self.runs[idx].text.chars().count();
            if offset < pos + len {
                let at = byte_index(&self.runs[idx].text, offset - pos);
                let tail = self.runs[idx].text.split_off(at);
                let style = self.runs[idx].style.clone();
                self.runs.insert(idx + 1, Run { text: tail, style });
                return idx + 1;
            }
            pos += len;
        }
        self.runs.len()
    }

    pub(crate) fn normalize(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.style == run.style => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub block: usize,
    pub offset: usize,
}

impl Position {
    pub const fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// Selection as reported by the operator: anchor and focus may be in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub focus: Position,
}

impl Selection {
    pub const fn new(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    pub const fn caret(at: Position) -> Self {
        Self {
            anchor: at,
            focus: at,
        }
    }
}

/// A selection checked against a document, with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Local `(block, start, end)` spans covered by the range.
    pub fn spans(&self, doc: &Document) -> Vec<(usize, usize, usize)> {
        (self.start.block..=self.end.block)
            .map(|idx| {
                let from = if idx == self.start.block { self.start.offset } else { 0 };
                let to = if idx == self.end.block {
                    self.end.offset
                } else {
                    doc.blocks[idx].len()
                };
                (idx, from, to)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub const fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.blocks.iter().all(|block| block.text().trim().is_empty())
    }

    /// Validate a selection; positions outside the document yield `None`.
    pub fn resolve(&self, selection: Selection) -> Option<Range> {
        let valid = |pos: Position| {
            self.blocks
                .get(pos.block)
                .is_some_and(|block| pos.offset <= block.len())
        };
        if !valid(selection.anchor) || !valid(selection.focus) {
            return None;
        }
        let (start, end) = if selection.anchor <= selection.focus {
            (selection.anchor, selection.focus)
        } else {
            (selection.focus, selection.anchor)
        };
        Some(Range { start, end })
    }

    /// Remove the text covered by `range`, joining the first and last block.
    pub fn delete_range(&mut self, range: Range) {
        let Range { start, end } = range;
        if start.block == end.block {
            self.blocks[start.block].remove_range(start.offset, end.offset);
            return;
        }
        let tail = self.blocks[end.block].split_off(end.offset);
        let first = &mut self.blocks[start.block];
        let first_len = first.len();
        first.remove_range(start.offset, first_len);
        first.append(tail);
        self.blocks.drain(start.block + 1..=end.block);
    }
}
