// src/domain/richtext/markup.rs
//! Markup (HTML subset) encoding of [`Document`].
//!
//! Serialization emits a closed vocabulary: `p`, `h1`-`h6`, `ul`/`ol`/`li`,
//! `strong`, `em`, `u`, `a href` and `br`, with `style="text-align: …"` for
//! non-default alignment. Parsing accepts arbitrary markup, keeps the text of
//! unknown elements, drops script/style content and unsafe link targets.

use crate::domain::richtext::document::{
    Alignment, Block, BlockKind, Document, HeadingLevel, InlineStyle, ListKind, Run,
};

pub fn to_markup(doc: &Document) -> String {
    let mut out = String::new();
    let mut open_list: Option<ListKind> = None;

    for block in &doc.blocks {
        if let BlockKind::ListItem(kind) = block.kind {
            if open_list != Some(kind) {
                if let Some(prev) = open_list {
                    close_tag(&mut out, prev.tag());
                }
                out.push('<');
                out.push_str(kind.tag());
                out.push('>');
                open_list = Some(kind);
            }
            write_block(&mut out, "li", block);
            continue;
        }

        if let Some(prev) = open_list.take() {
            close_tag(&mut out, prev.tag());
        }
        match block.kind {
            BlockKind::Heading(level) => {
                let tag = format!("h{}", level.get());
                write_block(&mut out, &tag, block);
            }
            _ => write_block(&mut out, "p", block),
        }
    }

    if let Some(prev) = open_list {
        close_tag(&mut out, prev.tag());
    }
    out
}

/// Writes run text so that [`parse_markup`] reads it back unchanged. A space
/// the parser would collapse or trim (at a line edge, or after another
/// space) is written as `&nbsp;`.
fn write_text(out: &mut String, text: &str, mut prev: Option<char>, after: Option<char>) {
    let mut plain = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                flush_plain(out, &mut plain);
                out.push_str("<br>");
            }
            ' ' => {
                let next = chars.peek().copied().or(after);
                let collapsible = matches!(prev, None | Some(' ' | '\n'))
                    || matches!(next, None | Some('\n'));
                if collapsible {
                    flush_plain(out, &mut plain);
                    out.push_str("&nbsp;");
                } else {
                    plain.push(' ');
                }
            }
            _ => plain.push(c),
        }
        prev = Some(c);
    }
    flush_plain(out, &mut plain);
}

fn flush_plain(out: &mut String, plain: &mut String) {
    if !plain.is_empty() {
        out.push_str(&html_escape::encode_text(plain));
        plain.clear();
    }
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_block(out: &mut String, tag: &str, block: &Block) {
    out.push('<');
    out.push_str(tag);
    if block.align != Alignment::Left {
        out.push_str(" style=\"text-align: ");
        out.push_str(block.align.as_css());
        out.push_str(";\"");
    }
    out.push('>');
    let mut prev = None;
    for (i, run) in block.runs.iter().enumerate() {
        let next = block.runs[i + 1..]
            .iter()
            .find_map(|later| later.text.chars().next());
        write_run(out, run, prev, next);
        prev = run.text.chars().last().or(prev);
    }
    close_tag(out, tag);
}

fn write_run(out: &mut String, run: &Run, prev: Option<char>, next: Option<char>) {
    let style = &run.style;
    if let Some(href) = &style.link {
        out.push_str("<a href=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(href));
        out.push_str("\">");
    }
    if style.bold {
        out.push_str("<strong>");
    }
    if style.italic {
        out.push_str("<em>");
    }
    if style.underline {
        out.push_str("<u>");
    }

    write_text(out, &run.text, prev, next);

    if style.underline {
        out.push_str("</u>");
    }
    if style.italic {
        out.push_str("</em>");
    }
    if style.bold {
        out.push_str("</strong>");
    }
    if style.link.is_some() {
        out.push_str("</a>");
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Open {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Close(String),
    Text(&'a str),
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut pos = 0;
    let mut text_start = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'<' {
            pos += 1;
            continue;
        }
        let rest = &input[pos..];
        if rest.starts_with("<!--") {
            if text_start < pos {
                tokens.push(Token::Text(&input[text_start..pos]));
            }
            pos = rest
                .find("-->")
                .map_or(input.len(), |end| pos + end + 3);
            text_start = pos;
            continue;
        }
        let Some((token, consumed)) = parse_tag(rest) else {
            pos += 1;
            continue;
        };
        if text_start < pos {
            tokens.push(Token::Text(&input[text_start..pos]));
        }
        tokens.push(token);
        pos += consumed;
        text_start = pos;
    }
    if text_start < input.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    tokens
}

/// Parse one tag at the start of `input` (which begins with `<`).
fn parse_tag(input: &str) -> Option<(Token<'_>, usize)> {
    let mut chars = input.char_indices().skip(1).peekable();
    let closing = matches!(chars.peek(), Some((_, '/')));
    if closing {
        chars.next();
    }
    // Markup declarations such as `<!doctype>` are skipped as empty opens.
    let declaration = matches!(chars.peek(), Some((_, '!' | '?')));

    let mut name = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_alphanumeric() || (declaration && name.is_empty() && (c == '!' || c == '?')) {
            name.push(c.to_ascii_lowercase());
            chars.next();
        } else {
            break;
        }
    }
    if name.is_empty() {
        return None;
    }

    let mut attrs = Vec::new();
    let mut quote: Option<char> = None;
    let mut buf = String::new();
    let mut end = None;
    for (idx, c) in chars {
        match quote {
            Some(q) if c == q => {
                quote = None;
                buf.push(c);
            }
            Some(_) => buf.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                buf.push(c);
            }
            None if c == '>' => {
                end = Some(idx + 1);
                break;
            }
            None => buf.push(c),
        }
    }
    let end = end?;

    if closing {
        return Some((Token::Close(name), end));
    }
    if !declaration {
        parse_attributes(&buf, &mut attrs);
    }
    Some((Token::Open { name, attrs }, end))
}

fn parse_attributes(raw: &str, attrs: &mut Vec<(String, String)>) {
    let mut chars = raw.chars().peekable();
    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace() || *c == '/') {
            chars.next();
        }
        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '=' || c == '/' {
                break;
            }
            key.push(c.to_ascii_lowercase());
            chars.next();
        }
        if key.is_empty() {
            return;
        }
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        let mut value = String::new();
        if chars.peek() == Some(&'=') {
            chars.next();
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            match chars.peek().copied() {
                Some(q @ ('"' | '\'')) => {
                    chars.next();
                    for c in chars.by_ref() {
                        if c == q {
                            break;
                        }
                        value.push(c);
                    }
                }
                _ => {
                    while let Some(&c) = chars.peek() {
                        if c.is_whitespace() {
                            break;
                        }
                        value.push(c);
                        chars.next();
                    }
                }
            }
        }
        attrs.push((key, html_escape::decode_html_entities(&value).into_owned()));
    }
}

fn attr<'a>(attrs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

fn alignment_of(attrs: &[(String, String)]) -> Alignment {
    attr(attrs, "style")
        .and_then(|style| {
            style.split(';').find_map(|decl| {
                let (prop, value) = decl.split_once(':')?;
                (prop.trim().eq_ignore_ascii_case("text-align"))
                    .then(|| Alignment::from_css(value))
                    .flatten()
            })
        })
        .or_else(|| attr(attrs, "align").and_then(Alignment::from_css))
        .unwrap_or_default()
}

fn safe_href(href: &str) -> Option<String> {
    let trimmed = href.trim();
    if trimmed.is_empty() {
        return None;
    }
    let scheme: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take_while(|c| *c != ':')
        .collect::<String>()
        .to_ascii_lowercase();
    let has_scheme = trimmed.contains(':');
    if has_scheme && matches!(scheme.as_str(), "javascript" | "vbscript" | "data") {
        return None;
    }
    Some(trimmed.to_string())
}

#[derive(Debug)]
enum Mark {
    Bold,
    Italic,
    Underline,
    Link(Option<String>),
    Inert,
}

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    current: Option<Block>,
    explicit: bool,
    marks: Vec<(String, Mark)>,
    lists: Vec<ListKind>,
    li_depth: usize,
    skip: Option<String>,
}

impl Builder {
    fn style(&self) -> InlineStyle {
        let mut style = InlineStyle::default();
        for (_, mark) in &self.marks {
            match mark {
                Mark::Bold => style.bold = true,
                Mark::Italic => style.italic = true,
                Mark::Underline => style.underline = true,
                Mark::Link(href) => style.link.clone_from(href),
                Mark::Inert => {}
            }
        }
        style
    }

    fn flush(&mut self) {
        if let Some(mut block) = self.current.take() {
            trim_trailing_spaces(&mut block);
            if self.explicit || !block.is_empty() {
                self.blocks.push(block);
            }
        }
        self.explicit = false;
    }

    fn open_block(&mut self, kind: BlockKind, align: Alignment) {
        // An empty wrapper (`<div><p>`) is replaced rather than kept.
        if self.current.as_ref().is_some_and(Block::is_empty) {
            self.current = None;
        }
        self.flush();
        self.current = Some(Block {
            kind,
            align,
            runs: Vec::new(),
        });
        self.explicit = true;
    }

    fn block_mut(&mut self) -> &mut Block {
        if self.current.is_none() {
            self.explicit = false;
        }
        self.current.get_or_insert_with(Block::default)
    }

    fn text(&mut self, raw: &str) {
        let decoded = html_escape::decode_html_entities(raw);
        let mut collapsed = String::with_capacity(decoded.len());
        let mut in_space = false;
        for c in decoded.chars() {
            if c.is_ascii_whitespace() {
                if !in_space {
                    collapsed.push(' ');
                }
                in_space = true;
            } else {
                collapsed.push(c);
                in_space = false;
            }
        }

        let at_line_start = self.current.as_ref().is_none_or(|block| {
            block
                .runs
                .last()
                .and_then(|run| run.text.chars().last())
                .is_none_or(|c| c == ' ' || c == '\n')
        });
        let text = if at_line_start {
            collapsed.trim_start_matches(' ')
        } else {
            collapsed.as_str()
        };
        if text.is_empty() {
            return;
        }
        let style = self.style();
        self.block_mut().push_text(text, &style);
    }

    fn line_break(&mut self) {
        let style = self.style();
        let block = self.block_mut();
        trim_trailing_spaces(block);
        block.push_text("\n", &style);
    }

    fn open(&mut self, name: &str, attrs: &[(String, String)]) {
        match name {
            "p" | "div" | "blockquote" | "pre" => {
                if self.li_depth == 0 {
                    self.open_block(BlockKind::Paragraph, alignment_of(attrs));
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name[1..].parse::<u8>().ok().and_then(HeadingLevel::new);
                if let Some(level) = level {
                    self.open_block(BlockKind::Heading(level), alignment_of(attrs));
                }
            }
            "ul" => {
                self.flush();
                self.lists.push(ListKind::Unordered);
            }
            "ol" => {
                self.flush();
                self.lists.push(ListKind::Ordered);
            }
            "li" => {
                let kind = self.lists.last().copied().unwrap_or(ListKind::Unordered);
                self.open_block(BlockKind::ListItem(kind), alignment_of(attrs));
                self.li_depth += 1;
            }
            "br" => self.line_break(),
            "strong" | "b" => self.marks.push((name.to_string(), Mark::Bold)),
            "em" | "i" => self.marks.push((name.to_string(), Mark::Italic)),
            "u" => self.marks.push((name.to_string(), Mark::Underline)),
            "a" => {
                let href = attr(attrs, "href").and_then(safe_href);
                self.marks.push((name.to_string(), Mark::Link(href)));
            }
            "script" | "style" | "head" | "title" | "template" | "noscript" => {
                self.skip = Some(name.to_string());
            }
            "span" | "font" | "mark" | "small" | "sub" | "sup" | "code" | "s" | "strike" => {
                self.marks.push((name.to_string(), Mark::Inert));
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "p" | "div" | "blockquote" | "pre" => {
                if self.li_depth == 0 {
                    self.flush();
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.flush(),
            "li" => {
                self.flush();
                self.li_depth = self.li_depth.saturating_sub(1);
            }
            "ul" | "ol" => {
                self.flush();
                self.li_depth = 0;
                self.lists.pop();
            }
            _ => {
                if let Some(idx) = self.marks.iter().rposition(|(tag, _)| tag == name) {
                    self.marks.remove(idx);
                }
            }
        }
    }

    fn finish(mut self) -> Document {
        self.flush();
        // Non-breaking spaces survive collapsing above; the document stores plain spaces.
        for run in self.blocks.iter_mut().flat_map(|block| block.runs.iter_mut()) {
            if run.text.contains(NBSP) {
                run.text = run.text.replace(NBSP, " ");
            }
        }
        Document::new(self.blocks)
    }
}

const NBSP: char = '\u{a0}';

fn trim_trailing_spaces(block: &mut Block) {
    while let Some(last) = block.runs.last_mut() {
        let trimmed_len = last.text.trim_end_matches(' ').len();
        last.text.truncate(trimmed_len);
        if last.text.is_empty() {
            block.runs.pop();
        } else {
            break;
        }
    }
}

pub fn parse_markup(input: &str) -> Document {
    let mut builder = Builder::default();
    for token in tokenize(input) {
        if let Some(skipped) = &builder.skip {
            if matches!(&token, Token::Close(name) if name == skipped) {
                builder.skip = None;
            }
            continue;
        }
        match token {
            Token::Text(text) => builder.text(text),
            Token::Open { name, attrs } => builder.open(&name, &attrs),
            Token::Close(name) => builder.close(&name),
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_blocks_lists_and_alignment() {
        let mut heading = Block::with_text(
            BlockKind::Heading(HeadingLevel::new(2).unwrap()),
            "Judul",
        );
        heading.align = Alignment::Center;
        let doc = Document::new(vec![
            heading,
            Block::with_text(BlockKind::ListItem(ListKind::Unordered), "satu"),
            Block::with_text(BlockKind::ListItem(ListKind::Unordered), "dua"),
            Block::with_text(BlockKind::ListItem(ListKind::Ordered), "tiga"),
            Block::with_text(BlockKind::Paragraph, "a < b"),
        ]);
        assert_eq!(
            to_markup(&doc),
            "<h2 style=\"text-align: center;\">Judul</h2>\
             <ul><li>satu</li><li>dua</li></ul>\
             <ol><li>tiga</li></ol>\
             <p>a &lt; b</p>"
        );
    }

    #[test]
    fn parses_inline_marks_and_links() {
        let doc = parse_markup(
            "<p><strong>Web Development:</strong> Membuat <a href=\"https://x.id\"><em>situs</em></a></p>",
        );
        assert_eq!(doc.blocks.len(), 1);
        let runs = &doc.blocks[0].runs;
        assert_eq!(runs[0].text, "Web Development:");
        assert!(runs[0].style.bold);
        assert_eq!(runs[1].text, " Membuat ");
        assert_eq!(runs[2].text, "situs");
        assert!(runs[2].style.italic);
        assert_eq!(runs[2].style.link.as_deref(), Some("https://x.id"));
    }

    #[test]
    fn keeps_text_of_unknown_tags_and_drops_scripts() {
        let doc = parse_markup("<section>halo <script>alert(1)</script><b>dunia</b></section>");
        assert_eq!(doc.text(), "halo dunia");
    }

    #[test]
    fn drops_unsafe_link_targets() {
        let doc = parse_markup("<p><a href=\"javascript:alert(1)\">klik</a></p>");
        assert_eq!(doc.blocks[0].runs[0].style.link, None);
        assert_eq!(to_markup(&doc), "<p>klik</p>");
    }

    #[test]
    fn parses_lists_with_nested_paragraphs() {
        let doc = parse_markup("<ol><li><p>satu</p></li><li>dua</li></ol>");
        assert_eq!(doc.blocks.len(), 2);
        assert!(doc
            .blocks
            .iter()
            .all(|b| b.kind == BlockKind::ListItem(ListKind::Ordered)));
    }

    #[test]
    fn loose_text_becomes_a_paragraph() {
        let doc = parse_markup("teks biasa");
        assert_eq!(to_markup(&doc), "<p>teks biasa</p>");
        assert_eq!(to_markup(&parse_markup("")), "");
    }

    #[test]
    fn line_breaks_survive_round_trip() {
        let markup = "<p>baris satu<br>baris dua</p>";
        assert_eq!(to_markup(&parse_markup(markup)), markup);
    }

    #[test]
    fn entities_are_decoded_then_reencoded() {
        let doc = parse_markup("<p>Q&amp;A &quot;tips&quot;</p>");
        assert_eq!(doc.text(), "Q&A \"tips\"");
        assert_eq!(to_markup(&doc), "<p>Q&amp;A \"tips\"</p>");
    }

    #[test]
    fn edge_and_repeated_spaces_use_nbsp() {
        let doc = Document::new(vec![
            Block::with_text(BlockKind::Paragraph, "a  b "),
            Block::with_text(BlockKind::Paragraph, " héllo\n x"),
        ]);
        let markup = to_markup(&doc);
        assert_eq!(
            markup,
            "<p>a &nbsp;b&nbsp;</p><p>&nbsp;héllo<br>&nbsp;x</p>"
        );
        assert_eq!(parse_markup(&markup), doc);
        assert_eq!(to_markup(&parse_markup(&markup)), markup);
    }

    #[test]
    fn spaces_across_run_boundaries_round_trip() {
        let bold = InlineStyle {
            bold: true,
            ..InlineStyle::default()
        };
        let mut block = Block::with_text(BlockKind::Paragraph, "kata ");
        block.push_text(" tebal ", &bold);
        let doc = Document::new(vec![block]);
        let markup = to_markup(&doc);
        assert_eq!(markup, "<p>kata <strong>&nbsp;tebal&nbsp;</strong></p>");
        assert_eq!(parse_markup(&markup), doc);
    }

    #[test]
    fn collapsible_whitespace_from_foreign_markup_is_still_collapsed() {
        let doc = parse_markup("<p>  a \n  b  </p>");
        assert_eq!(doc.text(), "a b");
        assert_eq!(parse_markup("<p>x&nbsp;</p>").text(), "x ");
    }

    #[test]
    fn serialization_is_stable() {
        let markup = "<h3 style=\"text-align: right;\"><u>Catatan</u></h3>\
                      <p><a href=\"https://a.id/?x=1&amp;y=2\"><strong>tautan</strong></a> akhir</p>";
        let once = to_markup(&parse_markup(markup));
        assert_eq!(once, markup);
        assert_eq!(to_markup(&parse_markup(&once)), once);
    }
}
