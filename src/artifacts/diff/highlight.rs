//! Highlighted rendering of the "after" side of a file change
//!
//! The renderer diffs the two versions line by line, ignoring spaces, and
//! reproduces the after content with every inserted or changed span wrapped in
//! a pair of markers. A change that replaces exactly one line with one line is
//! diffed again byte by byte so that only the edited part of the line is
//! marked. Deleted lines leave no trace in the output.

use crate::MarkerStyle;
use crate::artifacts::diff::change::EditScript;
use crate::artifacts::diff::content::split_lines;
use crate::artifacts::diff::equality::{Identity, IgnoreSpaces};
use crate::artifacts::diff::granularity::merge;
use crate::artifacts::diff::sequence::diff;
use derive_new::new;

pub const ANSI_BEGIN: &str = "\x1b[1;92m";
pub const ANSI_END: &str = "\x1b[0m";
pub const BRACKET_BEGIN: &str = "{+";
pub const BRACKET_END: &str = "+}";

pub const DEFAULT_GRANULARITY: usize = 3;
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Begin/end tokens wrapped around changed spans
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Markers {
    #[new(into)]
    pub begin: String,
    #[new(into)]
    pub end: String,
}

impl Markers {
    pub fn ansi() -> Self {
        Self::new(ANSI_BEGIN, ANSI_END)
    }

    pub fn bracket() -> Self {
        Self::new(BRACKET_BEGIN, BRACKET_END)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::ansi()
    }
}

impl From<MarkerStyle> for Markers {
    fn from(style: MarkerStyle) -> Self {
        match style {
            MarkerStyle::Ansi => Self::ansi(),
            MarkerStyle::Bracket => Self::bracket(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HighlightOptions {
    pub markers: Markers,
    /// Unchanged byte runs shorter than this are absorbed into the
    /// surrounding changes of a single-line edit
    pub granularity: usize,
    pub tab_width: usize,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self::new(Markers::default(), DEFAULT_GRANULARITY, DEFAULT_TAB_WIDTH)
    }
}

#[derive(Debug, Clone, Default, new)]
pub struct Highlighter {
    options: HighlightOptions,
}

impl Highlighter {
    /// Line-level edit script, with spaces ignored
    pub fn line_script(&self, before: &[u8], after: &[u8]) -> EditScript {
        diff(&split_lines(before), &split_lines(after), &IgnoreSpaces)
    }

    /// Byte-level edit script for a single replaced line, merged at the
    /// configured granularity
    pub fn byte_script(&self, before_line: &[u8], after_line: &[u8]) -> EditScript {
        merge(
            self.options.granularity,
            &diff(before_line, after_line, &Identity),
        )
    }

    pub fn render(&self, before: &[u8], after: &[u8]) -> Vec<u8> {
        let before_lines = split_lines(before);
        let after_lines = split_lines(after);
        let script = self.line_script(before, after);

        let mut out = Output::new(&self.options, after.len());
        let mut next = 0;

        for change in &script {
            for line in &after_lines[next..change.after_pos] {
                out.start_line();
                out.plain(line);
            }

            if change.delete_count == 1 && change.insert_count == 1 {
                let before_line = before_lines[change.before_pos];
                let after_line = after_lines[change.after_pos];
                out.start_line();
                self.render_line_edit(&mut out, before_line, after_line);
            } else {
                for line in &after_lines[change.after_pos..change.after_end()] {
                    out.start_line();
                    out.marked(line);
                }
            }

            next = change.after_end();
        }

        for line in &after_lines[next..] {
            out.start_line();
            out.plain(line);
        }

        out.finish()
    }

    fn render_line_edit(&self, out: &mut Output, before_line: &[u8], after_line: &[u8]) {
        let mut pos = 0;

        for change in self.byte_script(before_line, after_line) {
            if change.is_deletion() {
                continue;
            }

            let (start, end) = char_span(after_line, change.after_pos, change.after_end());
            let start = start.max(pos);
            if end <= start {
                continue;
            }

            out.plain(&after_line[pos..start]);
            out.marked(&after_line[start..end]);
            pos = end;
        }

        out.plain(&after_line[pos..]);
    }
}

/// Widen a byte span so it neither starts nor ends inside a UTF-8 sequence
fn char_span(line: &[u8], mut start: usize, mut end: usize) -> (usize, usize) {
    let continuation = |b: u8| b & 0b1100_0000 == 0b1000_0000;

    while start > 0 && start < line.len() && continuation(line[start]) {
        start -= 1;
    }
    while end < line.len() && continuation(line[end]) {
        end += 1;
    }

    (start, end)
}

struct Output<'o> {
    buf: Vec<u8>,
    options: &'o HighlightOptions,
    lines: usize,
}

impl<'o> Output<'o> {
    fn new(options: &'o HighlightOptions, capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            options,
            lines: 0,
        }
    }

    fn start_line(&mut self) {
        if self.lines > 0 {
            self.buf.push(b'\n');
        }
        self.lines += 1;
    }

    fn plain(&mut self, text: &[u8]) {
        for &byte in text {
            if byte == b'\t' {
                // a tab never collapses to nothing
                self.buf
                    .extend(std::iter::repeat_n(b' ', self.options.tab_width.max(1)));
            } else {
                self.buf.push(byte);
            }
        }
    }

    fn marked(&mut self, text: &[u8]) {
        if text.is_empty() {
            return;
        }

        self.buf
            .extend_from_slice(self.options.markers.begin.as_bytes());
        self.plain(text);
        self.buf.extend_from_slice(self.options.markers.end.as_bytes());
    }

    fn finish(self) -> Vec<u8> {
        self.buf
    }
}
