//! Fixed-width text layout for item descriptions
//!
//! Descriptions arrive as one long string where `$` marks a paragraph break.
//! They are re-flowed into indented lines no wider than the report.

use dc_core::REPORT_WIDTH;
use unicode_width::UnicodeWidthStr;

/// In-band paragraph break marker
pub const SENTINEL: char = '$';

/// Indent and margin for a laid-out block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Spaces at the start of every line
    pub indent: usize,
    /// Lines wrap before reaching this column
    pub margin: usize,
}

/// Layout used for artefact descriptions in the inventory
pub const DESCRIPTION_LAYOUT: Layout = Layout {
    indent: 3,
    margin: REPORT_WIDTH,
};

impl Layout {
    /// Lay out `input`, returning the block (always newline terminated)
    pub fn wrap(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() + 32);
        self.wrap_into(input, &mut out);
        out
    }

    /// Lay out `input`, appending to `out`
    ///
    /// Whitespace runs collapse to one space and never start a line.
    /// Consecutive sentinels give a single break. A word that would reach the
    /// margin moves to the next line; a word too long for any line is placed
    /// whole on a line of its own.
    pub fn wrap_into(&self, input: &str, out: &mut String) {
        let mut line_len = self.indent;
        self.push_indent(out);

        let mut chars = input.chars().peekable();
        while let Some(&ch) = chars.peek() {
            if ch == SENTINEL {
                while chars.next_if_eq(&SENTINEL).is_some() {}
                self.new_line(out, &mut line_len);
            } else if ch.is_whitespace() {
                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                if line_len >= self.margin {
                    self.new_line(out, &mut line_len);
                } else if line_len > self.indent {
                    out.push(' ');
                    line_len += 1;
                }
            } else {
                let mut word = String::new();
                while let Some(c) = chars.next_if(|c| !c.is_whitespace() && *c != SENTINEL) {
                    word.push(c);
                }

                let width = word.width();
                if line_len > self.indent && line_len + width >= self.margin {
                    self.new_line(out, &mut line_len);
                }
                out.push_str(&word);
                line_len += width;
            }
        }

        out.push('\n');
    }

    fn push_indent(&self, out: &mut String) {
        out.extend(std::iter::repeat_n(' ', self.indent));
    }

    fn new_line(&self, out: &mut String, line_len: &mut usize) {
        out.push('\n');
        self.push_indent(out);
        *line_len = self.indent;
    }
}

/// Convert `$` paragraph marks to line breaks and word wrap to the report width
pub fn munge_description(input: &str) -> String {
    DESCRIPTION_LAYOUT.wrap(input)
}
