use std::io::{self, Write};

use strum::Display;
use unicode_width::UnicodeWidthStr;

use crate::scan::line_match::LineMatch;

const HIGHLIGHT: &str = "\x1b[32m";
const HIGHLIGHT_OFF: &str = "\x1b[39m";

/// Output format for matching lines, selected once at startup.
#[derive(Display, Default, PartialEq, Eq, Copy, Clone, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    #[default]
    Machine,
    Color,
    Underline,
}

impl Format {
    pub fn write<W: Write>(
        self,
        out: &mut W,
        source_name: &str,
        line_match: &LineMatch,
    ) -> io::Result<()> {
        let record = match self {
            Format::Machine => machine(source_name, line_match),
            Format::Color => color(source_name, line_match),
            Format::Underline => underline(source_name, line_match),
        };
        writeln!(out, "{record}")
    }
}

fn machine(name: &str, line_match: &LineMatch) -> String {
    format!(
        "{}:{}:{}",
        name,
        line_match.line_number,
        line_match.text.trim()
    )
}

fn color(name: &str, line_match: &LineMatch) -> String {
    let mut record = format!("{} ({}) ", name, line_match.line_number);
    let mut last = 0;
    for &(start, end) in &line_match.spans {
        record.push_str(&line_match.text[last..start]);
        record.push_str(HIGHLIGHT);
        record.push_str(&line_match.text[start..end]);
        record.push_str(HIGHLIGHT_OFF);
        last = end;
    }
    // unmatched suffix, so that stripping the escapes yields the whole line
    record.push_str(&line_match.text[last..]);
    record
}

fn underline(name: &str, line_match: &LineMatch) -> String {
    let prefix = format!("{} ({}) ", name, line_match.line_number);
    let mut carets = " ".repeat(prefix.width());
    let mut last = 0;
    for &(start, end) in &line_match.spans {
        carets.push_str(&" ".repeat(line_match.text[last..start].width()));
        carets.push_str(&"^".repeat(line_match.text[start..end].width()));
        last = end;
    }
    format!("{}{}\n{}", prefix, line_match.text, carets)
}
