use grep::{
    matcher::Matcher,
    searcher::{Searcher, Sink, SinkMatch},
};
use std::io::Write;

use super::line_match::LineMatch;
use crate::format::Format;

/// Renders every matching line of a single source as it is found.
pub(crate) struct PrintSink<'a, M, W>
where
    M: Matcher,
    W: Write,
{
    matcher: M,
    source_name: &'a str,
    format: Format,
    out: &'a mut W,
    lines_matched: &'a mut u64,
}

impl<'a, M, W> PrintSink<'a, M, W>
where
    M: Matcher,
    W: Write,
{
    pub(crate) fn new(
        matcher: M,
        source_name: &'a str,
        format: Format,
        out: &'a mut W,
        lines_matched: &'a mut u64,
    ) -> Self {
        Self {
            matcher,
            source_name,
            format,
            out,
            lines_matched,
        }
    }
}

impl<M, W> Sink for PrintSink<'_, M, W>
where
    M: Matcher,
    W: Write,
{
    type Error = std::io::Error;

    fn matched(&mut self, _: &Searcher, sink_match: &SinkMatch) -> Result<bool, std::io::Error> {
        let line_number = sink_match
            .line_number()
            .ok_or(std::io::ErrorKind::InvalidData)?;
        let Ok(text) = std::str::from_utf8(sink_match.bytes()) else {
            return Ok(true);
        };
        let text = text.trim_end_matches(['\r', '\n']);

        let mut spans = vec![];
        self.matcher
            .find_iter(text.as_bytes(), |m| {
                spans.push((m.start(), m.end()));
                true
            })
            .ok();

        if spans.is_empty() {
            return Ok(true);
        }

        let line_match = LineMatch::new(line_number, text.into(), spans);
        self.format.write(self.out, self.source_name, &line_match)?;
        *self.lines_matched += 1;

        Ok(true)
    }
}
