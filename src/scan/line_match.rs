/// Matches found within a single line of a source.
///
/// `spans` holds the non-overlapping `(start, end)` byte offsets of every
/// match, in left-to-right order, within `text` (line terminator already
/// stripped). A line without matches never becomes a `LineMatch`.
pub struct LineMatch {
    pub line_number: u64,
    pub text: String,
    pub spans: Vec<(usize, usize)>,
}

impl LineMatch {
    pub fn new(line_number: u64, text: String, spans: Vec<(usize, usize)>) -> Self {
        debug_assert!(!spans.is_empty());
        Self {
            line_number,
            text,
            spans,
        }
    }
}
