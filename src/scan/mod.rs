pub mod line_match;
pub mod scan_config;
pub mod source;

mod sink;

use anyhow::{Context, Result};
use grep::{
    matcher::LineTerminator,
    regex::{RegexMatcher, RegexMatcherBuilder},
    searcher::{BinaryDetection, Searcher, SearcherBuilder},
};
use std::io::Write;
use tracing::{debug, error};

pub use scan_config::ScanConfig;

use sink::PrintSink;
use source::Source;

#[derive(Debug, Default)]
pub struct ScanStats {
    pub sources_scanned: usize,
    pub sources_failed: usize,
    pub lines_matched: u64,
}

/// Scans the sources in order, writing one record per matching line.
///
/// A source that cannot be read is reported and counted; the remaining
/// sources are still scanned.
pub fn scan<W: Write>(config: &ScanConfig, sources: &[Source], out: &mut W) -> Result<ScanStats> {
    let matcher = build_matcher(config)?;
    let mut searcher = build_searcher();

    let mut stats = ScanStats::default();
    for source in sources {
        let name = source.name();
        let mut lines_matched = 0;
        let sink = PrintSink::new(&matcher, &name, config.format, out, &mut lines_matched);
        let result = match source {
            Source::File(path) => searcher.search_path(&matcher, path, sink),
            Source::Stdin => searcher.search_reader(&matcher, std::io::stdin().lock(), sink),
        };

        match result {
            Ok(()) => {
                debug!(source = %name, lines_matched, "source scanned");
                stats.sources_scanned += 1;
                stats.lines_matched += lines_matched;
            }
            Err(err) => {
                error!(source = %name, %err, "failed to scan source");
                stats.sources_failed += 1;
            }
        }
    }

    Ok(stats)
}

fn build_matcher(config: &ScanConfig) -> Result<RegexMatcher> {
    RegexMatcherBuilder::new()
        .line_terminator(Some(b'\n'))
        .case_insensitive(config.case_insensitive)
        .case_smart(config.case_smart)
        .build(&config.pattern)
        .with_context(|| format!("invalid pattern: {}", config.pattern))
}

fn build_searcher() -> Searcher {
    SearcherBuilder::new()
        .binary_detection(BinaryDetection::quit(b'\x00'))
        .line_terminator(LineTerminator::byte(b'\n'))
        .line_number(true)
        .multi_line(false)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;
    use std::path::PathBuf;
    use test_case::test_case;

    fn scan_reader(config: &ScanConfig, input: &str) -> String {
        let matcher = build_matcher(config).unwrap();
        let mut searcher = build_searcher();
        let mut out = Vec::new();
        let mut lines_matched = 0;
        let sink = PrintSink::new(&matcher, "input", config.format, &mut out, &mut lines_matched);
        searcher
            .search_reader(&matcher, input.as_bytes(), sink)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lgrep-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test_case("foo", "food is good\n" => "input:1:food is good\n"; "single matching line")]
    #[test_case("foo", "food is good" => "input:1:food is good\n"; "no trailing newline")]
    #[test_case("needle", "hay\nneedle\nhay\nneedle here\n" => "input:2:needle\ninput:4:needle here\n"; "line numbers are one based")]
    #[test_case("foo", "" => String::new(); "empty input")]
    #[test_case("needle", "hay\nhay\n" => String::new(); "no matches")]
    fn machine_output(pattern: &str, input: &str) -> String {
        let config = ScanConfig::from(pattern.into());
        scan_reader(&config, input)
    }

    #[test]
    fn color_output_highlights_every_match() {
        let config = ScanConfig::from("o+".into()).format(Format::Color);
        assert_eq!(
            scan_reader(&config, "foo boo\n"),
            "input (1) f\x1b[32moo\x1b[39m b\x1b[32moo\x1b[39m\n"
        );
    }

    #[test]
    fn underline_output_marks_every_match() {
        let config = ScanConfig::from("o+".into()).format(Format::Underline);
        assert_eq!(
            scan_reader(&config, "foo boo\n"),
            "input (1) foo boo\n           ^^  ^^\n"
        );
    }

    #[test_case("FOO", "food is good\n", false => String::new(); "sensitive by default")]
    #[test_case("FOO", "food is good\n", true => "input:1:food is good\n".to_string(); "insensitive on request")]
    fn case_sensitivity(pattern: &str, input: &str, case_insensitive: bool) -> String {
        let config = ScanConfig::from(pattern.into()).case_insensitive(case_insensitive);
        scan_reader(&config, input)
    }

    #[test_case("foo", "FOOD\n" => "input:1:FOOD\n".to_string(); "lowercase pattern matches any case")]
    #[test_case("Foo", "FOOD\n" => String::new(); "mixed case pattern stays sensitive")]
    fn smart_case(pattern: &str, input: &str) -> String {
        let config = ScanConfig::from(pattern.into()).case_smart(true);
        scan_reader(&config, input)
    }

    #[test]
    fn malformed_pattern_fails_before_scanning() {
        let config = ScanConfig::from("(unbalanced".into());
        let mut out = Vec::new();
        assert!(scan(&config, &[], &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn sources_are_scanned_in_argument_order() {
        let first = temp_file("order-first.txt", "no match\nstill nothing\nneedle on line 3\n");
        let second = temp_file("order-second.txt", "nothing at all\n");

        let config = ScanConfig::from("needle".into());
        let sources = Source::from_paths(&[first.clone(), second.clone()]);
        let mut out = Vec::new();
        let stats = scan(&config, &sources, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}:3:needle on line 3\n", first.display())
        );
        assert_eq!(stats.sources_scanned, 2);
        assert_eq!(stats.sources_failed, 0);
        assert_eq!(stats.lines_matched, 1);

        std::fs::remove_file(first).ok();
        std::fs::remove_file(second).ok();
    }

    #[test]
    fn unreadable_source_is_skipped_and_counted() {
        let readable = temp_file("skip-readable.txt", "needle\n");

        let config = ScanConfig::from("needle".into());
        let sources = Source::from_paths(&[PathBuf::from("/nonexistent/lgrep.txt"), readable.clone()]);
        let mut out = Vec::new();
        let stats = scan(&config, &sources, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}:1:needle\n", readable.display())
        );
        assert_eq!(stats.sources_scanned, 1);
        assert_eq!(stats.sources_failed, 1);

        std::fs::remove_file(readable).ok();
    }
}
