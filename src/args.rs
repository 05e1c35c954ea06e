use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::format::Format;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
            ArgGroup::new("output-format")
                .args(["color", "underline", "machine"])
))]
pub struct Args {
    /// Regular expression used for searching.
    pub pattern: String,
    /// Files to search. If none are given, standard input is searched.
    pub files: Vec<PathBuf>,
    /// Highlight the matches in color.
    #[arg(short, long)]
    pub color: bool,
    /// Mark the matches with '^' on a line below.
    #[arg(short, long)]
    pub underline: bool,
    /// Print in machine format: [file name]:[line number]:[line]. The default.
    #[arg(short, long)]
    pub machine: bool,
    /// Searches case insensitively.
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
    /// Searches case insensitively if the pattern is all lowercase.
    /// Search case sensitively otherwise.
    #[arg(short = 'S', long)]
    pub smart_case: bool,
}

impl Args {
    pub fn format(&self) -> Format {
        if self.color {
            Format::Color
        } else if self.underline {
            Format::Underline
        } else {
            Format::Machine
        }
    }
}
